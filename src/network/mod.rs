pub mod allow_list;
pub mod fetch;
pub mod types;

pub use types::{FetchError, FetchFn, FetchResponse};
pub use allow_list::{content_path, is_path_allowed};
pub use fetch::{create_dir_fetch_fn, fetch_text};

// src/commands/cat/mod.rs
use async_trait::async_trait;
use crate::commands::{Arity, Command, CommandContext, CommandError, CommandResult};
use crate::fs::{FileContent, FileRef, FsError};
use crate::network::{fetch_text, FetchError};
use crate::session::Session;

pub struct CatCommand;

/// Read a file from the current directory. Local files win over permanent
/// ones; deferred permanent files are fetched through the session's provider.
pub async fn read_file(session: &Session, name: &str) -> Result<String, CommandError> {
    let view = session.fs.combined_view(session.cwd());
    let content = match view.files.get(name) {
        Some(FileRef::Local(text)) => return Ok(text.to_string()),
        Some(FileRef::Permanent(content)) => (*content).clone(),
        None => return Err(FsError::FileNotFound.into()),
    };

    match content {
        FileContent::Inline(text) => Ok(text),
        FileContent::Deferred { path } => {
            let fetch_fn = session.fetch_fn.as_ref().ok_or(FetchError::Unavailable)?;
            Ok(fetch_text(fetch_fn, &path).await?)
        }
    }
}

#[async_trait]
impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn arity(&self) -> Arity {
        Arity::Exactly(1)
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let name = ctx.args.first().map(String::as_str).unwrap_or_default();
        match read_file(ctx.session, name).await {
            Ok(text) => CommandResult::success(text),
            Err(e) => CommandResult::error(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::pin::Pin;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use crate::fs::{LayeredFs, LocalTree, PermanentTree};
    use crate::network::{FetchFn, FetchResponse};
    use crate::session::VariableStore;

    fn mock_fetch(status: u16, body: &str, calls: Arc<AtomicUsize>) -> FetchFn {
        let body = body.to_string();
        Arc::new(move |path: String| {
            calls.fetch_add(1, Ordering::SeqCst);
            let body = body.clone();
            Box::pin(async move {
                Ok(FetchResponse { status, body, path })
            }) as Pin<Box<dyn Future<Output = Result<FetchResponse, String>> + Send>>
        })
    }

    fn failing_fetch(message: &str) -> FetchFn {
        let message = message.to_string();
        Arc::new(move |_path: String| {
            let message = message.clone();
            Box::pin(async move { Err(message) })
                as Pin<Box<dyn Future<Output = Result<FetchResponse, String>> + Send>>
        })
    }

    fn about_me() -> PermanentTree {
        PermanentTree::new().with_dir(
            "aboutMe",
            PermanentTree::new()
                .with_file("resume.txt", FileContent::deferred("aboutMe/resume.txt"))
                .with_file("inline.txt", "inline body"),
        )
    }

    fn session(fetch_fn: Option<FetchFn>) -> Session {
        let mut fs = LayeredFs::new(about_me());
        fs.cd("aboutMe").unwrap();
        Session::new(fs, VariableStore::new(), fetch_fn)
    }

    async fn cat(session: &mut Session, name: &str) -> CommandResult {
        CatCommand.execute(CommandContext { args: vec![name.to_string()], session }).await
    }

    #[tokio::test]
    async fn test_cat_inline_permanent() {
        let mut session = session(None);
        assert_eq!(cat(&mut session, "inline.txt").await.output, "inline body");
    }

    #[tokio::test]
    async fn test_cat_deferred_success() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut session = session(Some(mock_fetch(200, "my resume", calls.clone())));
        let result = cat(&mut session, "resume.txt").await;
        assert_eq!(result.output, "my resume");
        assert_eq!(result.exit_code, 0);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_cat_deferred_error_status() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut session = session(Some(mock_fetch(404, "", calls)));
        let result = cat(&mut session, "resume.txt").await;
        assert_eq!(result.output, "Error fetching file: 404");
        assert_eq!(result.exit_code, 1);
        assert!(session.fs.combined_view("/aboutMe").files.contains_key("resume.txt"));
    }

    #[tokio::test]
    async fn test_cat_deferred_transport_failure() {
        let mut session = session(Some(failing_fetch("connection refused")));
        let result = cat(&mut session, "resume.txt").await;
        assert_eq!(result.output, "Error fetching file: connection refused");
        assert_eq!(result.exit_code, 1);
    }

    #[tokio::test]
    async fn test_cat_deferred_without_provider() {
        let mut session = session(None);
        let result = cat(&mut session, "resume.txt").await;
        assert_eq!(result.output, "Error fetching file: no content provider configured");
    }

    #[tokio::test]
    async fn test_cat_missing_file() {
        let mut session = session(None);
        assert_eq!(cat(&mut session, "nope.txt").await.output, "File not found");
    }

    #[tokio::test]
    async fn test_cat_local_wins_over_permanent() {
        let permanent = PermanentTree::new().with_file("notes.txt", FileContent::deferred("notes.txt"));
        let local = LocalTree::new().with_file("notes.txt", "local notes");
        let calls = Arc::new(AtomicUsize::new(0));
        let fs = LayeredFs::with_local(permanent, local);
        let mut session = Session::new(fs, VariableStore::new(), Some(mock_fetch(200, "remote", calls.clone())));
        let result = cat(&mut session, "notes.txt").await;
        assert_eq!(result.output, "local notes");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_cat_local_file() {
        let mut session = Session::default();
        session.fs.touch("a.txt").unwrap();
        let result = cat(&mut session, "a.txt").await;
        assert_eq!(result, CommandResult::success(String::new()));
    }
}

//! Layered File System
//!
//! Two trees share one namespace: a permanent tree fixed at startup and a
//! local tree that every mutating command writes to. Reads go through a
//! combined view computed on demand, where local entries override permanent
//! ones with the same name.

use lazy_static::lazy_static;
use regex_lite::Regex;

use super::path::{self, ROOT};
use super::types::*;

lazy_static! {
    static ref DIR_NAME: Regex = Regex::new(r"^[A-Za-z0-9]+$").unwrap();
    static ref FILE_NAME: Regex = Regex::new(r"^[A-Za-z0-9.]+$").unwrap();
}

/// Message returned by `ls` when neither tree has entries at the current path.
pub const EMPTY_DIRECTORY: &str = "Directory is empty";

/// The permanent and local trees plus the current working directory.
#[derive(Debug, Clone)]
pub struct LayeredFs {
    permanent: PermanentTree,
    local: LocalTree,
    cwd: String,
}

impl LayeredFs {
    /// Create a file system over `permanent` with an empty local tree at `/`.
    pub fn new(permanent: PermanentTree) -> Self {
        Self::with_local(permanent, LocalTree::new())
    }

    /// Create a file system from both trees, starting at `/`.
    pub fn with_local(permanent: PermanentTree, local: LocalTree) -> Self {
        Self { permanent, local, cwd: ROOT.to_string() }
    }

    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    pub fn permanent(&self) -> &PermanentTree {
        &self.permanent
    }

    pub fn local(&self) -> &LocalTree {
        &self.local
    }

    /// Merge both trees at `path`. A path missing from one tree contributes
    /// nothing from that side.
    pub fn combined_view(&self, path: &str) -> CombinedView<'_> {
        let mut view = CombinedView::default();

        if let Some(dir) = path::resolve(&self.permanent, path) {
            for name in dir.dirs.keys() {
                view.dirs.insert(name.as_str(), Layer::Permanent);
            }
            for (name, content) in &dir.files {
                view.files.insert(name.as_str(), FileRef::Permanent(content));
            }
        }

        if let Some(dir) = path::resolve(&self.local, path) {
            for name in dir.dirs.keys() {
                view.dirs.insert(name.as_str(), Layer::Local);
            }
            for (name, content) in &dir.files {
                view.files.insert(name.as_str(), FileRef::Local(content.as_str()));
            }
        }

        view
    }

    /// Directories first, each suffixed with `/`, then files; one per line.
    pub fn ls(&self) -> String {
        let view = self.combined_view(&self.cwd);
        if view.is_empty() {
            return EMPTY_DIRECTORY.to_string();
        }
        let mut lines: Vec<String> = Vec::with_capacity(view.dirs.len() + view.files.len());
        lines.extend(view.dirs.keys().map(|name| format!("{}/", name)));
        lines.extend(view.files.keys().map(|name| name.to_string()));
        lines.join("\n")
    }

    pub fn mkdir(&mut self, name: &str) -> Result<(), FsError> {
        if !DIR_NAME.is_match(name) {
            return Err(FsError::bad_command("mkdir"));
        }
        if self.has_dir(name) {
            return Err(FsError::DirectoryExists);
        }
        let dir = path::resolve_mut(&mut self.local, &self.cwd).ok_or(FsError::LocalDirMissing)?;
        dir.dirs.insert(name.to_string(), LocalTree::new());
        log::debug!("mkdir {}", path::join(&self.cwd, name));
        Ok(())
    }

    pub fn touch(&mut self, name: &str) -> Result<(), FsError> {
        if !FILE_NAME.is_match(name) {
            return Err(FsError::bad_command("touch"));
        }
        let in_permanent = path::resolve(&self.permanent, &self.cwd)
            .map_or(false, |dir| dir.files.contains_key(name));
        if in_permanent {
            return Err(FsError::PermanentConflict);
        }
        let dir = path::resolve_mut(&mut self.local, &self.cwd).ok_or(FsError::LocalDirMissing)?;
        if dir.files.contains_key(name) {
            return Err(FsError::FileExists);
        }
        dir.files.insert(name.to_string(), String::new());
        log::debug!("touch {}", path::join(&self.cwd, name));
        Ok(())
    }

    /// Enter a child directory of the current path, or go up with `..`.
    pub fn cd(&mut self, name: &str) -> Result<(), FsError> {
        if name == ".." {
            if path::is_root(&self.cwd) {
                return Err(FsError::AlreadyAtRoot);
            }
            self.cwd = path::parent(&self.cwd);
        } else if self.has_dir(name) {
            self.cwd = path::join(&self.cwd, name);
        } else {
            return Err(FsError::bad_command("cd"));
        }
        log::trace!("cwd is now {}", self.cwd);
        Ok(())
    }

    fn has_dir(&self, name: &str) -> bool {
        let in_permanent = path::resolve(&self.permanent, &self.cwd)
            .map_or(false, |dir| dir.dirs.contains_key(name));
        let in_local = path::resolve(&self.local, &self.cwd)
            .map_or(false, |dir| dir.dirs.contains_key(name));
        in_permanent || in_local
    }
}

impl Default for LayeredFs {
    fn default() -> Self {
        Self::new(PermanentTree::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn about_me() -> PermanentTree {
        PermanentTree::new().with_dir(
            "aboutMe",
            PermanentTree::new()
                .with_file("resume.txt", FileContent::deferred("aboutMe/resume.txt"))
                .with_file("notes.txt", "permanent notes"),
        )
    }

    #[test]
    fn test_ls_empty() {
        let fs = LayeredFs::default();
        assert_eq!(fs.ls(), EMPTY_DIRECTORY);
    }

    #[test]
    fn test_ls_dirs_before_files() {
        let mut fs = LayeredFs::new(about_me());
        fs.touch("b.txt").unwrap();
        fs.mkdir("docs").unwrap();
        assert_eq!(fs.ls(), "aboutMe/\ndocs/\nb.txt");
    }

    #[test]
    fn test_mkdir_then_ls_lists_dir() {
        for name in ["docs", "A1", "x", "ABCxyz019"] {
            let mut fs = LayeredFs::default();
            fs.mkdir(name).unwrap();
            assert!(fs.ls().lines().any(|l| l == format!("{}/", name)));
        }
    }

    #[test]
    fn test_mkdir_rejects_bad_names() {
        let mut fs = LayeredFs::default();
        for name in ["", "a/b", "a.b", "a-b", "..", "a b"] {
            assert_eq!(fs.mkdir(name), Err(FsError::bad_command("mkdir")), "name {:?}", name);
        }
        assert!(fs.local().is_empty());
    }

    #[test]
    fn test_mkdir_twice_reports_exists_without_change() {
        let mut fs = LayeredFs::default();
        fs.mkdir("docs").unwrap();
        fs.local.dirs["docs"].files.insert("keep".to_string(), "me".to_string());
        let before = fs.local().clone();
        assert_eq!(fs.mkdir("docs"), Err(FsError::DirectoryExists));
        assert_eq!(fs.local(), &before);
    }

    #[test]
    fn test_mkdir_permanent_dir_exists() {
        let mut fs = LayeredFs::new(about_me());
        assert_eq!(fs.mkdir("aboutMe"), Err(FsError::DirectoryExists));
    }

    #[test]
    fn test_mkdir_in_permanent_only_dir_reports_local_missing() {
        let mut fs = LayeredFs::new(about_me());
        fs.cd("aboutMe").unwrap();
        assert_eq!(fs.mkdir("x"), Err(FsError::LocalDirMissing));
        assert_eq!(fs.touch("x.txt"), Err(FsError::LocalDirMissing));
    }

    #[test]
    fn test_touch_rejects_bad_names() {
        let mut fs = LayeredFs::default();
        for name in ["", "a/b", "a-b", "a b", "$x"] {
            assert_eq!(fs.touch(name), Err(FsError::bad_command("touch")), "name {:?}", name);
        }
        fs.touch("notes.v2.txt").unwrap();
    }

    #[test]
    fn test_touch_creates_empty_local_file() {
        let mut fs = LayeredFs::default();
        fs.touch("a.txt").unwrap();
        assert_eq!(fs.local().files["a.txt"], "");
        assert_eq!(fs.touch("a.txt"), Err(FsError::FileExists));
    }

    #[test]
    fn test_touch_permanent_conflict_leaves_local_untouched() {
        let permanent = PermanentTree::new().with_file("motd", "hi");
        let mut fs = LayeredFs::new(permanent);
        assert_eq!(fs.touch("motd"), Err(FsError::PermanentConflict));
        assert!(fs.local().is_empty());
    }

    #[test]
    fn test_cd_at_root() {
        let mut fs = LayeredFs::default();
        assert_eq!(fs.cd(".."), Err(FsError::AlreadyAtRoot));
        assert_eq!(fs.cwd(), "/");
    }

    #[test]
    fn test_cd_round_trip_restores_path() {
        let mut fs = LayeredFs::default();
        fs.mkdir("docs").unwrap();
        fs.cd("docs").unwrap();
        fs.mkdir("inner").unwrap();
        let before = fs.cwd().to_string();
        fs.cd("inner").unwrap();
        assert_eq!(fs.cwd(), "/docs/inner");
        fs.cd("..").unwrap();
        assert_eq!(fs.cwd(), before);
        fs.cd("..").unwrap();
        assert_eq!(fs.cwd(), "/");
    }

    #[test]
    fn test_cd_into_permanent_dir() {
        let mut fs = LayeredFs::new(about_me());
        fs.cd("aboutMe").unwrap();
        assert_eq!(fs.cwd(), "/aboutMe");
        assert_eq!(fs.ls(), "resume.txt\nnotes.txt");
    }

    #[test]
    fn test_cd_missing_dir() {
        let mut fs = LayeredFs::default();
        fs.touch("file").unwrap();
        assert_eq!(fs.cd("nope"), Err(FsError::bad_command("cd")));
        assert_eq!(fs.cd("file"), Err(FsError::bad_command("cd")));
        assert_eq!(fs.cwd(), "/");
    }

    #[test]
    fn test_combined_view_local_overrides_permanent() {
        let permanent = PermanentTree::new().with_file("same", "permanent").with_dir("shared", PermanentTree::new());
        let mut fs = LayeredFs::new(permanent);
        fs.local.files.insert("same".to_string(), "local".to_string());
        fs.local.dirs.insert("shared".to_string(), LocalTree::new());

        let view = fs.combined_view("/");
        assert_eq!(view.files.len(), 1);
        assert_eq!(view.files["same"], FileRef::Local("local"));
        assert_eq!(view.dirs["shared"], Layer::Local);
        assert_eq!(fs.ls(), "shared/\nsame");
    }

    #[test]
    fn test_combined_view_reflects_latest_mutation() {
        let mut fs = LayeredFs::default();
        assert!(fs.combined_view("/").is_empty());
        fs.touch("a").unwrap();
        assert_eq!(fs.combined_view("/").files.len(), 1);
    }

    #[test]
    fn test_combined_view_path_missing_in_one_tree() {
        let fs = LayeredFs::new(about_me());
        let view = fs.combined_view("/aboutMe");
        assert_eq!(view.files.len(), 2);
        assert!(fs.combined_view("/nowhere").is_empty());
    }

    #[test]
    fn test_combined_view_file_layers() {
        let permanent = PermanentTree::new().with_file("same", "permanent").with_file("only", "p");
        let mut fs = LayeredFs::new(permanent);
        let permanent_same = FileContent::from("permanent");
        assert_eq!(fs.combined_view("/").files.get("same"), Some(&FileRef::Permanent(&permanent_same)));
        fs.local.files.insert("same".to_string(), "local".to_string());
        let view = fs.combined_view("/");
        assert_eq!(view.files.get("same"), Some(&FileRef::Local("local")));
        assert!(matches!(view.files.get("only"), Some(FileRef::Permanent(_))));
        assert_eq!(view.files.get("other"), None);
    }
}

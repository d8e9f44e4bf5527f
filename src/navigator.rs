//! Stateful navigation over a [`FsBackend`].
//!
//! The navigator keeps a single piece of state, the *pointer*: the current directory as an
//! absolute path with forward slashes and exactly one trailing `/`. Relative paths given to any
//! operation are resolved against it. Every operation either succeeds and leaves a pointer that
//! exists on the backend, or fails and leaves the pointer untouched.
//!
//! ### Limitations
//! - `create_file()` is not atomic: a crash mid-write may leave partial content.
//! - No locking: another process may remove a directory between `exists()` and a later call
//!   (the later call then fails with the backend error).
//! - `.` and `..` segments are kept verbatim; use `go_up()` to ascend.

use log::{debug, trace};

use crate::core::{FsBackend, utils};
use crate::error::{NavigatorError, Result};
use crate::{Config, DirEntry, HostFS};

/// Tracks a current directory and performs path arithmetic relative to it.
///
/// ### Example:
/// ```
/// use fs_navigator::{Config, FsBackend, MapFS, Navigator};
///
/// let mut backend = MapFS::new();
/// backend.mkdir_all("/home/user").unwrap();
///
/// let mut nav = Navigator::new(backend, &Config::new("/home")).unwrap();
/// nav.create_and_enter_directory("user/docs").unwrap();
/// nav.create_file("note.txt", b"Hello", false).unwrap();
/// assert_eq!(nav.current_directory(), "/home/user/docs/");
///
/// nav.go_up().unwrap();
/// let names: Vec<_> = nav.directory_contents().unwrap()
///     .iter().map(|e| e.name().to_string()).collect();
/// assert_eq!(names, ["docs"]);
/// ```
#[derive(Debug)]
pub struct Navigator<B: FsBackend = HostFS> {
    backend: B,
    pointer: String,
}

impl Navigator<HostFS> {
    /// Opens a navigator on the host filesystem.
    /// Starts in `start` if given, otherwise in the process working directory.
    pub fn open(start: Option<&str>) -> Result<Self> {
        let mut config = Config::from_process()?;
        if let Some(start) = start {
            config = config.with_start_dir(start);
        }
        Self::new(HostFS::new(), &config)
    }
}

impl<B: FsBackend> Navigator<B> {
    /// Creates a navigator positioned at `config.start_path()`.
    /// A relative start directory is taken relative to `config.working_dir()`.
    /// Error returns if that path does not exist on `backend`.
    pub fn new(backend: B, config: &Config) -> Result<Self> {
        let pointer = match config.start_dir() {
            Some(start) if !backend.is_absolute(start) => {
                utils::normalize(&utils::join_paths(&[config.working_dir(), start]))
            }
            _ => utils::normalize(config.start_path()),
        };
        if !backend.exists(&pointer) {
            return Err(NavigatorError::NotFound { path: pointer });
        }
        debug!("navigator starts at {}", pointer);
        Ok(Self { backend, pointer })
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Returns the current directory, always with one trailing `/`.
    pub fn current_directory(&self) -> &str {
        &self.pointer
    }

    pub fn is_absolute_path(&self, path: &str) -> bool {
        self.backend.is_absolute(path)
    }

    pub fn join_paths<S: AsRef<str>>(&self, segments: &[S]) -> String {
        utils::join_paths(segments)
    }

    /// Turns `path` into a normalized absolute directory path using the pointer as the base.
    pub fn resolve(&self, path: &str) -> String {
        let resolved = if self.is_absolute_path(path) {
            utils::normalize(path)
        } else {
            utils::normalize(&utils::join_paths(&[self.pointer.as_str(), path]))
        };
        trace!("resolved {:?} to {}", path, resolved);
        resolved
    }

    /// Returns true, if `path` exists. Never fails.
    pub fn exists(&self, path: &str) -> bool {
        self.backend.exists(&self.resolve(path))
    }

    /// Creates directory and all its parents (if needed).
    /// An already existing directory is not an error.
    pub fn create_directory(&mut self, path: &str) -> Result<()> {
        let target = self.resolve(path);
        self.backend
            .mkdir_all(&target)
            .map_err(|e| NavigatorError::io(target.as_str(), e))?;
        debug!("directory {} created", target);
        Ok(())
    }

    /// Writes `contents` verbatim to `name`, relative to the pointer unless absolute.
    /// Without `overwrite` an existing target is an error.
    pub fn create_file<C: AsRef<[u8]>>(
        &mut self,
        name: &str,
        contents: C,
        overwrite: bool,
    ) -> Result<()> {
        let resolved = self.resolve(name);
        let target = utils::strip_trailing(&resolved);
        if !overwrite && self.backend.exists(target) {
            return Err(NavigatorError::AlreadyExists {
                path: target.to_string(),
            });
        }
        self.backend
            .write(target, contents.as_ref())
            .map_err(|e| NavigatorError::io(target, e))?;
        debug!("file {} written", target);
        Ok(())
    }

    /// Moves the pointer to `path`.
    /// `path` can be in relative or absolute form, but in both cases it must exist.
    pub fn enter_directory(&mut self, path: &str) -> Result<()> {
        let target = self.resolve(&utils::normalize(path));
        if !self.backend.exists(&target) {
            return Err(NavigatorError::NotFound { path: target });
        }
        debug!("entering {}", target);
        self.pointer = target;
        Ok(())
    }

    /// Creates `path` (with parents) and moves the pointer into it.
    ///
    /// # Panics
    /// If the directory was created but then cannot be entered.
    pub fn create_and_enter_directory(&mut self, path: &str) -> Result<()> {
        self.create_directory(path)?;
        if let Err(err) = self.enter_directory(path) {
            panic!("created directory could not be entered: {}", err);
        }
        Ok(())
    }

    /// Moves the pointer to its parent directory.
    /// Error returns if the pointer is already a filesystem root.
    pub fn go_up(&mut self) -> Result<()> {
        let parent = utils::parent(&self.pointer).ok_or(NavigatorError::RootBoundary)?;
        let parent = utils::normalize(parent);
        debug!("going up from {} to {}", self.pointer, parent);
        self.pointer = parent;
        Ok(())
    }

    /// Lists the immediate children of the current directory, sorted by name.
    ///
    /// Names compare byte-wise; entries with equal names keep enumeration order.
    pub fn directory_contents(&self) -> Result<Vec<DirEntry>> {
        let children = self
            .backend
            .ls(&self.pointer)
            .map_err(|e| NavigatorError::io(self.pointer.as_str(), e))?;

        let mut entries: Vec<DirEntry> = children
            .into_iter()
            .filter(|child| child.name != "." && child.name != "..")
            .map(|child| DirEntry::new(child.name, self.pointer.as_str(), child.entry_type))
            .collect();
        entries.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Result as FsResult;
    use crate::{Child, EntryType, MapFS};
    use anyhow::anyhow;

    /// Helper function to set up a navigator over a predefined in-memory tree
    fn setup_test_nav() -> Navigator<MapFS> {
        let mut fs = MapFS::new();
        fs.mkdir_all("/home/user").unwrap();
        fs.mkdir_all("/etc").unwrap();
        fs.write("/home/user/config.txt", b"Config content").unwrap();
        Navigator::new(fs, &Config::new("/home")).unwrap()
    }

    /// Backend returning a fixed listing, in the given order.
    struct ListingFS(Vec<Child>);

    impl FsBackend for ListingFS {
        fn exists(&self, _path: &str) -> bool {
            true
        }
        fn is_absolute(&self, path: &str) -> bool {
            path.starts_with('/')
        }
        fn mkdir_all(&mut self, path: &str) -> FsResult<()> {
            Err(anyhow!("read-only: {}", path))
        }
        fn write(&mut self, path: &str, _content: &[u8]) -> FsResult<()> {
            Err(anyhow!("read-only: {}", path))
        }
        fn ls(&self, _path: &str) -> FsResult<Vec<Child>> {
            Ok(self.0.clone())
        }
    }

    mod creations {
        use super::*;

        #[test]
        fn test_new_normalizes_start_dir() {
            let nav = setup_test_nav();
            assert_eq!(nav.current_directory(), "/home/");

            let nav = Navigator::new(MapFS::new(), &Config::new("\\")).unwrap();
            assert_eq!(nav.current_directory(), "/");
        }

        #[test]
        fn test_new_start_dir_overrides_working_dir() {
            let mut fs = MapFS::new();
            fs.mkdir_all("/srv").unwrap();
            let config = Config::new("/missing").with_start_dir("/srv///");
            let nav = Navigator::new(fs, &config).unwrap();
            assert_eq!(nav.current_directory(), "/srv/");
        }

        #[test]
        fn test_new_relative_start_dir_is_anchored() {
            let mut fs = MapFS::new();
            fs.mkdir_all("/srv/app/src").unwrap();
            let config = Config::new("/srv/app").with_start_dir("src");

            let mut nav = Navigator::new(fs, &config).unwrap();
            assert_eq!(nav.current_directory(), "/srv/app/src/");
            assert!(nav.is_absolute_path(nav.current_directory()));

            nav.go_up().unwrap();
            assert_eq!(nav.current_directory(), "/srv/app/");
        }

        #[test]
        fn test_new_relative_start_dir_missing() {
            let config = Config::new("/").with_start_dir("nope");
            match Navigator::new(MapFS::new(), &config) {
                Err(NavigatorError::NotFound { path }) => assert_eq!(path, "/nope/"),
                other => panic!("expected NotFound, got {:?}", other),
            }
        }

        #[test]
        fn test_into_backend_keeps_changes() {
            let mut nav = setup_test_nav();
            nav.create_file("kept.txt", "data", false).unwrap();

            let fs = nav.into_backend();
            assert_eq!(fs.read("/home/kept.txt").unwrap(), b"data");
        }

        #[test]
        fn test_new_nonexistent_start_dir() {
            let result = Navigator::new(MapFS::new(), &Config::new("/nope"));
            match result {
                Err(NavigatorError::NotFound { path }) => assert_eq!(path, "/nope/"),
                other => panic!("expected NotFound, got {:?}", other),
            }
        }
    }

    mod resolve {
        use super::*;

        #[test]
        fn test_resolve_relative() {
            let nav = setup_test_nav();
            assert_eq!(nav.resolve("user"), "/home/user/");
            assert_eq!(nav.resolve("user/"), "/home/user/");
            assert_eq!(nav.resolve("/user"), "/user/");
            assert_eq!(nav.resolve("a\\b\\"), "/home/a/b/");
            assert_eq!(nav.resolve(""), "/home/");
        }

        #[test]
        fn test_resolve_matches_pointer_plus_trimmed_path() {
            let nav = setup_test_nav();
            for path in ["docs", "docs/", "docs//", "deep/er/path", "x.txt"] {
                let expected = format!("{}{}/", nav.current_directory(), path.trim_matches('/'));
                assert_eq!(nav.resolve(path), expected);
            }
        }

        #[test]
        fn test_join_paths() {
            let nav = setup_test_nav();
            assert_eq!(nav.join_paths(&["/a/", "/b/", "c"]), "/a/b/c/");
            assert!(nav.is_absolute_path("/etc"));
            assert!(!nav.is_absolute_path("etc"));
        }
    }

    mod exists {
        use super::*;

        #[test]
        fn test_exists_relative_and_absolute() {
            let nav = setup_test_nav();
            assert!(nav.exists("user"));
            assert!(nav.exists("user/config.txt"));
            assert!(nav.exists("/etc"));
            assert!(nav.exists("/home/user/config.txt"));
            assert!(!nav.exists("config.txt"));
            assert!(!nav.exists("/nope"));
        }
    }

    mod create {
        use super::*;

        #[test]
        fn test_create_directory_nested() {
            let mut nav = setup_test_nav();
            nav.create_directory("a/b/c").unwrap();
            assert!(nav.backend().is_dir("/home/a/b/c").unwrap());
            assert_eq!(nav.current_directory(), "/home/");

            // mkdir -p semantics
            nav.create_directory("a/b/c").unwrap();
        }

        #[test]
        fn test_create_directory_io_error() {
            let mut nav = setup_test_nav();
            let err = nav.create_directory("user/config.txt/sub").unwrap_err();
            assert!(matches!(err, NavigatorError::Io { .. }));
            assert_eq!(err.path(), Some("/home/user/config.txt/sub/"));
        }

        #[test]
        fn test_create_file_without_overwrite() {
            let mut nav = setup_test_nav();
            nav.create_file("notes.txt", "x", false).unwrap();
            let err = nav.create_file("notes.txt", "y", false).unwrap_err();
            match err {
                NavigatorError::AlreadyExists { path } => assert_eq!(path, "/home/notes.txt"),
                other => panic!("expected AlreadyExists, got {:?}", other),
            }
            assert_eq!(nav.backend().read("/home/notes.txt").unwrap(), b"x");
        }

        #[test]
        fn test_create_file_with_overwrite() {
            let mut nav = setup_test_nav();
            nav.create_file("notes.txt", "xxxx", false).unwrap();
            nav.create_file("notes.txt", "y", true).unwrap();
            assert_eq!(nav.backend().read("/home/notes.txt").unwrap(), b"y");
        }

        #[test]
        fn test_create_file_absolute_and_binary() {
            let mut nav = setup_test_nav();
            nav.create_file("/etc/blob", [0u8, 159, 146, 150], false)
                .unwrap();
            assert_eq!(nav.backend().read("/etc/blob").unwrap(), vec![0, 159, 146, 150]);
        }

        #[test]
        fn test_create_file_missing_parent() {
            let mut nav = setup_test_nav();
            let err = nav.create_file("nowhere/file.txt", "x", false).unwrap_err();
            assert!(matches!(err, NavigatorError::Io { .. }));
        }
    }

    mod enter {
        use super::*;

        #[test]
        fn test_enter_relative_and_absolute() {
            let mut nav = setup_test_nav();
            nav.enter_directory("user").unwrap();
            assert_eq!(nav.current_directory(), "/home/user/");

            nav.enter_directory("/etc/").unwrap();
            assert_eq!(nav.current_directory(), "/etc/");

            nav.enter_directory("\\home\\user\\\\").unwrap();
            assert_eq!(nav.current_directory(), "/home/user/");
        }

        #[test]
        fn test_enter_nonexistent_keeps_pointer() {
            let mut nav = setup_test_nav();
            let err = nav.enter_directory("ghost").unwrap_err();
            assert_eq!(err.to_string(), "/home/ghost/ does not exist");
            assert_eq!(nav.current_directory(), "/home/");
        }

        #[test]
        fn test_create_and_enter() {
            let mut nav = setup_test_nav();
            nav.create_and_enter_directory("child").unwrap();
            assert!(nav.exists("/home/child"));
            assert_eq!(nav.current_directory(), "/home/child/");
        }

        #[test]
        fn test_repeated_separators() {
            let mut nav = setup_test_nav();
            nav.create_directory("x//y").unwrap();
            assert!(nav.exists("x//y"));
            assert!(nav.exists("x/y"));

            nav.create_and_enter_directory("p//q").unwrap();
            assert_eq!(nav.current_directory(), "/home/p//q/");
            assert!(nav.exists("/home/p/q"));

            nav.go_up().unwrap();
            assert_eq!(nav.current_directory(), "/home/p/");
        }

        #[test]
        fn test_create_and_enter_failure_keeps_pointer() {
            let mut nav = setup_test_nav();
            let err = nav
                .create_and_enter_directory("user/config.txt")
                .unwrap_err();
            assert!(matches!(err, NavigatorError::Io { .. }));
            assert_eq!(nav.current_directory(), "/home/");
        }
    }

    mod go_up {
        use super::*;

        #[test]
        fn test_go_up_restores_pointer() {
            let mut nav = setup_test_nav();
            nav.enter_directory("user").unwrap();
            nav.go_up().unwrap();
            assert_eq!(nav.current_directory(), "/home/");
            nav.go_up().unwrap();
            assert_eq!(nav.current_directory(), "/");
        }

        #[test]
        fn test_go_up_at_root() {
            let mut nav = Navigator::new(MapFS::new(), &Config::new("/")).unwrap();
            let err = nav.go_up().unwrap_err();
            assert!(matches!(err, NavigatorError::RootBoundary));
            assert_eq!(nav.current_directory(), "/");
        }

        #[test]
        fn test_go_up_at_drive_root() {
            let mut nav = Navigator::new(ListingFS(Vec::new()), &Config::new("C:\\")).unwrap();
            assert_eq!(nav.current_directory(), "C:/");
            assert!(matches!(nav.go_up(), Err(NavigatorError::RootBoundary)));
            assert_eq!(nav.current_directory(), "C:/");
        }
    }

    mod contents {
        use super::*;

        #[test]
        fn test_contents_sorted_and_typed() {
            let mut nav = setup_test_nav();
            nav.create_file("a.txt", "", false).unwrap();
            nav.create_directory("b").unwrap();
            nav.enter_directory("/").unwrap();
            nav.enter_directory("home").unwrap();

            let entries = nav.directory_contents().unwrap();
            assert_eq!(
                entries,
                vec![
                    DirEntry::new("a.txt", "/home/", EntryType::File),
                    DirEntry::new("b", "/home/", EntryType::Directory),
                    DirEntry::new("user", "/home/", EntryType::Directory),
                ]
            );
        }

        #[test]
        fn test_contents_bytewise_order_and_stable_ties() {
            let fs = ListingFS(vec![
                Child::new("beta", EntryType::File),
                Child::new("twin", EntryType::Directory),
                Child::new("Zeta", EntryType::File),
                Child::new(".", EntryType::Directory),
                Child::new("alpha", EntryType::Directory),
                Child::new("twin", EntryType::File),
                Child::new("..", EntryType::Directory),
                Child::new("éclair", EntryType::File),
            ]);
            let nav = Navigator::new(fs, &Config::new("/data")).unwrap();

            let entries = nav.directory_contents().unwrap();
            let listed: Vec<_> = entries
                .iter()
                .map(|e| (e.name(), e.entry_type()))
                .collect();
            assert_eq!(
                listed,
                vec![
                    ("Zeta", EntryType::File),
                    ("alpha", EntryType::Directory),
                    ("beta", EntryType::File),
                    ("twin", EntryType::Directory),
                    ("twin", EntryType::File),
                    ("éclair", EntryType::File),
                ]
            );
            assert!(entries.iter().all(|e| e.path() == "/data/"));
        }

        #[test]
        fn test_contents_empty() {
            let nav = Navigator::new(MapFS::new(), &Config::new("/")).unwrap();
            assert!(nav.directory_contents().unwrap().is_empty());
        }

        #[test]
        fn test_contents_on_file_pointer_fails() {
            let mut nav = setup_test_nav();
            nav.enter_directory("user/config.txt").unwrap();
            let err = nav.directory_contents().unwrap_err();
            assert!(matches!(err, NavigatorError::Io { .. }));
        }
    }
}

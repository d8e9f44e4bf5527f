/// Primitive filesystem operations the navigator delegates to.
///
/// Paths handed to a backend are absolute and use forward slashes. They may carry a trailing
/// separator; backends must treat `/a/b/` and `/a/b` as the same location.
pub trait FsBackend {
    /// Returns true, if `path` exists (file or directory).
    fn exists(&self, path: &str) -> bool;

    /// Platform-defined absolute path test.
    fn is_absolute(&self, path: &str) -> bool;

    /// Creates directory and all its parents (if needed).
    /// An already existing directory is not an error.
    fn mkdir_all(&mut self, path: &str) -> Result<()>;

    /// Creates file or replaces its entire contents with `content`.
    fn write(&mut self, path: &str, content: &[u8]) -> Result<()>;

    /// Returns the immediate children of the directory at `path`, in enumeration order.
    fn ls(&self, path: &str) -> Result<Vec<crate::Child>>;
}

pub type Result<T> = std::result::Result<T, anyhow::Error>;

pub mod utils {
    const SEPARATORS: [char; 2] = ['/', '\\'];

    /// Replaces backslashes with forward slashes and leaves exactly one trailing `/`.
    pub fn normalize(path: &str) -> String {
        let mut normalized = path.replace('\\', "/").trim_end_matches('/').to_string();
        normalized.push('/');
        normalized
    }

    /// Joins path segments with a single `/` between them and after the last one.
    ///
    /// The first segment keeps its leading separators, the others are trimmed on both sides.
    /// Empty segments after the first are skipped.
    pub fn join_paths<S: AsRef<str>>(segments: &[S]) -> String {
        let mut joined = String::new();
        for (i, segment) in segments.iter().enumerate() {
            let segment = segment.as_ref();
            let part = if i == 0 {
                segment.trim_end_matches(SEPARATORS)
            } else {
                segment.trim_matches(SEPARATORS)
            };
            if i > 0 && part.is_empty() {
                continue;
            }
            joined.push_str(part);
            joined.push('/');
        }
        joined
    }

    /// Strips trailing separators, keeping a bare root as `/`.
    pub fn strip_trailing(path: &str) -> &str {
        let stripped = path.trim_end_matches(SEPARATORS);
        if stripped.is_empty() && !path.is_empty() {
            &path[..1]
        } else {
            stripped
        }
    }

    /// Returns the parent of a normalized directory path, including its trailing `/`.
    /// `None` means `path` is already a root.
    pub fn parent(path: &str) -> Option<&str> {
        let without_trailing = path.strip_suffix('/').unwrap_or(path);
        without_trailing
            .rfind('/')
            .map(|idx| &without_trailing[..=idx])
    }

}

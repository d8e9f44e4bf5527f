use crate::error::{NavigatorError, Result};

/// Construction parameters of a [`Navigator`](crate::Navigator).
///
/// The working directory is always passed in explicitly; [`Config::from_process`] is the only
/// place where process state is consulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    working_dir: String,
    start_dir: Option<String>,
}

impl Config {
    pub fn new<S: Into<String>>(working_dir: S) -> Self {
        Self {
            working_dir: working_dir.into(),
            start_dir: None,
        }
    }

    /// Uses the current working directory of the process.
    pub fn from_process() -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| NavigatorError::io(".", e.into()))?;
        Ok(Self::new(cwd.to_string_lossy()))
    }

    /// Sets the directory to start in instead of the working directory.
    pub fn with_start_dir<S: Into<String>>(mut self, dir: S) -> Self {
        self.start_dir = Some(dir.into());
        self
    }

    pub fn working_dir(&self) -> &str {
        &self.working_dir
    }

    pub fn start_dir(&self) -> Option<&str> {
        self.start_dir.as_deref()
    }

    /// Start directory if set, the working directory otherwise.
    pub fn start_path(&self) -> &str {
        self.start_dir().unwrap_or(&self.working_dir)
    }
}

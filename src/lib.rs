//! A stateful filesystem navigator for Rust.
//! Tracks a current directory, resolves relative paths against it and lists directory contents
//! as sorted, typed entries.
//!
//! ### Overview
//!
//! `fs-navigator` keeps a *pointer* to the current directory and delegates every primitive
//! operation (existence checks, directory creation, writes, listings) to a backend implementing
//! the `FsBackend` trait. `HostFS` maps to the real filesystem, `MapFS` keeps a tree in memory.
//!
//! **Key ideas**:
//! - **Pointer invariant**: the current directory is always absolute, uses forward slashes and
//!   ends with exactly one `/`.
//! - **Failure is a no-op**: a failed operation never moves the pointer.
//! - **Deterministic listings**: entries are sorted by name, byte-wise, with stable ties.
//! - **Testability**: swap `HostFS` for `MapFS` to run without touching the disk.
//!
//! ### Example
//!
//! ```
//! use fs_navigator::{Config, MapFS, Navigator};
//!
//! let mut nav = Navigator::new(MapFS::new(), &Config::new("/")).unwrap();
//! nav.create_and_enter_directory("projects").unwrap();
//! nav.create_file("todo.txt", "write tests", false).unwrap();
//! assert!(nav.exists("/projects/todo.txt"));
//!
//! nav.go_up().unwrap();
//! assert_eq!(nav.current_directory(), "/");
//! assert!(nav.go_up().is_err());
//! ```

mod config;
mod core;
mod error;
mod navigator;
mod vfs;

pub use config::Config;
pub use crate::core::{FsBackend, Result, utils};
pub use error::NavigatorError;
pub use navigator::Navigator;
pub use vfs::{Child, DirEntry, Entry, EntryType, HostFS, MapFS};

//! Data models for the application.

mod note;
mod notebook;
mod tag;
mod user;

pub use note::{Note, NoteInfo, NoteSummary};
pub use notebook::{Notebook, NotebookInfo};
pub use tag::{normalize_tag_names, Tag};
pub use user::{User, UserInfo};

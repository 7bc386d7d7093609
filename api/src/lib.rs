//! # API crate — data model and services for the notes application
//!
//! Everything the HTTP layer in the `server` crate calls lives here: the
//! SQLite-backed data model, access control, and the services that implement
//! the application's behavior. The crate never touches request state — the
//! acting user and the connection pool are passed in explicitly.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Registration, credential checks, Argon2 password hashing, session key |
//! | [`access`] | Author/collaborator capability checks for notes |
//! | [`db`] | SQLite connection pool and schema initialisation |
//! | [`models`] | Database rows (`User`, `Note`, `Notebook`, `Tag`) and their client-safe projections |
//! | [`notes`] | Note CRUD, listing, and tag filtering |
//! | [`notebooks`] | Notebook CRUD and per-notebook note listing |
//! | [`sharing`] | Collaborator management (share/unshare) |
//! | [`publish`] | Public-slug publication and anonymous reads |
//! | [`transfer`] | Markdown/HTML export and file import |
//! | [`markdown`] | Markdown-to-HTML rendering (pulldown-cmark) |
//! | [`files`] | Attachment filename sanitisation |

pub mod access;
pub mod auth;
pub mod db;
mod error;
pub mod files;
pub mod markdown;
pub mod models;
pub mod notebooks;
pub mod notes;
pub mod publish;
pub mod sharing;
pub mod transfer;

pub use error::{ServiceError, ServiceResult};

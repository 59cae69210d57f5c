//! Resource objects for the Bitbucket API.
//!
//! Each resource holds a shared [`Transport`](crate::Transport) handle and
//! the immutable context identifying what it addresses. Operations build a
//! path, delegate exactly one request, and return the decoded response
//! untouched.

pub mod issues;

pub use issues::{Attachments, Changes, Comments, Issues, Vote, Watch};

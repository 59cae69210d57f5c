//! Attachments of a single issue.

use std::sync::Arc;

use serde_json::Value;

use crate::error::Result;
use crate::path::build_path;
use crate::transport::{Params, Transport};

/// Client for the attachments of one issue.
///
/// Obtained from [`Issues::attachments`](super::Issues::attachments).
/// Uploading attachments requires a multipart request and is not part of
/// this client.
#[derive(Clone)]
pub struct Attachments {
    transport: Arc<dyn Transport>,
    username: String,
    repo: String,
    issue: String,
}

impl std::fmt::Debug for Attachments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Attachments")
            .field("username", &self.username)
            .field("repo", &self.repo)
            .field("issue", &self.issue)
            .finish_non_exhaustive()
    }
}

impl Attachments {
    /// Create an attachments resource bound to one issue.
    pub fn new(
        transport: Arc<dyn Transport>,
        username: impl Into<String>,
        repo: impl Into<String>,
        issue: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            username: username.into(),
            repo: repo.into(),
            issue: issue.into(),
        }
    }

    /// The workspace/username this resource is scoped to.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The repository slug this resource is scoped to.
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// The issue this resource is scoped to.
    pub fn issue(&self) -> &str {
        &self.issue
    }

    /// The shared transport handle.
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// List the attachments of the issue.
    ///
    /// # Errors
    ///
    /// Returns an error if any identifier is empty or the request fails.
    pub async fn list(&self, params: &Params) -> Result<Value> {
        let path = self.attachments_path(&[])?;
        self.transport.get(&path, params).await
    }

    /// Fetch a single attachment by filename.
    ///
    /// # Errors
    ///
    /// Returns an error if any identifier is empty or the request fails.
    pub async fn show(&self, filename: &str, params: &Params) -> Result<Value> {
        let path = self.attachments_path(&[filename])?;
        self.transport.get(&path, params).await
    }

    /// Delete an attachment by filename.
    ///
    /// # Errors
    ///
    /// Returns an error if any identifier is empty or the request fails.
    pub async fn remove(&self, filename: &str, params: &Params) -> Result<Value> {
        let path = self.attachments_path(&[filename])?;
        self.transport.delete(&path, params).await
    }

    fn attachments_path(&self, parts: &[&str]) -> Result<String> {
        let mut segments = vec![
            "repositories",
            self.username.as_str(),
            self.repo.as_str(),
            "issues",
            self.issue.as_str(),
            "attachments",
        ];
        segments.extend_from_slice(parts);
        build_path(&segments)
    }
}

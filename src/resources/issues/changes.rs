//! Change history of a single issue.

use std::sync::Arc;

use serde_json::Value;

use crate::error::Result;
use crate::path::build_path;
use crate::transport::{Params, Transport};

/// Client for the change log of one issue.
///
/// Obtained from [`Issues::changes`](super::Issues::changes). Changes are
/// written by the server when an issue is updated; this client only reads.
#[derive(Clone)]
pub struct Changes {
    transport: Arc<dyn Transport>,
    username: String,
    repo: String,
    issue: String,
}

impl std::fmt::Debug for Changes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Changes")
            .field("username", &self.username)
            .field("repo", &self.repo)
            .field("issue", &self.issue)
            .finish_non_exhaustive()
    }
}

impl Changes {
    /// Create a changes resource bound to one issue.
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

    /// List the changes of the issue.
    ///
    /// # Errors
    ///
    /// Returns an error if any identifier is empty or the request fails.
    pub async fn list(&self, params: &Params) -> Result<Value> {
        let path = self.changes_path(&[])?;
        self.transport.get(&path, params).await
    }

    /// Fetch a single change entry.
    ///
    /// # Errors
    ///
    /// Returns an error if any identifier is empty or the request fails.
    pub async fn show(&self, change: &str, params: &Params) -> Result<Value> {
        let path = self.changes_path(&[change])?;
        self.transport.get(&path, params).await
    }

    fn changes_path(&self, parts: &[&str]) -> Result<String> {
        let mut segments = vec![
            "repositories",
            self.username.as_str(),
            self.repo.as_str(),
            "issues",
            self.issue.as_str(),
            "changes",
        ];
        segments.extend_from_slice(parts);
        build_path(&segments)
    }
}

//! The authenticated user's watch subscription on a single issue.

use std::sync::Arc;

use serde_json::Value;

use crate::error::Result;
use crate::path::build_path;
use crate::transport::{Params, Transport};

/// Client for the watch flag on one issue.
///
/// Obtained from [`Issues::watch`](super::Issues::watch). Same singleton
/// shape as [`Vote`](super::Vote): `check` answers via status code.
#[derive(Clone)]
pub struct Watch {
    transport: Arc<dyn Transport>,
    username: String,
    repo: String,
    issue: String,
}

impl std::fmt::Debug for Watch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Watch")
            .field("username", &self.username)
            .field("repo", &self.repo)
            .field("issue", &self.issue)
            .finish_non_exhaustive()
    }
}

impl Watch {
    /// Create a watch resource bound to one issue.
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

    /// Check whether the authenticated user is watching the issue.
    ///
    /// # Errors
    ///
    /// Returns an error if any identifier is empty or the request fails.
    pub async fn check(&self, params: &Params) -> Result<Value> {
        let path = self.watch_path()?;
        self.transport.get(&path, params).await
    }

    /// Start watching the issue.
    ///
    /// # Errors
    ///
    /// Returns an error if any identifier is empty or the request fails.
    pub async fn start(&self, params: &Params) -> Result<Value> {
        let path = self.watch_path()?;
        self.transport.put(&path, params).await
    }

    /// Stop watching the issue.
    ///
    /// # Errors
    ///
    /// Returns an error if any identifier is empty or the request fails.
    pub async fn stop(&self, params: &Params) -> Result<Value> {
        let path = self.watch_path()?;
        self.transport.delete(&path, params).await
    }

    fn watch_path(&self) -> Result<String> {
        build_path(&[
            "repositories",
            self.username.as_str(),
            self.repo.as_str(),
            "issues",
            self.issue.as_str(),
            "watch",
        ])
    }
}

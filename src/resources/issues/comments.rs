//! Comments of a single issue.

use std::sync::Arc;

use serde_json::Value;

use crate::error::Result;
use crate::path::build_path;
use crate::transport::{Params, Transport};

/// Client for the comments of one issue.
///
/// Obtained from [`Issues::comments`](super::Issues::comments). Comments
/// get the full CRUD surface, mirroring the parent issues resource one
/// nesting level down.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use bucketapi::{BucketClient, Issues, Params};
/// use serde_json::json;
///
/// # async fn example() -> bucketapi::Result<()> {
/// let client = Arc::new(BucketClient::from_env()?);
/// let comments = Issues::new(client, "acme", "widgets").comments("7");
///
/// let mut params = Params::new();
/// params.insert("content".to_string(), json!({"raw": "On it."}));
/// comments.create(&params).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Comments {
    transport: Arc<dyn Transport>,
    username: String,
    repo: String,
    issue: String,
}

impl std::fmt::Debug for Comments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Comments")
            .field("username", &self.username)
            .field("repo", &self.repo)
            .field("issue", &self.issue)
            .finish_non_exhaustive()
    }
}

impl Comments {
    /// Create a comments resource bound to one issue.
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

    /// List the comments of the issue.
    ///
    /// # Errors
    ///
    /// Returns an error if any identifier is empty or the request fails.
    pub async fn list(&self, params: &Params) -> Result<Value> {
        let path = self.comments_path(&[])?;
        self.transport.get(&path, params).await
    }

    /// Add a comment to the issue.
    ///
    /// # Errors
    ///
    /// Returns an error if any identifier is empty or the request fails.
    pub async fn create(&self, params: &Params) -> Result<Value> {
        let path = self.comments_path(&[])?;
        self.transport.post(&path, params).await
    }

    /// Fetch a single comment.
    ///
    /// # Errors
    ///
    /// Returns an error if any identifier is empty or the request fails.
    pub async fn show(&self, comment: &str, params: &Params) -> Result<Value> {
        let path = self.comments_path(&[comment])?;
        self.transport.get(&path, params).await
    }

    /// Update a comment.
    ///
    /// # Errors
    ///
    /// Returns an error if any identifier is empty or the request fails.
    pub async fn update(&self, comment: &str, params: &Params) -> Result<Value> {
        let path = self.comments_path(&[comment])?;
        self.transport.put(&path, params).await
    }

    /// Delete a comment.
    ///
    /// # Errors
    ///
    /// Returns an error if any identifier is empty or the request fails.
    pub async fn remove(&self, comment: &str, params: &Params) -> Result<Value> {
        let path = self.comments_path(&[comment])?;
        self.transport.delete(&path, params).await
    }

    fn comments_path(&self, parts: &[&str]) -> Result<String> {
        let mut segments = vec![
            "repositories",
            self.username.as_str(),
            self.repo.as_str(),
            "issues",
            self.issue.as_str(),
            "comments",
        ];
        segments.extend_from_slice(parts);
        build_path(&segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comments_path_shapes() {
        let comments = Comments {
            transport: unreachable_transport(),
            username: "acme".to_string(),
            repo: "widgets".to_string(),
            issue: "7".to_string(),
        };

        assert_eq!(
            comments.comments_path(&[]).unwrap(),
            "repositories/acme/widgets/issues/7/comments"
        );
        assert_eq!(
            comments.comments_path(&["100"]).unwrap(),
            "repositories/acme/widgets/issues/7/comments/100"
        );
    }

    fn unreachable_transport() -> Arc<dyn Transport> {
        use async_trait::async_trait;

        struct Panics;

        #[async_trait]
        impl Transport for Panics {
            async fn get(&self, _: &str, _: &Params) -> crate::Result<Value> {
                unreachable!()
            }
            async fn post(&self, _: &str, _: &Params) -> crate::Result<Value> {
                unreachable!()
            }
            async fn put(&self, _: &str, _: &Params) -> crate::Result<Value> {
                unreachable!()
            }
            async fn delete(&self, _: &str, _: &Params) -> crate::Result<Value> {
                unreachable!()
            }
        }

        Arc::new(Panics)
    }
}

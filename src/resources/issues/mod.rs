//! The issues resource.
//!
//! CRUD operations on the issues of one repository, plus factories for
//! the sub-resources nested under a single issue.

mod attachments;
mod changes;
mod comments;
mod vote;
mod watch;

pub use attachments::Attachments;
pub use changes::Changes;
pub use comments::Comments;
pub use vote::Vote;
pub use watch::Watch;

use std::sync::Arc;

use serde_json::Value;

use crate::error::Result;
use crate::path::build_path;
use crate::transport::{Params, Transport};

/// Client for the issues of one repository.
///
/// Construct one per (username, repository) pair and hold it for the life
/// of the session; it carries no state beyond that immutable context, so
/// sharing it across tasks is safe.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use bucketapi::{BucketClient, Issues, Params};
///
/// # async fn example() -> bucketapi::Result<()> {
/// let client = Arc::new(BucketClient::from_env()?);
/// let issues = Issues::new(client, "acme", "widgets");
///
/// let open = issues.list(&Params::new()).await?;
/// let one = issues.show("7", &Params::new()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Issues {
    transport: Arc<dyn Transport>,
    username: String,
    repo: String,
}

impl std::fmt::Debug for Issues {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Issues")
            .field("username", &self.username)
            .field("repo", &self.repo)
            .finish_non_exhaustive()
    }
}

impl Issues {
    /// Create an issues resource for the given repository.
    pub fn new(
        transport: Arc<dyn Transport>,
        username: impl Into<String>,
        repo: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            username: username.into(),
            repo: repo.into(),
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

    /// The shared transport handle.
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// List the issues of the repository.
    ///
    /// `params` are query filters, forwarded to the server unmodified.
    ///
    /// # Errors
    ///
    /// Returns an error if the context is malformed or the request fails.
    pub async fn list(&self, params: &Params) -> Result<Value> {
        let path = self.issues_path(&[])?;
        self.transport.get(&path, params).await
    }

    /// Create a new issue.
    ///
    /// `params` are the issue fields, forwarded to the server unmodified.
    ///
    /// # Errors
    ///
    /// Returns an error if the context is malformed or the request fails.
    pub async fn create(&self, params: &Params) -> Result<Value> {
        let path = self.issues_path(&[])?;
        self.transport.post(&path, params).await
    }

    /// Fetch a single issue.
    ///
    /// # Errors
    ///
    /// Returns an error if any identifier is empty or the request fails.
    pub async fn show(&self, issue: &str, params: &Params) -> Result<Value> {
        let path = self.issues_path(&[issue])?;
        self.transport.get(&path, params).await
    }

    /// Update an issue. Partial-update semantics are the server's.
    ///
    /// # Errors
    ///
    /// Returns an error if any identifier is empty or the request fails.
    pub async fn update(&self, issue: &str, params: &Params) -> Result<Value> {
        let path = self.issues_path(&[issue])?;
        self.transport.put(&path, params).await
    }

    /// Delete an issue. The response may be empty (`Value::Null`).
    ///
    /// # Errors
    ///
    /// Returns an error if any identifier is empty or the request fails.
    pub async fn remove(&self, issue: &str, params: &Params) -> Result<Value> {
        let path = self.issues_path(&[issue])?;
        self.transport.delete(&path, params).await
    }

    /// Attachments of one issue. No I/O happens until an operation is called.
    pub fn attachments(&self, issue: impl Into<String>) -> Attachments {
        Attachments::new(
            Arc::clone(&self.transport),
            self.username.clone(),
            self.repo.clone(),
            issue,
        )
    }

    /// Change history of one issue.
    pub fn changes(&self, issue: impl Into<String>) -> Changes {
        Changes::new(
            Arc::clone(&self.transport),
            self.username.clone(),
            self.repo.clone(),
            issue,
        )
    }

    /// Comments of one issue.
    pub fn comments(&self, issue: impl Into<String>) -> Comments {
        Comments::new(
            Arc::clone(&self.transport),
            self.username.clone(),
            self.repo.clone(),
            issue,
        )
    }

    /// The authenticated user's vote on one issue.
    pub fn vote(&self, issue: impl Into<String>) -> Vote {
        Vote::new(
            Arc::clone(&self.transport),
            self.username.clone(),
            self.repo.clone(),
            issue,
        )
    }

    /// The authenticated user's watch subscription on one issue.
    pub fn watch(&self, issue: impl Into<String>) -> Watch {
        Watch::new(
            Arc::clone(&self.transport),
            self.username.clone(),
            self.repo.clone(),
            issue,
        )
    }

    /// Build the issues path from the given trailing parts.
    fn issues_path(&self, parts: &[&str]) -> Result<String> {
        let mut segments = vec![
            "repositories",
            self.username.as_str(),
            self.repo.as_str(),
            "issues",
        ];
        segments.extend_from_slice(parts);
        build_path(&segments)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::error::BucketError;

    /// Records every call made against it and answers with a fixed value.
    struct RecordingTransport {
        calls: Mutex<Vec<(&'static str, String, Params)>>,
        response: Value,
    }

    impl RecordingTransport {
        fn new(response: Value) -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                response,
            })
        }

        fn calls(&self) -> Vec<(&'static str, String, Params)> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, verb: &'static str, path: &str, params: &Params) -> Result<Value> {
            self.calls
                .lock()
                .unwrap()
                .push((verb, path.to_string(), params.clone()));
            Ok(self.response.clone())
        }
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn get(&self, path: &str, params: &Params) -> Result<Value> {
            self.record("GET", path, params)
        }

        async fn post(&self, path: &str, params: &Params) -> Result<Value> {
            self.record("POST", path, params)
        }

        async fn put(&self, path: &str, params: &Params) -> Result<Value> {
            self.record("PUT", path, params)
        }

        async fn delete(&self, path: &str, params: &Params) -> Result<Value> {
            self.record("DELETE", path, params)
        }
    }

    fn issues(transport: &Arc<RecordingTransport>) -> Issues {
        Issues::new(
            Arc::clone(transport) as Arc<dyn Transport>,
            "acme",
            "widgets",
        )
    }

    fn filter_params() -> Params {
        let mut params = Params::new();
        params.insert("q".to_string(), json!("state=\"open\""));
        params
    }

    #[tokio::test]
    async fn test_list_hits_collection_path() {
        let transport = RecordingTransport::new(json!({"values": []}));
        let params = filter_params();

        issues(&transport).list(&params).await.unwrap();

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "GET");
        assert_eq!(calls[0].1, "repositories/acme/widgets/issues");
        assert_eq!(calls[0].2, params);
    }

    #[tokio::test]
    async fn test_create_posts_to_collection_path() {
        let transport = RecordingTransport::new(json!({"id": 1}));
        let mut params = Params::new();
        params.insert("title".to_string(), json!("It is broken"));

        issues(&transport).create(&params).await.unwrap();

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "POST");
        assert_eq!(calls[0].1, "repositories/acme/widgets/issues");
        assert_eq!(calls[0].2, params);
    }

    #[tokio::test]
    async fn test_show_hits_item_path_and_returns_response_verbatim() {
        let body = json!({"id": 7, "title": "It is broken"});
        let transport = RecordingTransport::new(body.clone());

        let result = issues(&transport).show("7", &Params::new()).await.unwrap();

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "GET");
        assert_eq!(calls[0].1, "repositories/acme/widgets/issues/7");
        assert_eq!(result, body);
    }

    #[tokio::test]
    async fn test_update_puts_to_item_path() {
        let transport = RecordingTransport::new(json!({"id": 42}));
        let mut params = Params::new();
        params.insert("state".to_string(), json!("resolved"));

        issues(&transport).update("42", &params).await.unwrap();

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "PUT");
        assert_eq!(calls[0].1, "repositories/acme/widgets/issues/42");
        assert_eq!(calls[0].2, params);
    }

    #[tokio::test]
    async fn test_remove_deletes_item_path() {
        let transport = RecordingTransport::new(Value::Null);

        let result = issues(&transport)
            .remove("42", &Params::new())
            .await
            .unwrap();

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "DELETE");
        assert_eq!(calls[0].1, "repositories/acme/widgets/issues/42");
        assert_eq!(result, Value::Null);
    }

    #[tokio::test]
    async fn test_empty_username_fails_before_transport() {
        let transport = RecordingTransport::new(Value::Null);
        let resource = Issues::new(Arc::clone(&transport) as Arc<dyn Transport>, "", "widgets");

        let err = resource.list(&Params::new()).await.unwrap_err();

        assert!(matches!(err, BucketError::InvalidArgument(_)));
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn test_empty_issue_id_fails_before_transport() {
        let transport = RecordingTransport::new(Value::Null);

        let err = issues(&transport).show("", &Params::new()).await.unwrap_err();

        assert!(matches!(err, BucketError::InvalidArgument(_)));
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn test_issue_id_with_slash_is_escaped() {
        let transport = RecordingTransport::new(Value::Null);

        issues(&transport)
            .show("7/../8", &Params::new())
            .await
            .unwrap();

        let calls = transport.calls();
        assert_eq!(calls[0].1, "repositories/acme/widgets/issues/7%2F..%2F8");
    }

    #[test]
    fn test_factories_bind_context_without_io() {
        let transport = RecordingTransport::new(Value::Null);
        let resource = issues(&transport);

        let attachments = resource.attachments("42");
        assert_eq!(attachments.username(), "acme");
        assert_eq!(attachments.repo(), "widgets");
        assert_eq!(attachments.issue(), "42");
        assert!(Arc::ptr_eq(resource.transport(), attachments.transport()));

        let changes = resource.changes("42");
        assert_eq!(changes.issue(), "42");
        assert!(Arc::ptr_eq(resource.transport(), changes.transport()));

        let comments = resource.comments("42");
        assert_eq!(comments.issue(), "42");
        assert!(Arc::ptr_eq(resource.transport(), comments.transport()));

        let vote = resource.vote("42");
        assert_eq!(vote.issue(), "42");
        assert!(Arc::ptr_eq(resource.transport(), vote.transport()));

        let watch = resource.watch("42");
        assert_eq!(watch.issue(), "42");
        assert!(Arc::ptr_eq(resource.transport(), watch.transport()));

        // Pure constructors: nothing touched the transport.
        assert!(transport.calls().is_empty());
    }

    #[test]
    fn test_debug_shows_context() {
        let transport = RecordingTransport::new(Value::Null);
        let debug = format!("{:?}", issues(&transport));
        assert!(debug.contains("acme"));
        assert!(debug.contains("widgets"));
    }
}

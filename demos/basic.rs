//! Basic example demonstrating the Bitbucket issues client.
//!
//! Run with:
//! ```
//! BITBUCKET_TOKEN=your-token cargo run --example basic
//! ```

use std::sync::Arc;

use bucketapi::{BucketClient, Issues, Params};
use serde_json::json;

#[tokio::main]
async fn main() -> bucketapi::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    // Create client from environment variables
    println!("Creating Bitbucket client...");
    let client = Arc::new(BucketClient::from_env()?);
    println!("Connected to: {}", client.base_url());

    let issues = Issues::new(client, "acme", "widgets");

    // List open issues, newest first
    println!("\n--- Listing open issues ---");
    let mut filters = Params::new();
    filters.insert("q".to_string(), json!("state=\"open\""));
    filters.insert("sort".to_string(), json!("-created_on"));

    let page = issues.list(&filters).await?;
    if let Some(values) = page.get("values").and_then(|v| v.as_array()) {
        println!("Found {} issues on this page", values.len());
        for issue in values.iter().take(5) {
            println!(
                "  - #{} {}",
                issue.get("id").unwrap_or(&json!("?")),
                issue
                    .get("title")
                    .and_then(|t| t.as_str())
                    .unwrap_or("(untitled)")
            );
        }
    }

    // Fetch one issue with its comments and change history
    println!("\n--- Issue #7 ---");
    let issue = issues.show("7", &Params::new()).await?;
    println!(
        "Title: {}",
        issue
            .get("title")
            .and_then(|t| t.as_str())
            .unwrap_or("(untitled)")
    );

    let comments = issues.comments("7").list(&Params::new()).await?;
    println!(
        "Comments: {}",
        comments
            .get("size")
            .and_then(|s| s.as_u64())
            .unwrap_or_default()
    );

    let changes = issues.changes("7").list(&Params::new()).await?;
    println!(
        "Changes: {}",
        changes
            .get("size")
            .and_then(|s| s.as_u64())
            .unwrap_or_default()
    );

    // Vote for it and start watching
    println!("\n--- Vote and watch ---");
    issues.vote("7").cast(&Params::new()).await?;
    issues.watch("7").start(&Params::new()).await?;
    println!("Voted and watching.");

    Ok(())
}

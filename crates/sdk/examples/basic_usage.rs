//! Basic SDK usage example.
//!
//! Lists the files owned by an API key and searches the newest one.
//!
//! Run with: SUPAVEC_API_KEY=... cargo run --example basic_usage -- "your query"

use supavec_sdk::{EmbeddingsRequest, SupavecClient, SupavecError, SupavecResult, UserFilesRequest};

#[tokio::main]
async fn main() -> SupavecResult<()> {
    tracing_subscriber::fmt::init();

    let api_key = std::env::var("SUPAVEC_API_KEY")
        .map_err(|_| SupavecError::Config("SUPAVEC_API_KEY is not set".to_string()))?;
    let query = std::env::args().nth(1).unwrap_or_else(|| "summary".to_string());

    let client = SupavecClient::builder().api_key(api_key).build()?;

    println!("Listing files...");
    let files = client.user_files().list(&UserFilesRequest::default()).await?;
    println!("{:#}", files);

    let Some(file_id) = files["results"][0]["file_id"].as_str() else {
        println!("No files uploaded yet");
        return Ok(());
    };

    println!("\nSearching {} for {:?}...", file_id, query);
    let hits = client
        .embeddings()
        .search(&EmbeddingsRequest::for_file(file_id, query))
        .await?;
    println!("{}", hits.joined_content());

    Ok(())
}

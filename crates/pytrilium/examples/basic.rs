//! Basic usage example for pytrilium.
//!
//! Connects to a Trilium server, prints server information and today's
//! day note, then searches for notes.
//!
//! Run with:
//!
//! ```text
//! TRILIUM_URL=http://localhost:8080 TRILIUM_TOKEN=... cargo run --example basic
//! ```

use pytrilium::TriliumClient;

#[tokio::main]
async fn main() -> pytrilium::Result<()> {
    let url = std::env::var("TRILIUM_URL").unwrap_or_else(|_| "http://localhost:8080".into());
    let token = std::env::var("TRILIUM_TOKEN").unwrap_or_default();

    let client = TriliumClient::builder()
        .url(url)
        .token(token)
        .debug(std::env::var_os("TRILIUM_DEBUG").is_some())
        .build()
        .await?;
    println!("Connected to {}", client.base_url());

    let info = client.app_info().await?;
    println!("Trilium {} (db {:?})", info.app_version, info.db_version);

    let inbox = client.calendar().inbox("2024-01-01").await?;
    println!("\nInbox note: {} ({})", inbox.title, inbox.note_id);

    let query = std::env::args().nth(1).unwrap_or_else(|| "#book".into());
    let results = client.notes().search(&query).await?;
    println!("\nNotes matching {query:?}:");
    for note in &results {
        println!("  - {} [{}]", note.title, note.note_id);
    }

    println!("\nDone!");
    Ok(())
}

//! Art collection browser
//!
//! A client for a public art-collection API (the Metropolitan Museum of Art
//! Collection API by default). One run reports the catalog size and
//! departments, prints a page of imaged artworks for the configured search as
//! JSON lines on stdout, and draws a random sample of imaged highlights.
//!
//! # Configuration
//!
//! - `LOG_LEVEL`: tracing level (default `info`)
//! - `COLLECTION_*`: remote endpoint, timeout, random-draw cap
//! - `BROWSE_*`: search words, page, page size, result pages, sample size

mod collection;
mod config;
mod error;
mod model;


use crate::collection::{Client, Gallery};
use crate::config::BrowseConfig;
use crate::error::Result;
use anyhow::Context;
use std::io::Write;
use std::sync::Arc;

/// Application entry point.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app_config = config::load_app_config()?;
    tracing_subscriber::fmt()
        .with_max_level(app_config.log_level())
        .with_writer(std::io::stderr)
        .init();

    let collection_config = config::load_collection_config()?;
    let browse_config = config::load_browse_config()?;

    let client = Arc::new(Client::new(collection_config.clone())?);
    let gallery = Gallery::new(Arc::clone(&client), collection_config.random_max_attempts);

    let stdout = std::io::stdout();
    browse(&client, &gallery, &browse_config, &mut stdout.lock()).await?;
    Ok(())
}

/// Runs one browse session against the collection.
///
/// Catalog statistics and random draws are informational: their failures are
/// logged and the session continues. Artwork records are written to `out`,
/// one JSON document per line.
async fn browse(
    client: &Client,
    gallery: &Gallery<Client>,
    browse_config: &BrowseConfig,
    out: &mut impl Write,
) -> Result<()> {
    match client.total_object_count().await {
        Ok(total) => tracing::info!("Collection holds {} objects", total),
        Err(e) => tracing::warn!("Failed to fetch object count: {}", e),
    }

    match client.list_departments().await {
        Ok(departments) => {
            let names: Vec<&str> = departments
                .iter()
                .filter_map(|d| d.display_name.as_deref())
                .collect();
            tracing::info!("{} departments: {}", departments.len(), names.join(", "));
        }
        Err(e) => tracing::warn!("Failed to fetch departments: {}", e),
    }

    let query = browse_config.query();
    let artworks = if browse_config.search_results {
        gallery
            .list_search_results(&query, browse_config.items_per_page, browse_config.pages)
            .await?
    } else {
        let page = gallery
            .list_imaged_artworks_page(&query, browse_config.page, browse_config.items_per_page)
            .await;
        tracing::info!(
            "Page {} for {}: {} artworks ({} cached)",
            browse_config.page,
            query,
            page.len(),
            gallery.cached_len().await
        );
        page
    };

    for record in &artworks {
        let line = serde_json::to_string(record).context("Failed to serialize artwork")?;
        writeln!(out, "{}", line).context("Failed to write artwork")?;
    }

    if browse_config.random_count > 0 {
        match gallery
            .list_random_imaged_artworks(browse_config.random_count)
            .await
        {
            Ok(ids) => {
                tracing::info!("Random imaged highlights: {:?}", ids);
                if let Some(&first) = ids.first() {
                    if let Some(record) = client.get_object(first).await {
                        tracing::info!("First draw: {}", record.title().unwrap_or("(untitled)"));
                    }
                }
            }
            Err(e) => tracing::warn!("Failed to draw random artworks: {}", e),
        }
    }

    Ok(())
}

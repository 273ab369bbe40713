//! Basic SDK usage example.
//!
//! Queries the dashboard, samples recent recordings and searches the docs.
//!
//! Run with: CLARITY_API_TOKEN=... cargo run --example basic_usage

use clarity_sdk::{
    ClarityClient, ClarityResult, DashboardQuery, DocumentationQuery, RecordingsQuery,
};

#[tokio::main]
async fn main() -> ClarityResult<()> {
    tracing_subscriber::fmt::init();

    let token = std::env::var("CLARITY_API_TOKEN").unwrap_or_default();
    let client = ClarityClient::builder().api_token(token).build()?;

    println!("Querying dashboard...");
    let stats = client
        .dashboard()
        .query(&DashboardQuery {
            query: "top pages by sessions this month".to_string(),
            timezone: "UTC".to_string(),
        })
        .await?;
    println!("{}", serde_json::to_string_pretty(&stats)?);

    println!("\nSampling mobile recordings...");
    let mut filters = serde_json::Map::new();
    filters.insert("deviceType".to_string(), "Mobile".into());
    let recordings = client
        .recordings()
        .sample(&RecordingsQuery {
            start: "2024-01-01".to_string(),
            end: "2024-01-31".to_string(),
            filters,
            sort_by: "duration".to_string(),
            count: 5,
        })
        .await?;
    println!("{}", serde_json::to_string_pretty(&recordings)?);

    println!("\nSearching documentation...");
    let docs = client
        .documentation()
        .query(&DocumentationQuery {
            query: "what are heatmaps?".to_string(),
        })
        .await?;
    println!("{}", serde_json::to_string_pretty(&docs)?);

    Ok(())
}

//! # Clarity SDK
//!
//! Async Rust client for the Microsoft Clarity data API.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use clarity_sdk::{ClarityClient, ClarityResult, DashboardQuery};
//!
//! #[tokio::main]
//! async fn main() -> ClarityResult<()> {
//!     let client = ClarityClient::builder()
//!         .api_token("your-project-token")
//!         .build()?;
//!
//!     let stats = client
//!         .dashboard()
//!         .query(&DashboardQuery {
//!             query: "bounce rate for the last 7 days".to_string(),
//!             timezone: "UTC".to_string(),
//!         })
//!         .await?;
//!     println!("{}", serde_json::to_string_pretty(&stats)?);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod transport;

pub use api::{DashboardQuery, DocumentationQuery, RecordingsQuery};
pub use client::{ClarityClient, ClarityClientBuilder};
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{ClarityError, ClarityResult};

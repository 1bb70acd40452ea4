//! # DIME SDK for Rust
//!
//! Typed async client for the **DIME** creator-search API: discover
//! social-media creators by free-text query, similarity to a reference
//! account, or business category.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dime_sdk::{DimeClient, SearchRequest, SearchMethod};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), dime_sdk::DimeError> {
//!     let client = DimeClient::builder("http://localhost:8000").build()?;
//!
//!     // Health check
//!     let health = client.health().await?;
//!     println!("status: {}, db: {}", health.status, health.database_available);
//!
//!     // Creator search
//!     let resp = client
//!         .search(
//!             SearchRequest::new("vegan bakers in berlin")
//!                 .method(SearchMethod::Hybrid)
//!                 .limit(20)
//!                 .min_followers(10_000),
//!         )
//!         .await?;
//!     for creator in &resp.results {
//!         println!("@{} ({})", creator.account, creator.followers_formatted);
//!     }
//!
//!     // Username lookup
//!     let creator = client.creator_by_username("@alice").await?;
//!     println!("{}", creator.profile_name);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error handling
//!
//! Every operation returns [`DimeResult`]; all failure origins — non-2xx
//! HTTP statuses, `success:false` envelopes, client-side validation, and
//! transport faults — normalize into one [`DimeError`] enum callers can
//! match on. Calls either fully succeed with a typed response or fully
//! fail; partial results are never returned.

pub mod client;
pub mod error;
pub mod models;

pub use client::{DimeClient, DimeClientBuilder};
pub use error::{DimeError, DimeResult};
pub use models::*;

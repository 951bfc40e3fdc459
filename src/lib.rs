//! # notebase-link: Notebase Client Library
//!
//! Client library for the Notebase collections API. Wraps the HTTP
//! surface behind a small convenience layer: schema-aware row CRUD,
//! equality-filter construction, collection discovery, and page block
//! appends.
//!
//! ## Features
//!
//! - **Collection binding**: resolve a collection by title once, cache
//!   its property schema for the life of the logger
//! - **Row CRUD**: query with cursor pagination, single-row lookup with
//!   strict cardinality, uniqueness-checked insert and upsert, soft
//!   delete
//! - **Property codec**: bidirectional translation between native values
//!   and the per-type wire encoding, strict about unknown properties and
//!   unsupported types
//! - **Page content**: paragraph, heading, code, callout, divider, and
//!   external-image blocks, with nested children
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use notebase_link::{CollectionLogger, NotebaseLinkClient, QueryOptions, RowRecord};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = NotebaseLinkClient::builder()
//!         .base_url("https://api.notebase.example")
//!         .bearer_token("secret_abc123")
//!         .build()?;
//!
//!     let logger = CollectionLogger::connect(client, "Experiments").await?;
//!
//!     // Insert a row, refusing duplicates on "Run ID"
//!     logger
//!         .insert(
//!             &RowRecord::new().with("Run ID", "run-14").with("Score", 0.873),
//!             Some("Run ID"),
//!         )
//!         .await?;
//!
//!     // Pull everything back as a table
//!     let table = logger.get_rows_table(QueryOptions::new()).await?;
//!     println!("{} rows, columns: {:?}", table.len(), table.columns());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Credentials
//!
//! The client only accepts an explicit token; resolving it from the
//! environment is a caller-layer concern:
//!
//! ```rust,no_run
//! use notebase_link::{Credentials, NotebaseLinkClient};
//!
//! # fn example() -> notebase_link::Result<()> {
//! let credentials = Credentials::from_env()?;
//! let client = NotebaseLinkClient::builder()
//!     .base_url("https://api.notebase.example")
//!     .auth(credentials.into_auth())
//!     .build()?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod codec;
pub mod credentials;
pub mod error;
pub mod logger;
pub mod models;

// Re-export main types for convenience
pub use auth::AuthProvider;
pub use client::{NotebaseLinkClient, NotebaseLinkClientBuilder, DEFAULT_API_VERSION};
pub use credentials::{Credentials, TOKEN_ENV_VAR};
pub use error::{NotebaseLinkError, Result};
pub use logger::CollectionLogger;
pub use models::{
    BlockSpec, CollectionSummary, DataTable, FilterExpression, Page, PropertyType, PropertyValue,
    QueryOptions, RemoteRow, RowRecord, Schema, SchemaEntry, SortDirection, SortSpec,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

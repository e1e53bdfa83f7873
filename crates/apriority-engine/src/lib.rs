//! # APRiority Engine
//!
//! Async orchestration of the APRiority views.
//!
//! This crate provides:
//! - [`YieldEngine`]: Collection, calculator, listing and comment operations
//! - [`YieldEngineBuilder`]: Validated construction from config and collaborators
//! - [`EngineConfig`]: TOML-loadable engine settings
//!
//! ## Architecture
//!
//! ```text
//! CollectionStore ─┬─> income terms ──┐
//!                  └─> history ───────┼─> assemble ─> YieldResponse
//! MetadataSource ───> floor price ────┘
//!
//! ListingStore / CommentStore <─ OwnershipVerifier
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let engine = YieldEngineBuilder::new()
//!     .with_config(EngineConfig::from_file("apriority.toml")?)
//!     .with_data_provider(Arc::new(provider))
//!     .build()?;
//!
//! let views = engine.collection_views().await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builder;
pub mod config;
pub mod error;

mod engine;

// Re-exports
pub use builder::YieldEngineBuilder;
pub use config::{ConfigError, EngineConfig, Validate, ValidationError};
pub use engine::{ListingSubmission, YieldEngine};
pub use error::EngineError;

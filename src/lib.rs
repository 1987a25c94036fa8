//! # LeoFS Manager Client
//!
//! A client for the LeoFS manager console with:
//! - A fixed command catalog, validated before any I/O
//! - A line-oriented TCP transport (one request line, one reply line)
//! - Reply decoding that tells free text from JSON once
//! - Typed models for status, placement, usage, users, endpoints and buckets
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     ManagerClient                            │
//! │        validate → encode → send → receive → decode → map     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  Protocol   │          │   Network   │
//!   │ (Catalog,   │          │ (Connector, │
//!   │  Codec)     │          │  Channel)   │
//!   └──────┬──────┘          └─────────────┘
//!          │
//!          ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   Mapper    │─────────▶│   Models    │
//!   └─────────────┘          └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use leofs_manager::ManagerClient;
//!
//! let manager = ManagerClient::new("localhost:10010")?;
//! let status = manager.status()?;
//! for node in status.node_list.unwrap_or_default() {
//!     println!("{} {}", node.node, node.state);
//! }
//! # Ok::<(), leofs_manager::ManagerError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod network;
pub mod models;
pub mod mapper;
pub mod client;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ManagerError, Result};
pub use config::ClientConfig;
pub use client::ManagerClient;
pub use protocol::{CommandName, Reply};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the client
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

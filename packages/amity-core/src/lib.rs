//! # Amity Core
//!
//! An in-memory social network: members exchange friend requests, accept or
//! reject them, block each other, leave, and get friend recommendations.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         AMITY CORE MODULES                              │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  ┌───────────────────────────────────────────────────────────────────┐ │
//! │  │                          Network                                  │ │
//! │  │                                                                   │ │
//! │  │ - Registry (join / leave)        - Friendship operations          │ │
//! │  │ - Session (login / logout)       - Recommendations                │ │
//! │  └─────────────────────────────┬─────────────────────────────────────┘ │
//! │                                │ resolves names, borrows both records  │
//! │                                ▼                                       │
//! │  ┌───────────────────────────────────────────────────────────────────┐ │
//! │  │                          Member                                   │ │
//! │  │                                                                   │ │
//! │  │ - incoming / outgoing requests   - request / accept / reject      │ │
//! │  │ - friends / blocked              - cancel / withdraw              │ │
//! │  └───────────────────────────────────────────────────────────────────┘ │
//! │                                                                         │
//! │  ┌─────────────┐  ┌─────────────┐                                      │
//! │  │   Config    │  │    Error    │                                      │
//! │  └─────────────┘  └─────────────┘                                      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Hierarchy
//!
//! - [`error`] - Error types for the entire library
//! - [`config`] - Network configuration
//! - [`member`] - Per-member relation state and pairwise primitives
//! - [`network`] - The mediator: registry, session, friendship operations
//!
//! ## Example
//!
//! ```
//! use amity_core::Network;
//!
//! let mut network = Network::new();
//! network.join("Hakan");
//! network.join("Cecile");
//!
//! network.login("Hakan");
//! network.send_friendship_to("Cecile")?;
//!
//! network.login("Cecile");
//! network.accept_friendship_from("Hakan")?;
//!
//! let hakan = network.member("Hakan")?.expect("Hakan is a member");
//! assert!(hakan.has_friend("Cecile"));
//! # Ok::<(), amity_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod config;
pub mod error;
pub mod member;
pub mod network;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use config::NetworkConfig;
pub use error::{Error, Result};
pub use member::Member;
pub use network::Network;

// ============================================================================
// VERSION INFO
// ============================================================================

/// Returns the version of Amity Core
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// ============================================================================
// TESTS
// ============================================================================

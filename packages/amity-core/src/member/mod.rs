//! # Member Module
//!
//! Per-member relation state and the pairwise friendship primitives.
//!
//! ## Friend Request Flow
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      FRIEND REQUEST FLOW                                │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  Hakan (Sender)                              Cecile (Recipient)        │
//! │  ─────────────────────────────────────────────────────────────         │
//! │                                                                         │
//! │  1. cecile.request_friendship(&mut hakan)                              │
//! │  ┌─────────────────────┐                    ┌─────────────────────┐    │
//! │  │ outgoing: {Cecile}  │  ◄──── pending ───►│ incoming: {Hakan}   │    │
//! │  └─────────────────────┘                    └─────────────────────┘    │
//! │                                                      │                 │
//! │                                    auto_accept? ─────┤                 │
//! │                                                      ▼                 │
//! │                                             2. Recipient decides       │
//! │                                             ┌─────────────────────┐    │
//! │                                             │ accept_friendship   │    │
//! │                                             │ reject_friendship   │    │
//! │                                             └─────────┬───────────┘    │
//! │                                                       │                │
//! │  3a. Accepted: both friend sets gain the other,      │                │
//! │      both pending entries are cleared.   ◄────────────┤                │
//! │                                                       │                │
//! │  3b. Rejected: both pending entries are cleared,     │                │
//! │      no friendship.                      ◄────────────┘                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every primitive takes the counterpart as `&mut Member` and updates both
//! records before returning, so the pair never observes a half-applied
//! transition. Each returns `true` when it changed anything.
//!
//! Blocking is recorded here but only consulted by recommendations.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::Result;

/// One participant of the network and the relations they hold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Unique user name
    identity: String,
    /// Members awaiting this member's decision
    incoming: BTreeSet<String>,
    /// Members this member awaits a decision from
    outgoing: BTreeSet<String>,
    /// Established friendships
    friends: BTreeSet<String>,
    /// Members hidden from this member's recommendations
    blocked: BTreeSet<String>,
    /// Accept every new incoming request immediately
    auto_accept: bool,
}

impl Member {
    /// Create a member with no relations
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            incoming: BTreeSet::new(),
            outgoing: BTreeSet::new(),
            friends: BTreeSet::new(),
            blocked: BTreeSet::new(),
            auto_accept: false,
        }
    }

    /// The member's unique user name
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Members who sent this member a request that is still pending
    pub fn incoming_requests(&self) -> &BTreeSet<String> {
        &self.incoming
    }

    /// Members this member sent a request to that is still pending
    pub fn outgoing_requests(&self) -> &BTreeSet<String> {
        &self.outgoing
    }

    /// Current friends
    pub fn friends(&self) -> &BTreeSet<String> {
        &self.friends
    }

    /// Members this member has blocked
    pub fn blocked(&self) -> &BTreeSet<String> {
        &self.blocked
    }

    /// Check if someone is a friend
    pub fn has_friend(&self, identity: &str) -> bool {
        self.friends.contains(identity)
    }

    /// Check if a user is blocked
    pub fn has_blocked(&self, identity: &str) -> bool {
        self.blocked.contains(identity)
    }

    /// Whether new incoming requests are accepted automatically
    pub fn auto_accepts(&self) -> bool {
        self.auto_accept
    }

    // ------------------------------------------------------------------------
    // Pairwise primitives
    // ------------------------------------------------------------------------

    /// Receive a friend request from `from`.
    ///
    /// Ignored for self-requests and for existing friends. Repeating a
    /// pending request changes nothing. With auto-accept on, the request is
    /// accepted on the spot.
    pub fn request_friendship(&mut self, from: &mut Member) -> bool {
        if from.identity == self.identity {
            tracing::debug!("Ignoring self friend request from {}", self.identity);
            return false;
        }
        if self.friends.contains(&from.identity) {
            tracing::debug!(
                "Ignoring friend request from {}: already friends with {}",
                from.identity,
                self.identity
            );
            return false;
        }

        let added = self.incoming.insert(from.identity.clone());
        from.outgoing.insert(self.identity.clone());
        if added {
            tracing::info!(
                "{} received a friend request from {}",
                self.identity,
                from.identity
            );
        }

        if self.auto_accept {
            return self.accept_friendship(from) || added;
        }
        added
    }

    /// Accept the pending request `requester` sent to this member.
    ///
    /// Without a pending request from `requester` nothing happens; a
    /// friendship is never created on one side only.
    pub fn accept_friendship(&mut self, requester: &mut Member) -> bool {
        if requester.identity == self.identity || !self.incoming.contains(&requester.identity) {
            tracing::debug!(
                "{} has no pending request from {} to accept",
                self.identity,
                requester.identity
            );
            return false;
        }

        self.friends.insert(requester.identity.clone());
        requester.friends.insert(self.identity.clone());
        self.clear_pending_with(requester);

        tracing::info!(
            "{} accepted friend request from {}",
            self.identity,
            requester.identity
        );
        true
    }

    /// Reject the pending request `requester` sent to this member
    pub fn reject_friendship(&mut self, requester: &mut Member) -> bool {
        let removed = self.incoming.remove(&requester.identity);
        let mirrored = requester.outgoing.remove(&self.identity);
        if removed || mirrored {
            tracing::info!(
                "{} rejected friend request from {}",
                self.identity,
                requester.identity
            );
        }
        removed || mirrored
    }

    /// Withdraw the request this member sent to `target`
    pub fn withdraw_request(&mut self, target: &mut Member) -> bool {
        let removed = self.outgoing.remove(&target.identity);
        let mirrored = target.incoming.remove(&self.identity);
        if removed || mirrored {
            tracing::info!(
                "{} withdrew friend request to {}",
                self.identity,
                target.identity
            );
        }
        removed || mirrored
    }

    /// End the friendship with `other` on both sides. Safe to repeat.
    pub fn cancel_friendship(&mut self, other: &mut Member) -> bool {
        let removed = self.friends.remove(&other.identity);
        let mirrored = other.friends.remove(&self.identity);
        if removed || mirrored {
            tracing::info!(
                "{} cancelled friendship with {}",
                self.identity,
                other.identity
            );
        }
        removed || mirrored
    }

    // ------------------------------------------------------------------------
    // Local toggles
    // ------------------------------------------------------------------------

    /// Block a user. Existing friendships and requests are kept.
    pub fn block(&mut self, identity: &str) -> bool {
        if identity.is_empty() || identity == self.identity {
            return false;
        }
        self.blocked.insert(identity.to_string())
    }

    /// Unblock a user
    pub fn unblock(&mut self, identity: &str) -> bool {
        self.blocked.remove(identity)
    }

    /// Accept future incoming requests automatically
    pub fn enable_auto_accept(&mut self) {
        self.auto_accept = true;
    }

    /// Stop accepting incoming requests automatically
    pub fn disable_auto_accept(&mut self) {
        self.auto_accept = false;
    }

    /// Encode to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    // Requests may be pending in both directions at once.
    fn clear_pending_with(&mut self, other: &mut Member) {
        self.incoming.remove(&other.identity);
        self.outgoing.remove(&other.identity);
        other.incoming.remove(&self.identity);
        other.outgoing.remove(&self.identity);
    }
}

// ============================================================================
// TESTS
// ============================================================================

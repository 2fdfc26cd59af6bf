//! # Network Module
//!
//! The mediator that owns every [`Member`], resolves user names to records
//! and sequences the pairwise primitives.
//!
//! ## Session Model
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         NETWORK STATE                                   │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  members: HashMap<identity, Member>        current: Option<identity>   │
//! │  ┌──────────┬──────────┬──────────┐        ┌──────────┐                │
//! │  │  Hakan   │  Cecile  │   Ana    │ ◄───── │  Cecile  │                │
//! │  └──────────┴──────────┴──────────┘        └──────────┘                │
//! │                                                                         │
//! │  join()   ──► new record          login()  ──► switch session          │
//! │  leave()  ──► unwind + remove     logout() ──► clear session           │
//! │                                                                         │
//! │  Session-scoped operations act as `current` and fail with              │
//! │  Error::NoActiveSession while it is empty.                             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Friendship operations live in `friendships.rs`, recommendations in
//! `recommend.rs`.

mod friendships;
mod recommend;

use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};

use crate::config::NetworkConfig;
use crate::error::{Error, Result};
use crate::member::Member;

/// An in-memory social network.
///
/// Each instance is independent; nothing is shared between networks.
#[derive(Debug, Default)]
pub struct Network {
    members: HashMap<String, Member>,
    current: Option<String>,
    config: NetworkConfig,
}

impl Network {
    /// Create an empty network with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty network with a validated configuration
    pub fn with_config(config: NetworkConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            members: HashMap::new(),
            current: None,
            config,
        })
    }

    /// The configuration this network runs with
    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    // ------------------------------------------------------------------------
    // Registry
    // ------------------------------------------------------------------------

    /// Join with a new user name.
    ///
    /// Returns `None` if the name is blank or already taken.
    pub fn join(&mut self, identity: &str) -> Option<&Member> {
        if identity.trim().is_empty() {
            tracing::debug!("Rejected join with blank user name");
            return None;
        }

        match self.members.entry(identity.to_string()) {
            Entry::Occupied(_) => {
                tracing::debug!("Rejected join: {} is already a member", identity);
                None
            }
            Entry::Vacant(slot) => {
                tracing::info!("{} joined the network", identity);
                Some(&*slot.insert(Member::new(identity)))
            }
        }
    }

    /// Read-only view of a member's relations. Requires a session.
    pub fn member(&self, identity: &str) -> Result<Option<&Member>> {
        self.session_identity()?;
        Ok(self.members.get(identity))
    }

    /// List user names of all members
    pub fn list_members(&self) -> Result<BTreeSet<String>> {
        self.session_identity()?;
        Ok(self.members.keys().cloned().collect())
    }

    /// Check if a user name belongs to a member
    pub fn has_member(&self, identity: &str) -> Result<bool> {
        self.session_identity()?;
        Ok(!identity.is_empty() && self.members.contains_key(identity))
    }

    // ------------------------------------------------------------------------
    // Session
    // ------------------------------------------------------------------------

    /// Act as the member with this user name.
    ///
    /// Switches sessions without a logout. Returns `None`, keeping the
    /// current session, when no such member exists.
    pub fn login(&mut self, identity: &str) -> Option<&Member> {
        if !self.members.contains_key(identity) {
            tracing::debug!("Login failed: {} is not a member", identity);
            return None;
        }

        tracing::info!("{} logged in", identity);
        self.current = Some(identity.to_string());
        self.members.get(identity)
    }

    /// End the current session, if any
    pub fn logout(&mut self) {
        if let Some(identity) = self.current.take() {
            tracing::info!("{} logged out", identity);
        }
    }

    /// The member the current session acts as
    pub fn current_member(&self) -> Result<&Member> {
        let identity = self.current.as_deref().ok_or(Error::NoActiveSession)?;
        self.members.get(identity).ok_or(Error::NoActiveSession)
    }

    pub(crate) fn session_identity(&self) -> Result<String> {
        Ok(self.current_member()?.identity().to_string())
    }

    pub(crate) fn current_member_mut(&mut self) -> Result<&mut Member> {
        let identity = self.current.as_deref().ok_or(Error::NoActiveSession)?;
        self.members.get_mut(identity).ok_or(Error::NoActiveSession)
    }

    // ------------------------------------------------------------------------
    // Two-phase pair update
    // ------------------------------------------------------------------------

    /// Run `op` with both records borrowed mutably.
    ///
    /// `second` is taken out of the registry for the duration of `op` and
    /// put back afterwards. If either member is missing, or both names are
    /// the same, neither record is touched and `None` is returned.
    pub(crate) fn with_pair<R>(
        &mut self,
        first: &str,
        second: &str,
        op: impl FnOnce(&mut Member, &mut Member) -> R,
    ) -> Option<R> {
        if first == second || !self.members.contains_key(first) {
            return None;
        }

        let (key, mut other) = self.members.remove_entry(second)?;
        let outcome = self.members.get_mut(first).map(|member| op(member, &mut other));
        self.members.insert(key, other);
        outcome
    }
}

// ============================================================================
// TESTS
// ============================================================================

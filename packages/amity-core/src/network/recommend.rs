//! # Friend Recommendations
//!
//! Friends-of-friends ranked by how many mutual friends they share with the
//! logged-in member.
//!
//! ```text
//!            ┌──────── Cecile ────────┐
//!   Hakan ───┤                        ├─── Ozan     Ozan has 2 mutual friends
//!            └──────── Ana ───────────┘             with Hakan: recommended
//! ```
//!
//! A candidate is skipped when either side has blocked the other.

use std::collections::{BTreeSet, HashMap};

use crate::error::Result;

impl super::Network {
    /// Recommend members reachable through at least
    /// `recommendation_threshold` mutual friends.
    ///
    /// Existing friends, the member themself, and blocked pairs (either
    /// direction) are never recommended.
    pub fn recommend_friends(&self) -> Result<BTreeSet<String>> {
        let me = self.current_member()?;
        let mut mutuals: HashMap<&str, usize> = HashMap::new();

        for friend in me.friends().iter().filter_map(|f| self.members.get(f)) {
            for candidate in friend.friends() {
                if candidate == me.identity() || me.has_friend(candidate) {
                    continue;
                }
                if me.has_blocked(candidate)
                    || self
                        .members
                        .get(candidate)
                        .is_some_and(|c| c.has_blocked(me.identity()))
                {
                    continue;
                }
                *mutuals.entry(candidate.as_str()).or_default() += 1;
            }
        }

        let threshold = self.config.recommendation_threshold;
        let recommended: BTreeSet<String> = mutuals
            .into_iter()
            .filter(|(_, count)| *count >= threshold)
            .map(|(candidate, _)| candidate.to_string())
            .collect();

        tracing::debug!(
            "Recommending {} members to {}",
            recommended.len(),
            me.identity()
        );
        Ok(recommended)
    }

    /// Friends the logged-in member shares with this user name
    pub fn mutual_friends_with(&self, identity: &str) -> Result<BTreeSet<String>> {
        let me = self.current_member()?;
        let Some(other) = self.members.get(identity) else {
            return Ok(BTreeSet::new());
        };

        Ok(me
            .friends()
            .intersection(other.friends())
            .cloned()
            .collect())
    }
}

// ============================================================================
// TESTS
// ============================================================================

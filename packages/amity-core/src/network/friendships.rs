//! # Friendship Management
//!
//! Send, accept, reject, cancel, block, and leave operations for the
//! logged-in member.

use crate::error::Result;

/// Log and flatten the outcome of a pair update whose counterpart may be
/// unknown.
fn settle(outcome: Option<bool>, action: &str, identity: &str) -> bool {
    match outcome {
        Some(changed) => changed,
        None => {
            tracing::debug!("Cannot {} {}: not a member", action, identity);
            false
        }
    }
}

impl super::Network {
    /// Send a friend request to the member with this user name.
    ///
    /// Returns whether anything changed. Unknown names are ignored.
    pub fn send_friendship_to(&mut self, identity: &str) -> Result<bool> {
        let me = self.session_identity()?;
        let outcome = self.with_pair(identity, &me, |target, sender| {
            target.request_friendship(sender)
        });
        Ok(settle(outcome, "send friend request to", identity))
    }

    /// Accept a pending friend request from this user name
    pub fn accept_friendship_from(&mut self, identity: &str) -> Result<bool> {
        let me = self.session_identity()?;
        let outcome = self.with_pair(&me, identity, |me, requester| {
            me.accept_friendship(requester)
        });
        Ok(settle(outcome, "accept friend request from", identity))
    }

    /// Reject a pending friend request from this user name
    pub fn reject_friendship_from(&mut self, identity: &str) -> Result<bool> {
        let me = self.session_identity()?;
        let outcome = self.with_pair(&me, identity, |me, requester| {
            me.reject_friendship(requester)
        });
        Ok(settle(outcome, "reject friend request from", identity))
    }

    /// Accept every pending incoming request. Returns how many were accepted.
    pub fn accept_all_friendships(&mut self) -> Result<usize> {
        let pending = self.incoming_snapshot()?;
        let mut accepted = 0;
        for requester in &pending {
            if self.accept_friendship_from(requester)? {
                accepted += 1;
            }
        }

        tracing::info!("Accepted {} of {} pending requests", accepted, pending.len());
        Ok(accepted)
    }

    /// Reject every pending incoming request. Returns how many were rejected.
    pub fn reject_all_friendships(&mut self) -> Result<usize> {
        let pending = self.incoming_snapshot()?;
        let mut rejected = 0;
        for requester in &pending {
            if self.reject_friendship_from(requester)? {
                rejected += 1;
            }
        }

        tracing::info!("Rejected {} of {} pending requests", rejected, pending.len());
        Ok(rejected)
    }

    /// Withdraw a friend request sent to this user name that is still pending
    pub fn withdraw_friendship_request(&mut self, identity: &str) -> Result<bool> {
        let me = self.session_identity()?;
        let outcome = self.with_pair(&me, identity, |me, target| me.withdraw_request(target));
        Ok(settle(outcome, "withdraw friend request to", identity))
    }

    /// End the friendship with this user name on both sides
    pub fn send_friendship_cancellation_to(&mut self, identity: &str) -> Result<bool> {
        let me = self.session_identity()?;
        let outcome = self.with_pair(identity, &me, |friend, me| friend.cancel_friendship(me));
        Ok(settle(outcome, "cancel friendship with", identity))
    }

    /// Accept future incoming requests automatically
    pub fn auto_accept_friendships(&mut self) -> Result<()> {
        let member = self.current_member_mut()?;
        member.enable_auto_accept();
        tracing::info!("{} now auto-accepts friend requests", member.identity());
        Ok(())
    }

    /// Stop accepting incoming requests automatically
    pub fn cancel_auto_accept_friendships(&mut self) -> Result<()> {
        let member = self.current_member_mut()?;
        member.disable_auto_accept();
        tracing::info!("{} stopped auto-accepting friend requests", member.identity());
        Ok(())
    }

    /// Hide a user from the current member's recommendations, and the
    /// current member from theirs
    pub fn block(&mut self, identity: &str) -> Result<bool> {
        let member = self.current_member_mut()?;
        let blocked = member.block(identity);
        if blocked {
            tracing::info!("{} blocked {}", member.identity(), identity);
        }
        Ok(blocked)
    }

    /// Unblock a user
    pub fn unblock(&mut self, identity: &str) -> Result<bool> {
        let member = self.current_member_mut()?;
        let unblocked = member.unblock(identity);
        if unblocked {
            tracing::info!("{} unblocked {}", member.identity(), identity);
        }
        Ok(unblocked)
    }

    /// Leave the network.
    ///
    /// Every friendship is cancelled, every incoming request rejected and
    /// every outgoing request withdrawn before the record is removed, so no
    /// surviving member keeps a reference to the departed name. Ends the
    /// session and returns the departed user name.
    pub fn leave(&mut self) -> Result<String> {
        let me = self.session_identity()?;
        let (friends, incoming, outgoing) = {
            let member = self.current_member()?;
            (
                member.friends().iter().cloned().collect::<Vec<_>>(),
                member.incoming_requests().iter().cloned().collect::<Vec<_>>(),
                member.outgoing_requests().iter().cloned().collect::<Vec<_>>(),
            )
        };

        for friend in &friends {
            self.with_pair(&me, friend, |me, friend| me.cancel_friendship(friend));
        }
        for requester in &incoming {
            self.with_pair(&me, requester, |me, requester| {
                me.reject_friendship(requester)
            });
        }
        for target in &outgoing {
            self.with_pair(&me, target, |me, target| me.withdraw_request(target));
        }

        self.members.remove(&me);
        // A rejoined name starts fresh, including other members' blocks.
        for member in self.members.values_mut() {
            member.unblock(&me);
        }
        self.current = None;

        tracing::info!(
            "{} left the network ({} friends, {} incoming, {} outgoing unwound)",
            me,
            friends.len(),
            incoming.len(),
            outgoing.len()
        );
        Ok(me)
    }

    fn incoming_snapshot(&self) -> Result<Vec<String>> {
        Ok(self
            .current_member()?
            .incoming_requests()
            .iter()
            .cloned()
            .collect())
    }
}

// ============================================================================
// TESTS
// ============================================================================

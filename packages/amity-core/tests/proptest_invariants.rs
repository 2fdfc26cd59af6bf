//! Property-based tests for the relation invariants.
//!
//! Random sequences of network operations are applied to a small pool of
//! user names. After every step:
//! - friendships are symmetric
//! - a pending request is recorded on both sides
//! - friends have nothing pending with each other
//! - nobody references a name that is not a member (covers leave cleanup)
//! - nobody relates to themself
//!
//! Reading a member's relations needs a session, so each check logs in to
//! read and then restores whatever session was active.

use std::collections::BTreeMap;

use amity_core::{Error, Member, Network};
use proptest::prelude::*;

const NAMES: [&str; 5] = ["Hakan", "Cecile", "Ana", "Ozan", "Mira"];

#[derive(Debug, Clone)]
enum Op {
    Join(usize),
    Login(usize),
    Logout,
    Send(usize),
    Accept(usize),
    Reject(usize),
    AcceptAll,
    RejectAll,
    Withdraw(usize),
    Cancel(usize),
    AutoAccept,
    CancelAutoAccept,
    Block(usize),
    Unblock(usize),
    Leave,
}

/// Strategy for generating a single operation against the name pool
fn op_strategy() -> impl Strategy<Value = Op> {
    let name = 0..NAMES.len();
    prop_oneof![
        2 => name.clone().prop_map(Op::Join),
        3 => name.clone().prop_map(Op::Login),
        1 => Just(Op::Logout),
        4 => name.clone().prop_map(Op::Send),
        3 => name.clone().prop_map(Op::Accept),
        1 => name.clone().prop_map(Op::Reject),
        1 => Just(Op::AcceptAll),
        1 => Just(Op::RejectAll),
        1 => name.clone().prop_map(Op::Withdraw),
        1 => name.clone().prop_map(Op::Cancel),
        1 => Just(Op::AutoAccept),
        1 => Just(Op::CancelAutoAccept),
        1 => name.clone().prop_map(Op::Block),
        1 => name.prop_map(Op::Unblock),
        1 => Just(Op::Leave),
    ]
}

fn apply(network: &mut Network, op: &Op) -> Result<(), Error> {
    match *op {
        Op::Join(i) => {
            network.join(NAMES[i]);
        }
        Op::Login(i) => {
            network.login(NAMES[i]);
        }
        Op::Logout => network.logout(),
        Op::Send(i) => {
            network.send_friendship_to(NAMES[i])?;
        }
        Op::Accept(i) => {
            network.accept_friendship_from(NAMES[i])?;
        }
        Op::Reject(i) => {
            network.reject_friendship_from(NAMES[i])?;
        }
        Op::AcceptAll => {
            network.accept_all_friendships()?;
        }
        Op::RejectAll => {
            network.reject_all_friendships()?;
        }
        Op::Withdraw(i) => {
            network.withdraw_friendship_request(NAMES[i])?;
        }
        Op::Cancel(i) => {
            network.send_friendship_cancellation_to(NAMES[i])?;
        }
        Op::AutoAccept => network.auto_accept_friendships()?,
        Op::CancelAutoAccept => network.cancel_auto_accept_friendships()?,
        Op::Block(i) => {
            network.block(NAMES[i])?;
        }
        Op::Unblock(i) => {
            network.unblock(NAMES[i])?;
        }
        Op::Leave => {
            network.leave()?;
        }
    }
    Ok(())
}

/// Copy every member's relations, logging in to read them and restoring the
/// previous session afterwards.
fn observe(network: &mut Network) -> BTreeMap<String, Member> {
    let previous = network
        .current_member()
        .ok()
        .map(|m| m.identity().to_string());

    let mut members = BTreeMap::new();
    if NAMES.iter().any(|name| network.login(name).is_some()) {
        for name in NAMES {
            if let Ok(Some(member)) = network.member(name) {
                members.insert(name.to_string(), member.clone());
            }
        }
    }

    match previous {
        Some(identity) => {
            network.login(&identity);
        }
        None => network.logout(),
    }
    members
}

fn check_invariants(members: &BTreeMap<String, Member>) -> Result<(), TestCaseError> {
    for (name, member) in members {
        let name = name.as_str();
        prop_assert!(!member.friends().contains(name), "{name} befriended themself");
        prop_assert!(!member.incoming_requests().contains(name));
        prop_assert!(!member.outgoing_requests().contains(name));

        for friend in member.friends() {
            let other = members.get(friend);
            prop_assert!(other.is_some(), "{name} keeps departed friend {friend}");
            prop_assert!(
                other.is_some_and(|o| o.has_friend(name)),
                "friendship {name} -> {friend} is one-sided"
            );
            prop_assert!(!member.incoming_requests().contains(friend));
            prop_assert!(!member.outgoing_requests().contains(friend));
        }

        for requester in member.incoming_requests() {
            prop_assert!(
                members
                    .get(requester)
                    .is_some_and(|o| o.outgoing_requests().contains(name)),
                "incoming {requester} -> {name} has no outgoing mirror"
            );
        }

        for target in member.outgoing_requests() {
            prop_assert!(
                members
                    .get(target)
                    .is_some_and(|o| o.incoming_requests().contains(name)),
                "outgoing {name} -> {target} has no incoming mirror"
            );
        }
    }
    Ok(())
}

// ============================================================================
// Invariants hold after every operation
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Any sequence of operations keeps every member's relation sets
    /// consistent with every other member's.
    #[test]
    fn relation_invariants_hold(ops in prop::collection::vec(op_strategy(), 0..80)) {
        let mut network = Network::new();
        for op in &ops {
            match apply(&mut network, op) {
                Ok(()) | Err(Error::NoActiveSession) => {}
                Err(other) => {
                    prop_assert!(false, "unexpected error {other}");
                }
            }
            let session_before = network.current_member().ok().map(|m| m.identity().to_string());
            let members = observe(&mut network);
            let session_after = network.current_member().ok().map(|m| m.identity().to_string());
            prop_assert_eq!(session_before, session_after);
            check_invariants(&members)?;
        }
    }

    /// Operations without a session fail and leave the network unchanged.
    #[test]
    fn no_session_changes_nothing(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut network = Network::new();
        for name in NAMES {
            network.join(name);
        }

        for op in ops.iter().filter(|op| !matches!(op, Op::Join(_) | Op::Login(_))) {
            let before = observe(&mut network);
            prop_assert_eq!(network.member(NAMES[0]), Err(Error::NoActiveSession));
            let result = apply(&mut network, op);
            if !matches!(op, Op::Logout) {
                prop_assert_eq!(result, Err(Error::NoActiveSession));
            }
            let after = observe(&mut network);
            prop_assert_eq!(before, after);
        }
    }

    /// Cancelling a friendship twice leaves the same state as cancelling once.
    #[test]
    fn cancel_is_idempotent(a in 0..NAMES.len(), b in 0..NAMES.len()) {
        prop_assume!(a != b);
        let mut network = Network::new();
        network.join(NAMES[a]);
        network.join(NAMES[b]);
        network.login(NAMES[a]);
        network.send_friendship_to(NAMES[b]).unwrap();
        network.login(NAMES[b]);
        network.accept_friendship_from(NAMES[a]).unwrap();

        network.send_friendship_cancellation_to(NAMES[a]).unwrap();
        let once: Vec<_> = [a, b].iter().map(|i| network.member(NAMES[*i]).unwrap().cloned()).collect();
        network.send_friendship_cancellation_to(NAMES[a]).unwrap();
        let twice: Vec<_> = [a, b].iter().map(|i| network.member(NAMES[*i]).unwrap().cloned()).collect();

        prop_assert_eq!(once, twice);
        prop_assert!(!network.member(NAMES[a]).unwrap().unwrap().has_friend(NAMES[b]));
    }
}

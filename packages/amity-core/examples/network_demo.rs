//! # Network Demo
//!
//! Walks through the friendship flow:
//! 1. Hakan, Cecile, Ana and Ozan join
//! 2. Hakan sends Cecile a request and Cecile accepts
//! 3. Ana turns on auto-accept and becomes friends with Hakan at once
//! 4. Ozan befriends Cecile and Ana and gets recommended to Hakan
//! 5. Hakan leaves and every trace of Hakan is gone
//!
//! ## Run
//!
//! ```bash
//! RUST_LOG=amity_core=info cargo run --example network_demo
//! ```

use amity_core::Network;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=================================================");
    println!("              AMITY NETWORK DEMO");
    println!("=================================================\n");

    let mut network = Network::new();

    // =========================================================================
    // STEP 1: Members join
    // =========================================================================
    println!("1. Members join...\n");

    for name in ["Hakan", "Cecile", "Ana", "Ozan"] {
        network.join(name).expect("Failed to join");
    }
    match network.join("Hakan") {
        Some(_) => println!("   [FAIL] Duplicate user name was accepted!"),
        None => println!("   [OK] Duplicate user name rejected"),
    }

    network.login("Hakan").expect("Failed to log in");
    let members = network.list_members().expect("Failed to list members");
    println!("   Members: {:?}", members);
    println!();

    // =========================================================================
    // STEP 2: Request and accept
    // =========================================================================
    println!("2. Hakan sends Cecile a friend request...\n");

    network.send_friendship_to("Cecile").expect("Failed to send request");
    let cecile = network
        .member("Cecile")
        .expect("Session is active")
        .expect("Cecile is a member");
    println!("   Cecile's incoming requests: {:?}", cecile.incoming_requests());

    network.login("Cecile").expect("Failed to log in");
    network.accept_friendship_from("Hakan").expect("Failed to accept");
    let hakan = network
        .member("Hakan")
        .expect("Session is active")
        .expect("Hakan is a member");
    println!("   Hakan's friends after Cecile accepts: {:?}", hakan.friends());
    println!();

    // =========================================================================
    // STEP 3: Auto-accept
    // =========================================================================
    println!("3. Ana turns on auto-accept, Hakan sends a request...\n");

    network.login("Ana").expect("Failed to log in");
    network.auto_accept_friendships().expect("Failed to enable auto-accept");
    network.login("Hakan").expect("Failed to log in");
    network.send_friendship_to("Ana").expect("Failed to send request");

    let ana = network
        .member("Ana")
        .expect("Session is active")
        .expect("Ana is a member");
    println!("   Ana's friends: {:?}", ana.friends());
    println!("   Ana's incoming requests: {:?}", ana.incoming_requests());
    println!();

    // =========================================================================
    // STEP 4: Recommendations
    // =========================================================================
    println!("4. Ozan befriends Cecile and Ana...\n");

    network.login("Ozan").expect("Failed to log in");
    network.send_friendship_to("Cecile").expect("Failed to send request");
    network.send_friendship_to("Ana").expect("Failed to send request");
    network.login("Cecile").expect("Failed to log in");
    network.accept_all_friendships().expect("Failed to accept");

    network.login("Hakan").expect("Failed to log in");
    let recommended = network.recommend_friends().expect("Failed to recommend");
    println!("   Recommended to Hakan: {:?}", recommended);
    println!(
        "   Mutual friends with Ozan: {:?}",
        network.mutual_friends_with("Ozan").expect("Failed to compare")
    );
    println!();

    // =========================================================================
    // STEP 5: Leave
    // =========================================================================
    println!("5. Hakan leaves the network...\n");

    network.leave().expect("Failed to leave");
    match network.send_friendship_to("Cecile") {
        Ok(_) => println!("   [FAIL] Operation allowed without a session!"),
        Err(e) => println!("   [OK] Session ended: {}", e),
    }

    network.login("Cecile").expect("Failed to log in");
    for name in ["Cecile", "Ana", "Ozan"] {
        let member = network
            .member(name)
            .expect("Session is active")
            .expect("Member is still here");
        println!(
            "   {:<7} friends: {:?}, incoming: {:?}, outgoing: {:?}",
            name,
            member.friends(),
            member.incoming_requests(),
            member.outgoing_requests()
        );
    }
    println!();

    println!("=================================================");
    println!("                    DONE");
    println!("=================================================");
}

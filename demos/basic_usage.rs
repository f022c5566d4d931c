//! Basic usage example.
//!
//! This example demonstrates how to authenticate with the CloudConnexa API
//! and walk the organization's networks and users.
//!
//! Run with: cargo run --example basic_usage

use cloudconnexa::CloudConnexaClient;

#[tokio::main]
async fn main() -> cloudconnexa::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Get credentials from environment variables
    let base_url = std::env::var("CLOUDCONNEXA_BASE_URL")
        .expect("CLOUDCONNEXA_BASE_URL environment variable required");
    let client_id = std::env::var("CLOUDCONNEXA_CLIENT_ID")
        .expect("CLOUDCONNEXA_CLIENT_ID environment variable required");
    let client_secret = std::env::var("CLOUDCONNEXA_CLIENT_SECRET")
        .expect("CLOUDCONNEXA_CLIENT_SECRET environment variable required");

    println!("Connecting to {base_url}...");

    let client = CloudConnexaClient::new(&base_url, client_id, client_secret).await?;

    println!("Successfully authenticated!");

    let networks = client.networks().list().await?;
    println!("\nFound {} network(s):", networks.len());

    for network in &networks {
        println!(
            "  - {} ({})",
            network.name,
            network.description.as_deref().unwrap_or("No description")
        );

        for connector in &network.connectors {
            println!(
                "    Connector {} in {}: {:?}",
                connector.name,
                connector.vpn_region_id.as_deref().unwrap_or("?"),
                connector.connection_status
            );
        }

        let routes = client.routes().list(&network.id).await?;
        for route in &routes {
            println!(
                "    Route {:?} {}",
                route.route_type,
                route
                    .subnet
                    .as_deref()
                    .or(route.domain.as_deref())
                    .unwrap_or("")
            );
        }
    }

    let users = client.users().list().await?;
    println!("\nFound {} user(s):", users.len());
    for user in &users {
        println!("  - {} ({:?}, {} device(s))", user.username, user.role, user.devices.len());
    }

    println!("\nDone!");
    Ok(())
}

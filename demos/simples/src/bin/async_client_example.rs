use drs_client::prelude::*;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    // DRS_BASE_URL, DRS_TOKEN or DRS_USERNAME/DRS_PASSWORD come from the environment or .env
    let config = Config::new();
    info!("Using configuration: {}", config);
    let client = DrsClient::from_config(&config);

    let status = client.check_status().await?;
    info!("Index status: {}", status.status());

    let listing = client
        .get_all(&ListParams::new().with_limit(5).with_form("all"))
        .await?;
    if !listing.is_success() {
        error!("Listing failed with {}: {}", listing.status(), listing.text());
        return Ok(());
    }
    let records: serde_json::Value = listing.json()?;
    info!("First records: {:#}", records);

    let bundle = CreateBundle::new(None).with_name("empty-example-bundle");
    let created = client.create(&bundle).await?;
    info!("Create returned {}: {}", created.status(), created.text());

    let body: serde_json::Value = created.json().unwrap_or_default();
    if let Some(guid) = body["bundle_id"].as_str() {
        let fetched = client.get_with(guid, "bundle", true).await?;
        info!("Fetched bundle {}: {}", guid, fetched.text());
        let deleted = client.delete(guid).await?;
        info!("Deleted bundle {}: {}", guid, deleted.status());
    }

    Ok(())
}

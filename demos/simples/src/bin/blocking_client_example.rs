use drs_client::prelude::*;
use std::env;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let mut args = env::args().skip(1);
    let guid = args.next().ok_or("usage: blocking_client_example <guid> [protocol]")?;
    let protocol = args.next().unwrap_or_else(|| "s3".to_string());

    let client = BlockingDrsClient::from_config(&Config::new());

    let object = client.get(&guid)?;
    info!("Object {} -> {}: {}", guid, object.status(), object.text());

    let access = client.download(&guid, &protocol)?;
    if access.is_success() {
        let access: AccessUrl = access.json()?;
        info!("Access URL for {} over {}: {}", guid, protocol, access.url);
    } else {
        info!("No {} access for {}: {}", protocol, guid, access.status());
    }

    Ok(())
}

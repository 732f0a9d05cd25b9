use std::io;

use tracing_subscriber::EnvFilter;
use twilio_rest::{Activity, ActivityFilters, Client, ListRequest, Sid, WorkspacePath};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let workspace_sid = std::env::var("TWILIO_WORKSPACE_SID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TWILIO_WORKSPACE_SID environment variable is required",
        )
    })?;
    let available = std::env::var("TWILIO_ACTIVITY_AVAILABLE")
        .ok()
        .map(|raw| raw.parse::<bool>())
        .transpose()?;

    let client = Client::from_env()?;
    let request = ListRequest::<Activity>::new(WorkspacePath::new(Sid::new(workspace_sid)?))
        .filters(ActivityFilters {
            available,
            ..Default::default()
        });

    let mut activities = client.list(request).await?;
    while let Some(activity) = activities.try_next().await? {
        println!(
            "sid: {}, friendly_name: {:?}, available: {:?}",
            activity.sid, activity.friendly_name, activity.available
        );
    }
    println!("pages fetched: {}", activities.pages_fetched());

    Ok(())
}

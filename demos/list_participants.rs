use std::io;

use futures::TryStreamExt;
use tracing_subscriber::EnvFilter;
use twilio_rest::{Client, ConferencePath, ListRequest, Participant, ParticipantFilters, Sid};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let conference_sid = std::env::var("TWILIO_CONFERENCE_SID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TWILIO_CONFERENCE_SID environment variable is required",
        )
    })?;

    let client = Client::from_env()?;
    let request = ListRequest::<Participant>::new(ConferencePath::new(Sid::new(conference_sid)?))
        .filters(ParticipantFilters { muted: Some(true) })
        .limit(50);

    let muted: Vec<Participant> = client.list(request).await?.into_stream().try_collect().await?;
    for participant in &muted {
        println!(
            "call_sid: {}, hold: {:?}",
            participant.call_sid, participant.hold
        );
    }
    println!("muted participants: {}", muted.len());

    Ok(())
}

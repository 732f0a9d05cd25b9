use tracing_subscriber::EnvFilter;
use twilio_rest::{
    AvailableLocalFilters, AvailableLocalNumber, AvailableNumbersPath, Client, CountryCode,
    ListRequest, PageSize,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let country = std::env::var("TWILIO_COUNTRY").unwrap_or_else(|_| "US".to_owned());
    let area_code = std::env::var("TWILIO_AREA_CODE")
        .ok()
        .map(|raw| raw.parse::<u32>())
        .transpose()?;

    let client = Client::from_env()?;
    let request =
        ListRequest::<AvailableLocalNumber>::new(AvailableNumbersPath::new(CountryCode::new(country)?))
            .filters(AvailableLocalFilters {
                area_code,
                sms_enabled: Some(true),
                ..Default::default()
            })
            .page_size(PageSize::new(20)?);

    // Page by page, without the record-level iterator.
    let mut page = Some(client.first_page(&request).await?);
    let mut index = 0;
    while let Some(current) = page {
        index += 1;
        println!("page {index}: {} numbers", current.len());
        for number in current.records() {
            println!("  {} ({:?})", number.phone_number, number.region);
        }
        page = client.next_page(&current).await?;
    }

    Ok(())
}

use fantoccini::{Client, ClientBuilder};
use std::time::Duration;
use tokio::time::timeout;
use url::Url;

use super::Snapshot;
use crate::config::WebSourceConfig;
use crate::error::Error;

/// Copies each image's rendered size into its `width`/`height` attributes so
/// the snapshot carries the dimensions the browser laid out.
const STAMP_IMAGE_SIZES: &str = r#"
for (const img of document.querySelectorAll('img')) {
    img.setAttribute('width', String(img.width));
    img.setAttribute('height', String(img.height));
}
return document.images.length;
"#;

/// Renders `url` through WebDriver and returns the page source.
///
/// # Arguments
///
/// * `url` - Page to load
/// * `config` - WebDriver location and timing
pub async fn capture(url: &str, config: &WebSourceConfig) -> Result<Snapshot, Error> {
    let target = Url::parse(url)?;
    ::log::info!("Capturing {}", target);

    let client = connect_to_webdriver(&config.webdriver_url).await?;

    let result = timeout(
        Duration::from_secs(config.page_timeout_secs),
        snapshot(&client, &target, config.settle_millis),
    )
    .await;

    // Close the session whatever happened
    if let Err(e) = client.close().await {
        ::log::warn!("Failed to close WebDriver session: {}", e);
    }

    match result {
        Ok(snapshot) => snapshot,
        Err(_) => {
            ::log::error!("Timeout capturing: {}", target);
            Err(Error::Timeout(config.page_timeout_secs))
        }
    }
}

/// Navigates, lets the page settle and reads back source and final URL
async fn snapshot(client: &Client, target: &Url, settle_millis: u64) -> Result<Snapshot, Error> {
    let start = std::time::Instant::now();
    client.goto(target.as_str()).await?;

    if settle_millis > 0 {
        tokio::time::sleep(Duration::from_millis(settle_millis)).await;
    }

    match client.execute(STAMP_IMAGE_SIZES, Vec::new()).await {
        Ok(count) => ::log::debug!("Stamped rendered sizes on {} images", count),
        // Extraction still works from authored attributes
        Err(e) => ::log::warn!("Could not read rendered image sizes: {}", e),
    }

    let html = client.source().await?;
    let url = client.current_url().await?;

    ::log::debug!(
        "Captured {} bytes from {} in {:.2} seconds",
        html.len(),
        url,
        start.elapsed().as_secs_f64()
    );
    Ok(Snapshot { html, url })
}

/// Connects to the WebDriver instance, trying common local ports on failure
async fn connect_to_webdriver(webdriver_url: &str) -> Result<Client, Error> {
    match ClientBuilder::native().connect(webdriver_url).await {
        Ok(client) => {
            ::log::debug!("Connected to WebDriver at {}", webdriver_url);
            return Ok(client);
        }
        Err(e) => {
            ::log::error!("Failed to connect to WebDriver at {}: {}", webdriver_url, e);
        }
    }

    for url in fallback_webdriver_urls(webdriver_url) {
        ::log::info!("Trying fallback WebDriver URL: {}", url);
        if let Ok(client) = ClientBuilder::native().connect(url).await {
            ::log::debug!("Connected to fallback WebDriver at {}", url);
            return Ok(client);
        }
    }

    Err(Error::WebDriver(format!(
        "could not connect to {webdriver_url} or any fallback; make sure a WebDriver server is \
         running or set the WEBDRIVER_URL environment variable"
    )))
}

fn fallback_webdriver_urls(configured: &str) -> impl Iterator<Item = &'static str> + '_ {
    [
        "http://localhost:9515", // ChromeDriver default
        "http://localhost:4444", // geckodriver / Selenium default
        "http://127.0.0.1:4444",
    ]
    .into_iter()
    .filter(move |url| *url != configured)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallbacks_skip_configured_url() {
        let urls: Vec<_> = fallback_webdriver_urls("http://localhost:4444").collect();
        assert_eq!(urls, vec!["http://localhost:9515", "http://127.0.0.1:4444"]);
    }

    #[tokio::test]
    async fn test_invalid_target_url() {
        let err = capture("not a url", &WebSourceConfig::default()).await.unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }
}

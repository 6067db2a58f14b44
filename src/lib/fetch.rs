use super::error::{Error, Result};
use super::geojson::FeatureCollection;
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::info;

/// Something that can answer a GET request with a response body.
pub trait Source {
    fn get(&self, url: &str) -> Result<String>;
}

/// Blocking HTTP source. Every request is bounded by the client's timeout.
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(HttpSource { client })
    }
}

impl Source for HttpSource {
    fn get(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status,
            });
        }
        Ok(response.text()?)
    }
}

/// Retrieve and parse a feature collection, reporting progress under `label`.
pub fn fetch(source: &dyn Source, url: &str, label: &str) -> Result<FeatureCollection> {
    info!("Fetching {}...", label);
    let body = source.get(url)?;
    let collection: FeatureCollection = body.parse()?;
    info!("Fetched {} {} records", collection.len(), label);
    Ok(collection)
}

use std::time::Duration;

use gameval_core::{GamevalError, Result};

const TIMEOUT: Duration = Duration::from_secs(30);

/// Source of upstream documents, addressed by full URL.
pub trait SourceFetcher {
    fn fetch(&self, url: &str) -> Result<String>;
}

/// Blocking HTTP fetcher. Any non-2xx status is an error.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(TIMEOUT)
            .build()
            .map_err(|e| GamevalError::Fetch {
                url: String::new(),
                message: format!("could not build HTTP client: {e}"),
            })?;
        Ok(Self { client })
    }
}

impl SourceFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        let fetch_error = |message: String| GamevalError::Fetch {
            url: url.to_string(),
            message,
        };

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| fetch_error(e.to_string()))?;

        if !response.status().is_success() {
            return Err(fetch_error(format!("HTTP {}", response.status())));
        }

        response.text().map_err(|e| fetch_error(e.to_string()))
    }
}

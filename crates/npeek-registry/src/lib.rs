use serde_json::{Map, Value};

use npeek_constants::{
    DOWNLOADS_PERIOD_LAST_MONTH, NPM_DOWNLOADS_API_URL, NPM_REGISTRY_URL, USER_AGENT, keys,
};
use npeek_error::{RetrievalError, Result};
use npeek_utils::{PackageSpec, parse_package_spec};

/// Collects registry metadata and last-month download counts for one
/// npm package specifier.
///
/// Construction only parses the specifier; both payload fields stay
/// `None` until `fetch_data` succeeds or a payload is injected with
/// `set_raw_data`. `get_all_data` merges whatever is populated with
/// the parsed fields and never fabricates registry data, so callers
/// must check the fetch result before trusting the base mapping.
pub struct NpmCollector {
    spec: PackageSpec,
    raw_data: Option<Value>,
    raw_downloads: Option<Value>,
}

impl NpmCollector {
    #[must_use]
    pub fn new(specifier: &str) -> Self {
        Self {
            spec: parse_package_spec(specifier),
            raw_data: None,
            raw_downloads: None,
        }
    }

    #[must_use]
    pub fn package_name(&self) -> &str {
        &self.spec.name
    }

    #[must_use]
    pub fn original_package_name(&self) -> &str {
        &self.spec.original
    }

    #[must_use]
    pub fn version_tag(&self) -> Option<&str> {
        self.spec.version_tag.as_deref()
    }

    /// Registry document URL. Scoped names keep their literal `@` and
    /// `/`, which the npm registry accepts unencoded.
    #[must_use]
    pub fn metadata_url(&self) -> String {
        format!("{NPM_REGISTRY_URL}/{}", self.spec.name)
    }

    #[must_use]
    pub fn downloads_url(&self) -> String {
        format!(
            "{NPM_DOWNLOADS_API_URL}/{DOWNLOADS_PERIOD_LAST_MONTH}/{}",
            self.spec.name
        )
    }

    /// Injects a registry payload directly, bypassing the network.
    /// The merge in `get_all_data` is identical to the fetched path.
    pub fn set_raw_data(&mut self, data: Value) {
        self.raw_data = Some(data);
    }

    /// Issues the metadata and downloads requests concurrently and
    /// stores both bodies. Either call failing (transport error,
    /// non-success status, or a body that is not JSON) surfaces as a
    /// `RetrievalError`; a body that did arrive is kept for
    /// diagnostics even when the other call failed.
    pub async fn fetch_data(&mut self, client: &reqwest::Client) -> Result<()> {
        let metadata_url = self.metadata_url();
        let downloads_url = self.downloads_url();
        let (metadata, downloads) = tokio::join!(
            fetch_json(client, &metadata_url, &self.spec.name),
            fetch_json(client, &downloads_url, &self.spec.name),
        );
        self.store_results(metadata, downloads)
    }

    // Keeps whichever bodies arrived before surfacing a failure
    fn store_results(&mut self, metadata: Result<Value>, downloads: Result<Value>) -> Result<()> {
        match metadata {
            Ok(body) => self.raw_data = Some(body),
            Err(e) => {
                if let Ok(body) = downloads {
                    self.raw_downloads = Some(body);
                }
                return Err(e);
            }
        }
        self.raw_downloads = Some(downloads?);
        Ok(())
    }

    /// Blocking convenience wrapper around `fetch_data` with a tuned
    /// client, for callers without a runtime of their own.
    pub fn fetch(&mut self) -> Result<()> {
        let rt = tokio::runtime::Runtime::new()
            .map_err(|e| RetrievalError::RuntimeError(e.to_string()))?;
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(45))
            .connect_timeout(std::time::Duration::from_secs(20))
            .tcp_nodelay(true)
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        rt.block_on(self.fetch_data(&client))
    }

    /// Returns the merged mapping: the registry document as the base,
    /// the downloads body under `keys::DOWNLOADS` when present, then
    /// the parsed fields under their fixed keys. The name and
    /// original-specifier keys are always present; the version-tag
    /// key only when the specifier carried one.
    #[must_use]
    pub fn get_all_data(&self) -> Map<String, Value> {
        let mut data = match &self.raw_data {
            Some(Value::Object(map)) => map.clone(),
            _ => Map::new(),
        };

        if let Some(downloads) = &self.raw_downloads {
            data.insert(keys::DOWNLOADS.to_string(), downloads.clone());
        }

        data.insert(
            keys::PACKAGE_NAME.to_string(),
            Value::String(self.spec.name.clone()),
        );
        data.insert(
            keys::ORIGINAL_PACKAGE_NAME.to_string(),
            Value::String(self.spec.original.clone()),
        );
        if let Some(tag) = &self.spec.version_tag {
            data.insert(keys::VERSION_TAG.to_string(), Value::String(tag.clone()));
        }

        data
    }
}

async fn fetch_json(client: &reqwest::Client, url: &str, name: &str) -> Result<Value> {
    let resp = client
        .get(url)
        .header("Accept", "application/json")
        .header("User-Agent", USER_AGENT)
        .send()
        .await
        .map_err(|e| classify_transport_error(&e, name))?;

    let resp = resp
        .error_for_status()
        .map_err(|e| RetrievalError::HttpStatus(name.to_string(), e.to_string()))?;

    let text = resp
        .text()
        .await
        .map_err(|e| RetrievalError::NetworkError(name.to_string(), e.to_string()))?;

    serde_json::from_str(&text)
        .map_err(|e| RetrievalError::InvalidResponse(name.to_string(), e.to_string()))
}

fn classify_transport_error(e: &reqwest::Error, name: &str) -> RetrievalError {
    if e.is_timeout() {
        RetrievalError::Timeout(name.to_string())
    } else if e.is_connect() {
        RetrievalError::ConnectionFailed(name.to_string(), e.to_string())
    } else {
        RetrievalError::NetworkError(name.to_string(), e.to_string())
    }
}

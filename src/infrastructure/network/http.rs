// HTTP client utilities
use crate::domain::error::PickerError;
use once_cell::sync::Lazy;
use reqwest::Client;

/// Client-identifying string sent as both user agent and `x-app-name`.
pub static APP_NAME: Lazy<String> =
    Lazy::new(|| format!("lvp/{}", env!("CARGO_PKG_VERSION")));

/// Create the shared HTTP client with appropriate settings
pub fn create_client(http_proxy: Option<&str>) -> Result<Client, PickerError> {
    let mut builder = Client::builder()
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(std::time::Duration::from_secs(30))
        .timeout(std::time::Duration::from_secs(30))
        .user_agent(APP_NAME.as_str());

    if let Some(proxy) = http_proxy {
        builder = builder.proxy(reqwest::Proxy::all(proxy)?);
    }

    Ok(builder.build()?)
}

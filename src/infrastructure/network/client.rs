use crate::domain::error::PickerError;
use crate::domain::model::Suggestion;
use crate::domain::traits::SuggestService;
use crate::infrastructure::config::ApiConfig;
use crate::infrastructure::network::http::{create_client, APP_NAME};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

// PanLex suggest API wire structures
#[derive(Serialize, Debug)]
struct SuggestParams<'a> {
    txt: &'a str,
    pref_trans_langvar: u32,
}

#[derive(Deserialize, Debug)]
struct SuggestResponse {
    // Absent when the service has no matches
    suggest: Option<Vec<Suggestion>>,
}

/// Client for the PanLex langvar suggest endpoint.
#[derive(Clone)]
pub struct PanLexClient {
    client: Client,
    endpoint: String,
    pref_trans_langvar: u32,
}

impl PanLexClient {
    pub fn new(client: Client, endpoint: impl Into<String>, pref_trans_langvar: u32) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            pref_trans_langvar,
        }
    }

    pub fn from_config(api: &ApiConfig, http_proxy: Option<&str>) -> Result<Self, PickerError> {
        let client = create_client(http_proxy)?;
        Ok(Self::new(client, api.endpoint.clone(), api.pref_trans_langvar))
    }
}

#[async_trait]
impl SuggestService for PanLexClient {
    async fn suggest(&self, txt: &str) -> Result<Vec<Suggestion>, PickerError> {
        let url = format!("{}/suggest/langvar", self.endpoint);
        let response = self
            .client
            .post(&url)
            .header("x-app-name", APP_NAME.as_str())
            .json(&SuggestParams {
                txt,
                pref_trans_langvar: self.pref_trans_langvar,
            })
            .send()
            .await?
            .error_for_status()?
            .json::<SuggestResponse>()
            .await?;

        tracing::debug!(
            txt = %txt,
            count = response.suggest.as_ref().map(Vec::len).unwrap_or(0),
            "suggest response decoded"
        );

        // No `suggest` field means no matches; the list clears.
        Ok(response.suggest.unwrap_or_default())
    }
}

use super::{client::*, error::*, models::*, query};
use async_trait::async_trait;
use log::{debug, error};
use reqwest::Method;

pub const API_BASE_URL: &str = "https://pddimp.yandex.ru/api2/admin/dns";

pub const TOKEN_URL: &str = "https://pddimp.yandex.ru/api2/admin/get_token_result";

const TOKEN_HEADER: &str = "PddToken";

pub struct YandexClient {
    client: reqwest::Client,
    admin_token: String,
    base_url: String,
}

#[async_trait]
impl DnsApiClient for YandexClient {
    async fn list(&self, domain: &str) -> Result<ApiResponse> {
        self.request(Method::GET, "list", &query::domain_query(domain))
            .await
    }

    async fn add_record(&self, record: &Record, domain: &str) -> Result<RecordChange> {
        let response = self
            .request(Method::POST, "add", &query::record_query(domain, record))
            .await?;
        Ok(merge_echo(record, response))
    }

    async fn edit_record(&self, record: &Record, domain: &str) -> Result<RecordChange> {
        let response = self
            .request(Method::POST, "edit", &query::record_query(domain, record))
            .await?;
        Ok(merge_echo(record, response))
    }

    async fn delete_record_by_id(&self, record_id: u64, domain: &str) -> Result<ApiResponse> {
        self.request(Method::POST, "del", &query::delete_query(domain, record_id))
            .await
    }
}

impl YandexClient {
    pub fn new(admin_token: String) -> Self {
        Self::with_base_url(admin_token, API_BASE_URL)
    }

    pub fn with_base_url(admin_token: String, base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            admin_token,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn request(&self, method: Method, command: &str, query: &str) -> Result<ApiResponse> {
        let url = format!("{}/{}?{}", self.base_url, command, query);
        debug!("{} {}", method, url);

        let response = self
            .client
            .request(method, &url)
            .header(TOKEN_HEADER, &self.admin_token)
            .send()
            .await?;
        debug!("Response Status: {}", response.status());

        let text = response.text().await?;
        debug!("Response Body: {}", text);

        let mut parsed: ApiResponse = match serde_json::from_str(&text) {
            Ok(parsed) => parsed,
            Err(e) => {
                error!("Failed to parse API response: {}", e);
                return Err(ApiError::Decode {
                    source: e,
                    body: text,
                });
            }
        };
        parsed.json = text;

        if parsed.is_error() {
            let message = parsed
                .error
                .clone()
                .unwrap_or_else(|| "unknown error".to_string());
            error!("API error on {}: {}", command, message);
            if let Some(operation) = parsed.record.as_ref().map(|r| r.operation.as_str()) {
                if !operation.is_empty() {
                    debug!("Rejected operation: {}", operation);
                }
            }
            return Err(ApiError::Provider {
                message,
                response: Box::new(parsed),
            });
        }

        Ok(parsed)
    }
}

fn merge_echo(record: &Record, response: ApiResponse) -> RecordChange {
    let record = match &response.record {
        Some(echoed) => record.merged_with(echoed),
        None => record.clone(),
    };
    RecordChange { record, response }
}

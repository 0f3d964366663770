use super::error::Result;
use super::models::*;
use async_trait::async_trait;

/// Result of an add or edit call: the caller's record with the provider's
/// echo merged in, plus the envelope it came from.
#[derive(Debug, Clone)]
pub struct RecordChange {
    pub record: Record,
    pub response: ApiResponse,
}

#[async_trait]
pub trait DnsApiClient: Send + Sync {
    async fn list(&self, domain: &str) -> Result<ApiResponse>;
    async fn add_record(&self, record: &Record, domain: &str) -> Result<RecordChange>;
    async fn edit_record(&self, record: &Record, domain: &str) -> Result<RecordChange>;
    async fn delete_record_by_id(&self, record_id: u64, domain: &str) -> Result<ApiResponse>;

    async fn delete_record(&self, record: &Record, domain: &str) -> Result<ApiResponse> {
        self.delete_record_by_id(record.record_id, domain).await
    }
}

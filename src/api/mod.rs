pub mod client;
pub mod error;
pub mod models;
pub mod query;
pub mod yandex;

pub use client::{DnsApiClient, RecordChange};
pub use error::ApiError;
pub use yandex::YandexClient;

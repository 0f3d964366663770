use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

pub const ERROR_ANSWER: &str = "error";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordType {
    A,
    Aaaa,
    Cname,
    Mx,
    Ns,
    Soa,
    Txt,
    Srv,
}

impl RecordType {
    pub const ALL: [RecordType; 8] = [
        RecordType::A,
        RecordType::Aaaa,
        RecordType::Cname,
        RecordType::Mx,
        RecordType::Ns,
        RecordType::Soa,
        RecordType::Txt,
        RecordType::Srv,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::Aaaa => "AAAA",
            RecordType::Cname => "CNAME",
            RecordType::Mx => "MX",
            RecordType::Ns => "NS",
            RecordType::Soa => "SOA",
            RecordType::Txt => "TXT",
            RecordType::Srv => "SRV",
        }
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let known: Vec<&str> = RecordType::ALL.iter().map(|t| t.as_str()).collect();
                format!("unknown record type '{}' (available: {})", s, known.join(", "))
            })
    }
}

/// MX/SRV priority. The provider emits it either as a JSON number or a
/// JSON string depending on the endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Priority {
    #[default]
    Absent,
    Number(i64),
    Text(String),
}

impl Priority {
    pub fn from_input(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() {
            Priority::Absent
        } else {
            Priority::Text(value.to_string())
        }
    }

    pub fn is_absent(&self) -> bool {
        match self {
            Priority::Absent => true,
            Priority::Text(s) => s.is_empty(),
            Priority::Number(_) => false,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Absent => Ok(()),
            Priority::Number(n) => write!(f, "{}", n),
            Priority::Text(s) => f.write_str(s),
        }
    }
}

/// One DNS record as the provider represents it. Zero values (empty
/// strings, `0`, [`Priority::Absent`]) mean "not supplied".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Record {
    #[serde(deserialize_with = "null_as_default")]
    pub record_id: u64,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub record_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub domain: String,
    #[serde(deserialize_with = "null_as_default")]
    pub fqdn: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(deserialize_with = "null_as_default")]
    pub subdomain: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ttl: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub minttl: u32,
    pub priority: Priority,
    #[serde(deserialize_with = "null_as_default")]
    pub weight: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub port: u16,
    #[serde(deserialize_with = "null_as_default")]
    pub target: String,
    #[serde(deserialize_with = "null_as_default")]
    pub admin_mail: String,
    #[serde(deserialize_with = "null_as_default")]
    pub refresh: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub retry: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub expire: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub neg_cache: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub operation: String,
}

// the provider sends `null` for fields it has no value for
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Record {
    /// Returns a copy of `self` with the identity fields the provider echoes
    /// back after add/edit taken from `echoed`. Weight, port, target and the
    /// SOA timers keep the locally supplied values.
    pub fn merged_with(&self, echoed: &Record) -> Record {
        Record {
            record_id: echoed.record_id,
            record_type: echoed.record_type.clone(),
            domain: echoed.domain.clone(),
            subdomain: echoed.subdomain.clone(),
            fqdn: echoed.fqdn.clone(),
            content: echoed.content.clone(),
            ttl: echoed.ttl,
            priority: echoed.priority.clone(),
            ..self.clone()
        }
    }
}

/// Wrapper around every provider response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub records: Vec<Record>,
    #[serde(default)]
    pub record: Option<Record>,
    #[serde(default)]
    pub record_id: Option<u64>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub success: String,
    #[serde(default)]
    pub error: Option<String>,
    /// Unmodified response body.
    #[serde(skip)]
    pub json: String,
}

impl ApiResponse {
    pub fn is_error(&self) -> bool {
        self.success == ERROR_ANSWER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_decodes_number_string_and_missing() {
        let r: Record = serde_json::from_str(r#"{"priority": 10}"#).unwrap();
        assert_eq!(r.priority, Priority::Number(10));

        let r: Record = serde_json::from_str(r#"{"priority": "20"}"#).unwrap();
        assert_eq!(r.priority, Priority::Text("20".to_string()));

        let r: Record = serde_json::from_str(r#"{"priority": null}"#).unwrap();
        assert_eq!(r.priority, Priority::Absent);

        let r: Record = serde_json::from_str(r#"{"type": "A"}"#).unwrap();
        assert_eq!(r.priority, Priority::Absent);
    }

    #[test]
    fn priority_renders_as_plain_text() {
        assert_eq!(Priority::Number(5).to_string(), "5");
        assert_eq!(Priority::Text("15".into()).to_string(), "15");
        assert_eq!(Priority::Absent.to_string(), "");
        assert!(Priority::Text(String::new()).is_absent());
        assert!(Priority::from_input("  ").is_absent());
    }

    #[test]
    fn null_fields_decode_as_unset() {
        let r: Record = serde_json::from_str(
            r#"{"record_id": 1, "type": "A", "content": "1.1.1.1", "target": null,
                "ttl": null, "port": null, "admin_mail": null, "priority": null}"#,
        )
        .unwrap();
        assert_eq!(r.record_id, 1);
        assert_eq!(r.content, "1.1.1.1");
        assert_eq!(r.target, "");
        assert_eq!(r.ttl, 0);
        assert_eq!(r.port, 0);
        assert!(r.priority.is_absent());

        let resp: ApiResponse = serde_json::from_str(
            r#"{"success": "ok", "records": [{"record_id": 2, "type": null, "subdomain": null}]}"#,
        )
        .unwrap();
        assert_eq!(resp.records[0].record_type, "");
        assert_eq!(resp.records[0].subdomain, "");
    }

    #[test]
    fn record_decodes_provider_payload() {
        let body = r#"{
            "record_id": 123, "type": "MX", "domain": "example.com",
            "fqdn": "example.com", "content": "mx.example.com.",
            "subdomain": "@", "ttl": 21600, "priority": 10
        }"#;
        let r: Record = serde_json::from_str(body).unwrap();
        assert_eq!(r.record_id, 123);
        assert_eq!(r.record_type, "MX");
        assert_eq!(r.subdomain, "@");
        assert_eq!(r.ttl, 21600);
        assert_eq!(r.weight, 0);
    }

    #[test]
    fn merge_copies_only_echoed_fields() {
        let local = Record {
            record_type: "SRV".into(),
            content: "old".into(),
            subdomain: "_sip._tcp".into(),
            weight: 5,
            port: 5060,
            target: "sip.example.com.".into(),
            ..Default::default()
        };
        let echoed = Record {
            record_id: 42,
            record_type: "SRV".into(),
            domain: "example.com".into(),
            fqdn: "_sip._tcp.example.com".into(),
            content: "new".into(),
            subdomain: "_sip._tcp".into(),
            ttl: 600,
            priority: Priority::Number(10),
            weight: 99,
            ..Default::default()
        };

        let merged = local.merged_with(&echoed);
        assert_eq!(merged.record_id, 42);
        assert_eq!(merged.content, "new");
        assert_eq!(merged.ttl, 600);
        assert_eq!(merged.priority, Priority::Number(10));
        assert_eq!(merged.weight, 5);
        assert_eq!(merged.port, 5060);
        assert_eq!(merged.target, "sip.example.com.");
        // the original is untouched
        assert_eq!(local.record_id, 0);
    }

    #[test]
    fn record_type_parses_case_insensitively() {
        assert_eq!("mx".parse::<RecordType>().unwrap(), RecordType::Mx);
        assert_eq!("Aaaa".parse::<RecordType>().unwrap(), RecordType::Aaaa);
        assert!("PTR".parse::<RecordType>().is_err());
    }

    #[test]
    fn envelope_error_discriminator() {
        let resp: ApiResponse =
            serde_json::from_str(r#"{"success": "error", "error": "bad_domain"}"#).unwrap();
        assert!(resp.is_error());
        assert_eq!(resp.error.as_deref(), Some("bad_domain"));
        assert!(resp.records.is_empty());
    }
}

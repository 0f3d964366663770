use super::error::OutputError;
use super::filter::{split_list, WILDCARD};
use crate::api::models::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    Id,
    Subdomain,
    Type,
    Content,
    Priority,
    Ttl,
    Fqdn,
    AdminMail,
    Retry,
    Refresh,
    Expire,
    MinTtl,
}

/// Keys and labels in canonical display order.
static PROPERTIES: [(&str, &str, Property); 12] = [
    ("id", "Id", Property::Id),
    ("subdomain", "Subdomain", Property::Subdomain),
    ("type", "Type", Property::Type),
    ("content", "Content", Property::Content),
    ("priority", "Priority", Property::Priority),
    ("ttl", "TTL", Property::Ttl),
    ("fqdn", "FQDN", Property::Fqdn),
    ("admin_mail", "Admin mail", Property::AdminMail),
    ("retry", "Retry", Property::Retry),
    ("refresh", "Refresh", Property::Refresh),
    ("expire", "Expire", Property::Expire),
    ("minttl", "Min TTL", Property::MinTtl),
];

pub const DEFAULT_PROPS: &str = "id,subdomain,type,content,priority";

impl Property {
    pub fn from_key(key: &str) -> Result<Self, OutputError> {
        let wanted = key.trim();
        PROPERTIES
            .iter()
            .find(|(k, _, _)| k.eq_ignore_ascii_case(wanted))
            .map(|(_, _, p)| *p)
            .ok_or_else(|| OutputError::UnknownProperty(key.to_string()))
    }

    pub fn label(&self) -> &'static str {
        self.entry().1
    }

    pub fn value(&self, r: &Record) -> String {
        match self {
            Property::Id => r.record_id.to_string(),
            Property::Subdomain => r.subdomain.clone(),
            Property::Type => r.record_type.clone(),
            Property::Content => r.content.clone(),
            Property::Priority => r.priority.to_string(),
            Property::Ttl => r.ttl.to_string(),
            Property::Fqdn => r.fqdn.clone(),
            Property::AdminMail => r.admin_mail.clone(),
            Property::Retry => r.retry.to_string(),
            Property::Refresh => r.refresh.to_string(),
            Property::Expire => r.expire.to_string(),
            Property::MinTtl => r.minttl.to_string(),
        }
    }

    fn entry(&self) -> &'static (&'static str, &'static str, Property) {
        // every variant has exactly one row in PROPERTIES
        &PROPERTIES[*self as usize]
    }
}

pub fn header(key: &str) -> Result<&'static str, OutputError> {
    Property::from_key(key).map(|p| p.label())
}

pub fn value(key: &str, record: &Record) -> Result<String, OutputError> {
    Property::from_key(key).map(|p| p.value(record))
}

/// Splits a comma-separated property list. `*` expands to every key in
/// canonical order. Keys are not validated here.
pub fn expand_props(raw: &str) -> Vec<String> {
    let keys = split_list(raw);
    if keys.iter().any(|k| k == WILDCARD) {
        return PROPERTIES.iter().map(|(k, _, _)| k.to_string()).collect();
    }
    keys
}

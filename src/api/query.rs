use super::models::Record;
use url::form_urlencoded::Serializer;

/// Encodes the supplied fields of `record` as a query string. Fields holding
/// their zero value are left out, the rest keep a fixed order.
pub fn encode_record(record: &Record) -> String {
    let mut query = Serializer::new(String::new());
    append_record(&mut query, record);
    query.finish()
}

pub fn record_query(domain: &str, record: &Record) -> String {
    let fields = encode_record(record);
    let domain = domain_query(domain);
    if fields.is_empty() {
        domain
    } else {
        format!("{}&{}", domain, fields)
    }
}

pub fn domain_query(domain: &str) -> String {
    Serializer::new(String::new())
        .append_pair("domain", domain)
        .finish()
}

pub fn delete_query(domain: &str, record_id: u64) -> String {
    Serializer::new(String::new())
        .append_pair("domain", domain)
        .append_pair("record_id", &record_id.to_string())
        .finish()
}

fn append_record(query: &mut Serializer<'_, String>, r: &Record) {
    let numbers = |n: u64| (n != 0).then(|| n.to_string());
    let text = |s: &str| (!s.is_empty()).then(|| s.to_string());
    let priority = (!r.priority.is_absent()).then(|| r.priority.to_string());

    let fields = [
        ("record_id", numbers(r.record_id)),
        ("type", text(&r.record_type)),
        ("content", text(&r.content)),
        ("ttl", numbers(r.ttl.into())),
        ("admin_mail", text(&r.admin_mail)),
        ("priority", priority),
        ("weight", numbers(r.weight.into())),
        ("port", numbers(r.port.into())),
        ("target", text(&r.target)),
        ("subdomain", text(&r.subdomain)),
        ("refresh", numbers(r.refresh.into())),
        ("retry", numbers(r.retry.into())),
        ("expire", numbers(r.expire.into())),
        ("neg_cache", numbers(r.neg_cache.into())),
    ];

    for (key, value) in fields {
        if let Some(value) = value {
            query.append_pair(key, &value);
        }
    }
}

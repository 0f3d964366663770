use crate::api::models::Record;

pub const WILDCARD: &str = "*";

pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

// `*` keeps everything, unknown names match nothing
pub fn filter_records<'a, S: AsRef<str>>(records: &'a [Record], types: &[S]) -> Vec<&'a Record> {
    if types.iter().any(|t| t.as_ref() == WILDCARD) {
        return records.iter().collect();
    }

    records
        .iter()
        .filter(|r| {
            types
                .iter()
                .any(|t| t.as_ref().eq_ignore_ascii_case(&r.record_type))
        })
        .collect()
}

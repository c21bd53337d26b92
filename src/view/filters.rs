use indexmap::IndexMap;
use percent_encoding::percent_decode_str;

/// Field name to the values it is filtered by, in first-seen order.
pub type RequestFilters = IndexMap<String, Vec<String>>;

/// Parses a `filters` query value such as `beans:4|goats:yes|beans:some`.
///
/// The value is percent-decoded first, so `beans%3A4` reads as `beans:4`.
/// Segments split on the first `:` only. Empty segments and segments without
/// a `:` are ignored.
#[must_use]
pub fn parse_request_filters(raw: &str) -> RequestFilters {
    let decoded = percent_decode_str(raw).decode_utf8_lossy();
    let mut filters = RequestFilters::new();
    for segment in decoded.split('|').filter(|segment| !segment.is_empty()) {
        let Some((field, value)) = segment.split_once(':') else {
            continue;
        };
        filters
            .entry(field.to_owned())
            .or_default()
            .push(value.to_owned());
    }
    filters
}

use serde_json::Value;

/// Query payload sent with a REST call.
///
/// Keys become query parameter names; values are rendered verbatim for JSON
/// strings and as compact JSON for everything else.
pub type Payload = serde_json::Map<String, Value>;

/// Encodes a payload as a URL query string, without the leading `?`.
pub fn to_query_string(payload: &Payload) -> String {
    payload
        .iter()
        .map(|(key, value)| {
            let rendered = match value {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(&rendered)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

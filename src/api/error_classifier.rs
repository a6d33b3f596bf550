use reqwest::StatusCode;

const MESSAGE_FIELDS: [&str; 5] = ["error_description", "errorDescription", "message", "detail", "error"];

/// Picks a human-readable message for a failed response, preferring a structured
/// description in the JSON error body over the HTTP status text.
pub fn classify_error(status: StatusCode, error_body: Option<&str>) -> String {
    error_body
        .and_then(structured_message)
        .unwrap_or_else(|| status_text(status))
}

fn structured_message(body: &str) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;
    MESSAGE_FIELDS.iter().find_map(|field| {
        json.get(field)
            .and_then(|v| v.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}

fn status_text(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("HTTP {} {}", status.as_u16(), reason),
        None => format!("HTTP {}", status.as_u16()),
    }
}

use serde_json::Value;

/// Best-effort extraction of a JSON object from a completion. Tries the text
/// as-is first, then with a surrounding markdown code fence removed. Providers
/// are told not to fence their output, but many do anyway.
pub(crate) fn json_payload(text: &str) -> Option<Value> {
    let trimmed = text.trim();

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        return Some(value);
    }

    strip_markdown_code_fence(trimmed)
        .and_then(|inner| serde_json::from_str::<Value>(&inner).ok())
}

pub(crate) fn strip_markdown_code_fence(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if !trimmed.starts_with("```") {
        return None;
    }

    let mut lines = trimmed.lines();
    lines.next()?; // opening fence, possibly with a language tag

    let mut body = Vec::new();
    for line in lines {
        if line.trim_start().starts_with("```") {
            break;
        }
        body.push(line);
    }

    if body.is_empty() {
        return None;
    }

    Some(body.join("\n"))
}

/// A string field that is present and non-empty after trimming.
pub(crate) fn non_empty_str<'a>(value: &'a Value, field: &str) -> Option<&'a str> {
    value
        .get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

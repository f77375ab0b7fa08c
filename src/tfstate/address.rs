use serde_json::Value;

/// Returns true when `key` can appear in an address as a bare `.key` step.
///
/// Bare keys follow Terraform identifier rules: a letter or underscore,
/// then letters, digits, underscores, or dashes. Anything else (dots,
/// slashes, spaces, leading digits) must be bracket-quoted to keep the
/// address unambiguous.
pub fn is_bare_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Address step for descending into an object attribute: `.key` for bare
/// keys, `["key"]` (JSON-escaped) for everything else.
pub fn object_step(key: &str) -> String {
    if is_bare_key(key) {
        format!(".{key}")
    } else {
        format!("[{}]", quote_key(key))
    }
}

/// Address step for descending into an array element: `[0]`, `[1]`, ...
pub fn array_step(position: usize) -> String {
    format!("[{position}]")
}

/// JSON string encoding of `key`, quotes included.
pub fn quote_key(key: &str) -> String {
    Value::String(key.to_string()).to_string()
}

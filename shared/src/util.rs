/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Derive a stable identifier from a display name.
///
/// Lowercases the trimmed name and collapses each whitespace run into a
/// single underscore: `"Paneer  Tikka"` -> `"paneer_tikka"`. Other characters,
/// hyphens included, are kept as they are, so `"Ice-Cream"` -> `"ice-cream"`.
pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

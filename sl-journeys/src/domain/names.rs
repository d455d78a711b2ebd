//! Stop and place name helpers.
//!
//! Upstream names are comma-separated, most specific part first
//! (e.g. "Slussen, Stockholm" or "Storgatan 1, Stockholm").

/// The stop part of a name: text before the first comma, trimmed.
///
/// ```
/// use sl_journeys::domain::short_stop_name;
///
/// assert_eq!(short_stop_name("Slussen, Stockholm"), "Slussen");
/// assert_eq!(short_stop_name(" T-Centralen "), "T-Centralen");
/// ```
pub fn short_stop_name(name: &str) -> &str {
    match name.split_once(',') {
        Some((head, _)) => head.trim(),
        None => name.trim(),
    }
}

/// The place part of a name: the last comma-separated part, trimmed.
///
/// ```
/// use sl_journeys::domain::place_name;
///
/// assert_eq!(place_name("Stockholm, Storgatan 1"), "Storgatan 1");
/// assert_eq!(place_name("Slussen"), "Slussen");
/// ```
pub fn place_name(name: &str) -> &str {
    name.rsplit(',').next().unwrap_or(name).trim()
}

/// Case-insensitive name equality.
///
/// Folds case over the whole of Unicode so "Östermalmstorg" matches
/// "ÖSTERMALMSTORG".
pub fn names_match(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

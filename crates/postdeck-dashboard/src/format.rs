//! Display-only formatting helpers.
//!
//! These sit on top of the aggregator's pure output; nothing here feeds back
//! into counting or windowing logic.

/// Truncate text to at most `max_chars` characters, appending `"..."` only
/// when something was actually cut. Operates on chars, not bytes, so
/// multi-byte content is never split mid-character.
pub fn preview(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

/// Emoji the dashboard shows next to a platform name. Case-insensitive,
/// with a generic phone for anything unrecognized.
pub fn platform_icon(platform: &str) -> &'static str {
    match platform.to_ascii_lowercase().as_str() {
        "instagram" => "📷",
        "tiktok" => "🎵",
        "youtube" => "▶️",
        "facebook" => "👥",
        _ => "📱",
    }
}

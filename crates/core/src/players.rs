//! Player progression constants and profile display derivations.

use crate::types::Timestamp;

/// Experience needed to fill one level.
pub const XP_CEILING: i32 = 172;

/// Shown in place of a timestamp the player row does not have.
pub const UNKNOWN_TIMESTAMP: &str = "Unknown";

/// Render an optional timestamp for display, never propagating an absent value.
pub fn display_timestamp(ts: Option<Timestamp>) -> String {
    match ts {
        Some(ts) => ts.format("%Y-%m-%d %H:%M UTC").to_string(),
        None => UNKNOWN_TIMESTAMP.to_string(),
    }
}

/// Render a date-only value, used by dashboard panels.
pub fn display_date(ts: Timestamp) -> String {
    ts.format("%Y-%m-%d").to_string()
}

/// Build the Discord CDN avatar URL for a user, if they have an avatar hash.
pub fn discord_avatar_url(discord_id: &str, avatar_hash: Option<&str>) -> Option<String> {
    avatar_hash
        .filter(|h| !h.is_empty())
        .map(|h| format!("https://cdn.discordapp.com/avatars/{discord_id}/{h}.png"))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn absent_timestamp_is_unknown() {
        assert_eq!(display_timestamp(None), "Unknown");
    }

    #[test]
    fn present_timestamp_is_formatted() {
        let ts = chrono::Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap();
        assert_eq!(display_timestamp(Some(ts)), "2024-03-09 14:05 UTC");
        assert_eq!(display_date(ts), "2024-03-09");
    }

    #[test]
    fn avatar_url_requires_hash() {
        assert_eq!(discord_avatar_url("42", None), None);
        assert_eq!(discord_avatar_url("42", Some("")), None);
        assert_eq!(
            discord_avatar_url("42", Some("abc")).as_deref(),
            Some("https://cdn.discordapp.com/avatars/42/abc.png")
        );
    }
}

//! Limit/offset clamping shared by every list operation.

/// Default and maximum page size for catalog listings.
pub const CARD_LIST_LIMIT: i64 = 50;

/// Number of rows shown in each dashboard panel.
pub const DASHBOARD_PANEL_SIZE: i64 = 5;

/// Clamp a user-provided limit to the range `[1, max]`.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_defaults_when_absent() {
        assert_eq!(clamp_limit(None, CARD_LIST_LIMIT, CARD_LIST_LIMIT), 50);
    }

    #[test]
    fn limit_is_capped() {
        assert_eq!(clamp_limit(Some(500), 20, CARD_LIST_LIMIT), 50);
    }

    #[test]
    fn limit_floor_is_one() {
        assert_eq!(clamp_limit(Some(0), 20, 50), 1);
        assert_eq!(clamp_limit(Some(-7), 20, 50), 1);
    }

    #[test]
    fn negative_offset_becomes_zero() {
        assert_eq!(clamp_offset(Some(-10)), 0);
        assert_eq!(clamp_offset(None), 0);
        assert_eq!(clamp_offset(Some(100)), 100);
    }
}

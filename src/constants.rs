/// Application-wide constants
/// All magic numbers and constant values should be defined here

/// Margin applied to a post's publish time, in milliseconds (15 minutes).
/// A future-dated post becomes visible once `now > pubDatetime - margin`.
pub const SCHEDULED_POST_MARGIN_MS: i64 = 15 * 60 * 1000;

/// Placeholder href shared by social entries that are not wired up yet
pub const PLACEHOLDER_SOCIAL_HREF: &str = "https://github.com/satnaing/astro-paper";

use crate::site::SITE;
use chrono::{DateTime, Utc};

/// Whether a post with the given publish time should be visible at `now`.
///
/// Future-dated posts become visible slightly early: the scheduled-post
/// margin absorbs clock skew between the build machine and the server, so
/// a post scheduled for 12:00 shows up from 11:45.
pub fn publish_time_passed(pub_datetime: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now > pub_datetime - SITE.scheduled_post_margin()
}

/// Number of listing pages needed for `total_posts`, at the configured
/// posts-per-page count. Zero posts still produce one (empty) page.
pub fn page_count(total_posts: usize) -> usize {
    let per_page = SITE.post_per_page as usize;
    (total_posts.max(1) + per_page - 1) / per_page
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn past_posts_are_visible() {
        let now = Utc::now();
        assert!(publish_time_passed(now - Duration::days(2), now));
    }

    #[test]
    fn posts_inside_the_margin_are_visible() {
        // 10 minutes in the future, margin is 15 minutes
        let now = Utc::now();
        assert!(publish_time_passed(now + Duration::minutes(10), now));
    }

    #[test]
    fn posts_beyond_the_margin_are_hidden() {
        let now = Utc::now();
        assert!(!publish_time_passed(now + Duration::minutes(20), now));
    }

    #[test]
    fn page_count_rounds_up() {
        // postPerPage is 8
        assert_eq!(page_count(0), 1);
        assert_eq!(page_count(1), 1);
        assert_eq!(page_count(8), 1);
        assert_eq!(page_count(9), 2);
        assert_eq!(page_count(17), 3);
    }
}

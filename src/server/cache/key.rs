//! Cache key layout for user lookups.

use std::time::Duration;

/// Prefix shared by every cached page of the user listing.
pub const USERS_PREFIX: &str = "users:";

/// Lifetime of a cached user listing page.
pub const USERS_PAGE_TTL: Duration = Duration::from_secs(10 * 60);

/// Key for a single user, kept until the user is written.
pub fn user(id: &str) -> String {
    format!("user:{}", id)
}

/// Key for one page of the user listing.
pub fn users_page(page: u64, limit: u64) -> String {
    format!("{}{}:{}", USERS_PREFIX, page, limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_keys_share_the_listing_prefix() {
        assert_eq!(users_page(2, 10), "users:2:10");
        assert!(users_page(1, 5).starts_with(USERS_PREFIX));
        assert!(!user("abc").starts_with(USERS_PREFIX));
    }
}

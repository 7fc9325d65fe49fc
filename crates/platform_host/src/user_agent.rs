//! User-agent classification used for the mobile page redirect.

/// Page served to visitors on phones.
pub const MOBILE_PAGE_PATH: &str = "index-mobile.html";

const MOBILE_MARKERS: [&str; 3] = ["mobi", "android", "iphone"];

/// Returns whether `user_agent` looks like a phone browser (case-insensitive match on `Mobi`,
/// `Android`, or `iPhone`).
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let lowered = user_agent.to_ascii_lowercase();
    MOBILE_MARKERS.iter().any(|marker| lowered.contains(marker))
}

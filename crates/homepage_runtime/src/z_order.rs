//! Stacking-order tracking for homepage windows.

use crate::model::WindowRecord;

/// Floor for assigned stacking values; page chrome sits below this.
pub const BASELINE_Z_INDEX: i32 = 20;

/// Returns the stacking value that puts a window above every other window.
///
/// Missing stacking values count as 0. The result is always greater than both
/// [`BASELINE_Z_INDEX`] and the current maximum, so callers must invoke this right before each
/// raise instead of caching it.
pub fn next_z_index(windows: &[WindowRecord]) -> i32 {
    windows
        .iter()
        .map(|w| w.z_index.unwrap_or(0))
        .fold(BASELINE_Z_INDEX, i32::max)
        .saturating_add(1)
}

/// Parses a declared stacking value the way inline styles are read: leading integer digits,
/// optional sign, trailing junk ignored (`"30px"` is 30). Anything else is `None`.
pub fn parse_z_index(raw: &str) -> Option<i32> {
    let trimmed = raw.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['-', '+']));
    let digits_len = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }
    trimmed[..sign_len + digits_len].parse().ok()
}

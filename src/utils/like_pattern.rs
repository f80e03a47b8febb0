//! Helpers for building `LIKE` patterns from user input.

/// Wraps `keyword` in `%` wildcards after escaping the LIKE metacharacters.
///
/// The escape character is MySQL's default backslash, so `50%` only matches a
/// literal percent sign.
///
/// # Examples
///
/// ```
/// use capstone_services::utils::like_pattern::like_pattern;
///
/// assert_eq!(like_pattern("robot"), "%robot%");
/// assert_eq!(like_pattern("50%_off"), r"%50\%\_off%");
/// ```
pub fn like_pattern(keyword: &str) -> String {
    let mut pattern = String::with_capacity(keyword.len() + 2);
    pattern.push('%');

    for ch in keyword.trim().chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }

    pattern.push('%');
    pattern
}

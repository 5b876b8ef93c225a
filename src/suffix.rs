//! Affix removal

/// `s` without a trailing `suffix`, or `s` unchanged when it does not end
/// with it. Only one occurrence is removed.
pub fn removing_suffix<'a>(s: &'a str, suffix: &str) -> &'a str {
    s.strip_suffix(suffix).unwrap_or(s)
}

/// `s` without a leading `prefix`, or `s` unchanged.
pub fn removing_prefix<'a>(s: &'a str, prefix: &str) -> &'a str {
    s.strip_prefix(prefix).unwrap_or(s)
}

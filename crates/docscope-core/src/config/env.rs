#[must_use]
pub(super) fn read_non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[must_use]
pub(super) fn read_env_usize(name: &str, default_value: usize, min_value: usize) -> usize {
    parse_usize_at_least(std::env::var(name).ok().as_deref(), min_value).unwrap_or(default_value)
}

#[must_use]
pub(super) fn parse_usize_at_least(raw: Option<&str>, min_value: usize) -> Option<usize> {
    raw.and_then(|raw| raw.trim().parse::<usize>().ok())
        .filter(|value| *value >= min_value)
}

#[must_use]
pub(super) fn parse_enabled_default_false(raw: Option<&str>) -> bool {
    matches!(
        raw.map(|value| value.trim().to_ascii_lowercase())
            .as_deref(),
        Some("on" | "1" | "true" | "yes")
    )
}

#[cfg(test)]
mod tests {
    use super::{parse_enabled_default_false, parse_usize_at_least};

    #[test]
    fn usize_parser_rejects_values_below_minimum() {
        assert_eq!(parse_usize_at_least(Some(" 7 "), 1), Some(7));
        assert_eq!(parse_usize_at_least(Some("0"), 1), None);
        assert_eq!(parse_usize_at_least(Some("many"), 1), None);
        assert_eq!(parse_usize_at_least(None, 1), None);
    }

    #[test]
    fn boolean_flags_default_to_disabled() {
        assert!(parse_enabled_default_false(Some("TRUE")));
        assert!(parse_enabled_default_false(Some(" on ")));
        assert!(!parse_enabled_default_false(Some("off")));
        assert!(!parse_enabled_default_false(Some("banana")));
        assert!(!parse_enabled_default_false(None));
    }
}

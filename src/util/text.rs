/// Splits a comma-separated symbol list, preserving order.
///
/// Each entry is trimmed and blank entries are dropped, so `"TSLA, ,ROKU,"`
/// yields `["TSLA", "ROKU"]`.
///
/// # Arguments
///
/// * `s`: The comma-separated list as supplied by the caller.
///
/// # Returns
///
/// * `Vec<String>`: The symbols in input order; empty when the list holds no symbol.
pub fn split_symbols(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|symbol| !symbol.is_empty())
        .map(String::from)
        .collect()
}

/// Returns the trimmed value when it is not blank.
pub fn non_blank(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_symbols() {
        assert_eq!(split_symbols("TSLA,ROKU"), vec!["TSLA", "ROKU"]);
        assert_eq!(split_symbols(" msft , aapl "), vec!["msft", "aapl"]);
        assert_eq!(split_symbols("TSLA, ,ROKU,"), vec!["TSLA", "ROKU"]);
        assert!(split_symbols(" , ").is_empty());
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(" ARKK "), Some("ARKK"));
        assert_eq!(non_blank("   "), None);
        assert_eq!(non_blank(""), None);
    }
}

use anyhow::{anyhow, Result};
use scraper::{Html, Selector};

/// Builds a positional selector such as `tr td:nth-child(6)`.
///
/// # Arguments
///
/// * `scope` - The selector of the enclosing rows or list items.
/// * `element` - The element name inside the scope (`td`, `li`, ...).
/// * `position` - The 1-based child position of the element.
///
/// # Examples
///
/// ```
/// let css = nth_child("div:nth-child(4) tbody tr", "td", 2);
/// assert_eq!(css, "div:nth-child(4) tbody tr td:nth-child(2)");
/// ```
pub fn nth_child(scope: &str, element: &str, position: usize) -> String {
    format!("{} {}:nth-child({})", scope.trim(), element, position)
}

/// Parses a CSS selector, keeping the selector text in the error message.
pub fn parse_selector(css_selector: &str) -> Result<Selector> {
    Selector::parse(css_selector)
        .map_err(|why| anyhow!("Failed to Selector::parse({}) because: {:?}", css_selector, why))
}

/// Extracts the text of every element matched by a CSS selector.
///
/// The text of each match is the concatenation of all its descendant text nodes,
/// untrimmed, and the matches are returned in document order.
///
/// # Arguments
///
/// * `document` - The parsed HTML document.
/// * `css_selector` - The CSS selector identifying the cells.
///
/// # Returns
///
/// * `Result<Vec<String>>` - The cell texts; an empty vector when nothing matched.
///   An error is returned only when the selector itself is invalid.
pub fn select_texts(document: &Html, css_selector: &str) -> Result<Vec<String>> {
    let selector = parse_selector(css_selector)?;

    Ok(document
        .select(&selector)
        .map(|element| element.text().collect::<String>())
        .collect())
}

/// Extracts the combined text of all elements matched by a CSS selector, trimmed.
///
/// Returns an empty string when nothing matched.
pub fn select_text(document: &Html, css_selector: &str) -> Result<String> {
    Ok(select_texts(document, css_selector)?.concat().trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "<html><body><table><tbody>\
        <tr><td>a1</td><td>a2</td><td> a3 </td></tr>\
        <tr><td>b1</td><td><span>b</span>2</td><td>b3</td></tr>\
        </tbody></table></body></html>";

    #[test]
    fn test_nth_child() {
        assert_eq!(nth_child("tr", "td", 6), "tr td:nth-child(6)");
        assert_eq!(nth_child(" tbody tr ", "td", 1), "tbody tr td:nth-child(1)");
    }

    #[test]
    fn test_select_texts_in_document_order() {
        let document = Html::parse_document(TABLE);

        let column = select_texts(&document, "tr td:nth-child(2)").expect("valid selector");

        assert_eq!(column, vec!["a2".to_string(), "b2".to_string()]);
    }

    #[test]
    fn test_select_texts_keeps_raw_text() {
        let document = Html::parse_document(TABLE);

        let column = select_texts(&document, "tr td:nth-child(3)").expect("valid selector");

        assert_eq!(column, vec![" a3 ".to_string(), "b3".to_string()]);
    }

    #[test]
    fn test_select_texts_no_match() {
        let document = Html::parse_document(TABLE);

        let column = select_texts(&document, "tr td:nth-child(9)").expect("valid selector");

        assert!(column.is_empty());
    }

    #[test]
    fn test_select_texts_invalid_selector() {
        let document = Html::parse_document(TABLE);

        assert!(select_texts(&document, "tr td:nth-child(").is_err());
    }

    #[test]
    fn test_select_text_trims() {
        let document = Html::parse_document(TABLE);

        assert_eq!(select_text(&document, "tr:nth-child(1) td:nth-child(3)").unwrap(), "a3");
        assert_eq!(select_text(&document, "li").unwrap(), "");
    }
}

/// Removes markup tags from the given text.
///
/// Every tag is replaced by a single space, consecutive whitespace is
/// collapsed and the result is trimmed. The content of an unterminated
/// trailing tag is dropped.
#[must_use]
pub fn strip_html(text: &str) -> String {
    let mut without_tags = String::with_capacity(text.len());
    let mut in_tag = false;
    for c in text.chars() {
        match c {
            '<' => {
                in_tag = true;
                without_tags.push(' ');
            }
            '>' if in_tag => in_tag = false,
            _ if in_tag => {}
            _ => without_tags.push(c),
        }
    }
    without_tags.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncates the given text to at most `max_chars` characters.
///
/// Short text is returned unchanged. Truncated text is trimmed at the end and
/// marked with an ellipsis suffix.
#[must_use]
pub fn trim_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let truncated = text.chars().take(max_chars).collect::<String>();
    format!("{}...", truncated.trim_end())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", "")]
    #[case("plain text", "plain text")]
    #[case("<p>plain text</p>", "plain text")]
    #[case("<p>first</p><p>second</p>", "first second")]
    #[case("a<br/>b", "a b")]
    #[case("  spaced \n out  ", "spaced out")]
    #[case("<a href=\"x\">link</a> end", "link end")]
    #[case("unterminated <tag", "unterminated")]
    #[case("stray > bracket", "stray > bracket")]
    fn test_strip_html(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(strip_html(text), expected);
    }

    #[rstest]
    #[case("", 5, "")]
    #[case("short", 5, "short")]
    #[case("too long", 7, "too lon...")]
    #[case("ends in space", 5, "ends...")]
    #[case("ééééé", 3, "ééé...")]
    fn test_trim_text(#[case] text: &str, #[case] max_chars: usize, #[case] expected: &str) {
        assert_eq!(trim_text(text, max_chars), expected);
    }

    #[test]
    fn test_trim_text_bounds_length() {
        let text = "word ".repeat(100);
        let trimmed = trim_text(&strip_html(&text), 220);
        assert!(trimmed.chars().count() <= 223);
        assert!(trimmed.ends_with("..."));
    }

    #[test]
    fn test_trim_text_no_marker_at_limit() {
        let text = "a".repeat(220);
        assert_eq!(trim_text(&text, 220), text);
    }
}

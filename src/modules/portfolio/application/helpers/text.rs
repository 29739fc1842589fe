use regex::Regex;
use std::sync::LazyLock;

static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n|\|\|").expect("valid paragraph regex"));

/// Splits a delimited cell into trimmed, non-empty items.
pub fn split_list(raw: &str, separator: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }

    raw.split(separator)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn split_list_default(raw: &str) -> Vec<String> {
    split_list(raw, ",")
}

/// Splits free text into paragraphs on line breaks or a literal `||`.
pub fn split_paragraphs(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }

    PARAGRAPH_BREAK
        .split(raw)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_list_trims_and_drops_empties() {
        assert_eq!(
            split_list_default(" SQL, Python ,, Power BI ,"),
            vec!["SQL", "Python", "Power BI"]
        );
    }

    #[test]
    fn split_list_custom_separator() {
        assert_eq!(split_list("a; b;c", ";"), vec!["a", "b", "c"]);
    }

    #[test]
    fn split_list_empty_input() {
        assert!(split_list_default("").is_empty());
        assert!(split_list_default(" , ").is_empty());
    }

    #[test]
    fn split_paragraphs_handles_both_line_endings_and_pipes() {
        let raw = "First.\r\nSecond.\nThird.|| Fourth. \n\n";
        assert_eq!(
            split_paragraphs(raw),
            vec!["First.", "Second.", "Third.", "Fourth."]
        );
    }

    #[test]
    fn split_paragraphs_single_pipe_is_not_a_break() {
        assert_eq!(split_paragraphs("a | b"), vec!["a | b"]);
    }
}

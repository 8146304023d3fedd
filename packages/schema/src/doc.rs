/// Strip comment delimiters and surrounding whitespace from a raw doc comment
///
/// Each line loses leading and trailing runs of `/` and `*`; lines left empty are
/// dropped and the rest are joined with single spaces, so the result always
/// fits on one line. Missing documentation yields an empty string.
pub fn clean_doc(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };

    raw.lines()
        .map(|line| {
            line.trim()
                .trim_start_matches(['/', '*'])
                .trim_end_matches(['/', '*'])
                .trim()
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_doc_is_empty() {
        assert_eq!(clean_doc(None), "");
    }

    #[test]
    fn test_strips_inline_delimiters() {
        assert_eq!(clean_doc(Some("* the user's age *")), "the user's age");
        assert_eq!(clean_doc(Some("/** the user's age */")), "the user's age");
    }

    #[test]
    fn test_joins_javadoc_block() {
        let raw = "/**\n     * Shipping address.\n     * Must be verified.\n     */";
        assert_eq!(clean_doc(Some(raw)), "Shipping address. Must be verified.");
    }

    #[test]
    fn test_keeps_interior_slashes() {
        assert_eq!(
            clean_doc(Some("/** see https://example.com/docs */")),
            "see https://example.com/docs"
        );
    }

    #[test]
    fn test_delimiter_only_doc_is_empty() {
        assert_eq!(clean_doc(Some("/** */")), "");
    }
}

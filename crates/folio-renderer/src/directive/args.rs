//! Directive segment parsing.
//!
//! Splits the pipe-delimited `base | key=value | key=value` syntax carried in
//! image alt text into its display text and key-value segments.

/// Segments parsed from pipe-delimited alt text.
///
/// Segment 0 is the display text, every following segment containing `=` is
/// a key-value pair. Segments without `=` are dropped.
///
/// # Example
///
/// ```
/// use folio_renderer::directive::DirectiveArgs;
///
/// let args = DirectiveArgs::parse("Harbor | scale=80 | caption=At dusk");
/// assert_eq!(args.base, "Harbor");
/// assert_eq!(args.get("scale"), Some("80"));
/// assert_eq!(args.get("caption"), Some("At dusk"));
/// ```
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DirectiveArgs {
    /// Display text from the first segment, trimmed (empty if absent).
    pub base: String,
    /// Key-value segments in source order.
    ///
    /// Keys are matched case-sensitively and are not trimmed internally, so
    /// `scale =80` yields the key `"scale "`.
    pub attrs: Vec<(String, String)>,
}

impl DirectiveArgs {
    /// Parse alt text into display text and key-value segments.
    #[must_use]
    pub fn parse(alt: &str) -> Self {
        let mut segments = alt.split('|').map(str::trim);

        let base = segments.next().unwrap_or_default().to_owned();
        let attrs = segments
            .filter_map(|segment| {
                let (key, value) = segment.split_once('=')?;
                Some((key.to_owned(), value.trim().to_owned()))
            })
            .collect();

        Self { base, attrs }
    }

    /// Get the value of the last segment with the given key.
    ///
    /// Later segments override earlier ones.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Reconstruct the pipe-delimited syntax `base | key=value | ...`.
    ///
    /// # Example
    ///
    /// ```
    /// use folio_renderer::directive::DirectiveArgs;
    ///
    /// let args = DirectiveArgs::parse("Pic|scale=50 |  align=left");
    /// assert_eq!(args.to_syntax(), "Pic | scale=50 | align=left");
    /// ```
    #[must_use]
    pub fn to_syntax(&self) -> String {
        let mut result = self.base.clone();
        for (key, value) in &self.attrs {
            result.push_str(" | ");
            result.push_str(key);
            result.push('=');
            result.push_str(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_alt() {
        let args = DirectiveArgs::parse("");
        assert_eq!(args.base, "");
        assert!(args.attrs.is_empty());
    }

    #[test]
    fn test_base_only() {
        let args = DirectiveArgs::parse("  Sunset over the bay ");
        assert_eq!(args.base, "Sunset over the bay");
        assert!(args.attrs.is_empty());
    }

    #[test]
    fn test_segments_trimmed() {
        let args = DirectiveArgs::parse("X |   scale=40   |caption=  two words  ");
        assert_eq!(args.base, "X");
        assert_eq!(args.get("scale"), Some("40"));
        assert_eq!(args.get("caption"), Some("two words"));
    }

    #[test]
    fn test_empty_base_with_attrs() {
        let args = DirectiveArgs::parse(" | align=right");
        assert_eq!(args.base, "");
        assert_eq!(args.get("align"), Some("right"));
    }

    #[test]
    fn test_segment_without_equals_dropped() {
        let args = DirectiveArgs::parse("X | shadow | scale=20");
        assert_eq!(args.attrs, vec![("scale".to_owned(), "20".to_owned())]);
    }

    #[test]
    fn test_value_keeps_later_equals() {
        let args = DirectiveArgs::parse("X | caption=a=b");
        assert_eq!(args.get("caption"), Some("a=b"));
    }

    #[test]
    fn test_empty_value() {
        let args = DirectiveArgs::parse("X | caption=");
        assert_eq!(args.get("caption"), Some(""));
    }

    #[test]
    fn test_last_segment_wins() {
        let args = DirectiveArgs::parse("X | scale=20 | scale=70");
        assert_eq!(args.get("scale"), Some("70"));
    }

    #[test]
    fn test_keys_case_sensitive() {
        let args = DirectiveArgs::parse("X | Scale=20");
        assert_eq!(args.get("scale"), None);
        assert_eq!(args.get("Scale"), Some("20"));
    }

    #[test]
    fn test_key_whitespace_not_trimmed() {
        let args = DirectiveArgs::parse("X | scale =20");
        assert_eq!(args.get("scale"), None);
    }

    #[test]
    fn test_get_nonexistent() {
        let args = DirectiveArgs::parse("X | align=left");
        assert_eq!(args.get("caption"), None);
    }

    #[test]
    fn test_to_syntax_base_only() {
        assert_eq!(DirectiveArgs::parse("X").to_syntax(), "X");
    }

    #[test]
    fn test_to_syntax_normalizes_spacing() {
        let args = DirectiveArgs::parse("X|scale=10|caption=c");
        assert_eq!(args.to_syntax(), "X | scale=10 | caption=c");
    }
}

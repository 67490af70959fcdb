//! Inline emphasis markup in line text: `**strong**` and `` `code` ``.
//!
//! Renderers style the spans; the player itself never looks inside text.

/// How a span should be emphasised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanStyle {
    /// Unstyled text.
    Plain,
    /// `**strong**`
    Strong,
    /// `` `code` ``
    Code,
}

/// A run of text with one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Emphasis for the run.
    pub style: SpanStyle,
    /// The text, with markers stripped.
    pub text: String,
}

impl Span {
    fn new(style: SpanStyle, text: String) -> Self {
        Self { style, text }
    }
}

/// Split `text` into styled spans.
///
/// An unterminated marker styles everything up to the end of the text.
/// Empty input yields no spans.
#[must_use]
pub fn parse(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut chars = text.char_indices().peekable();
    let mut current = String::new();

    while let Some((i, c)) = chars.next() {
        match c {
            '*' if text[i..].starts_with("**") => {
                if !current.is_empty() {
                    spans.push(Span::new(SpanStyle::Plain, std::mem::take(&mut current)));
                }
                chars.next();
                let mut strong = String::new();
                while let Some((j, sc)) = chars.next() {
                    if sc == '*' && text[j..].starts_with("**") {
                        chars.next();
                        break;
                    }
                    strong.push(sc);
                }
                if !strong.is_empty() {
                    spans.push(Span::new(SpanStyle::Strong, strong));
                }
            },
            '`' => {
                if !current.is_empty() {
                    spans.push(Span::new(SpanStyle::Plain, std::mem::take(&mut current)));
                }
                let mut code = String::new();
                for (_, cc) in chars.by_ref() {
                    if cc == '`' {
                        break;
                    }
                    code.push(cc);
                }
                if !code.is_empty() {
                    spans.push(Span::new(SpanStyle::Code, code));
                }
            },
            _ => current.push(c),
        }
    }

    if !current.is_empty() {
        spans.push(Span::new(SpanStyle::Plain, current));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn styles(text: &str) -> Vec<(SpanStyle, String)> {
        parse(text).into_iter().map(|s| (s.style, s.text)).collect()
    }

    #[test]
    fn test_plain_only() {
        assert_eq!(
            styles("Found 3 results"),
            vec![(SpanStyle::Plain, "Found 3 results".to_owned())]
        );
    }

    #[test]
    fn test_strong_and_code() {
        assert_eq!(
            styles("Net IRR: **18.3%** in `NAV.xlsx`"),
            vec![
                (SpanStyle::Plain, "Net IRR: ".to_owned()),
                (SpanStyle::Strong, "18.3%".to_owned()),
                (SpanStyle::Plain, " in ".to_owned()),
                (SpanStyle::Code, "NAV.xlsx".to_owned()),
            ]
        );
    }

    #[test]
    fn test_unterminated_strong_runs_to_end() {
        assert_eq!(
            styles("a **b c"),
            vec![
                (SpanStyle::Plain, "a ".to_owned()),
                (SpanStyle::Strong, "b c".to_owned()),
            ]
        );
    }

    #[test]
    fn test_single_star_is_plain() {
        assert_eq!(styles("unit #, *"), vec![(SpanStyle::Plain, "unit #, *".to_owned())]);
    }

    #[test]
    fn test_multibyte_text() {
        let plain: String = parse("↳ **LPA** — p.34, §4.2(b)")
            .into_iter()
            .map(|s| s.text)
            .collect();
        assert_eq!(plain, "↳ LPA — p.34, §4.2(b)");
    }

    #[test]
    fn test_empty() {
        assert!(parse("").is_empty());
        assert!(parse("****").is_empty());
    }
}

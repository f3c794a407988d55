//! Minimal markup for AI-generated prose: `**bold**` and line breaks.
//!
//! Text is split into segments rendered as DOM nodes, never injected as HTML.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Bold(String),
    LineBreak,
}

pub fn segments(text: &str) -> Vec<Segment> {
    let mut out = Vec::new();
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push(Segment::LineBreak);
        }
        push_line(line, &mut out);
    }
    out
}

/// Bold spans never cross a line break.
fn push_line(line: &str, out: &mut Vec<Segment>) {
    let mut rest = line;
    while let Some(open) = rest.find("**") {
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("**") else {
            break;
        };
        if open > 0 {
            out.push(Segment::Plain(rest[..open].to_string()));
        }
        out.push(Segment::Bold(after_open[..close].to_string()));
        rest = &after_open[close + 2..];
    }
    if !rest.is_empty() {
        out.push(Segment::Plain(rest.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_and_breaks() {
        assert_eq!(
            segments("Tax **payable**: ₦0\nNext"),
            vec![
                Segment::Plain("Tax ".into()),
                Segment::Bold("payable".into()),
                Segment::Plain(": ₦0".into()),
                Segment::LineBreak,
                Segment::Plain("Next".into()),
            ]
        );
    }

    #[test]
    fn test_unclosed_marker_stays_literal() {
        assert_eq!(
            segments("**Reliefs** and **pension"),
            vec![
                Segment::Bold("Reliefs".into()),
                Segment::Plain(" and **pension".into()),
            ]
        );
    }

    #[test]
    fn test_bold_does_not_span_lines() {
        assert_eq!(
            segments("**a\nb**"),
            vec![
                Segment::Plain("**a".into()),
                Segment::LineBreak,
                Segment::Plain("b**".into()),
            ]
        );
        assert!(segments("").is_empty());
    }
}

//! Backend-independent styled text.
//!
//! Text is a list of logical lines, each a list of spans tagged with a semantic
//! role. Renderers decide what a role looks like.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Plain,
    /// Parameter names.
    Emphasis,
    /// Type / required annotations.
    Secondary,
    /// Headers that call out a constraint, e.g. "Available Choices".
    Alert,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::Plain)
    }
}

/// One logical line. Span text may contain `\n` continuations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledLine {
    pub spans: Vec<Span>,
}

impl StyledLine {
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    pub fn plain(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledText {
    lines: Vec<StyledLine>,
}

impl StyledText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, line: StyledLine) {
        self.lines.push(line);
    }

    pub fn append(&mut self, other: StyledText) {
        self.lines.extend(other.lines);
    }

    pub fn lines(&self) -> &[StyledLine] {
        &self.lines
    }

    /// Number of logical lines (continuations inside a line are not counted).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Unstyled text, every logical line terminated by `\n`.
    pub fn plain(&self) -> String {
        let mut out = String::new();
        for line in self.lines() {
            out.push_str(&line.plain());
            out.push('\n');
        }
        out
    }

    /// Split logical lines at embedded `\n` into rows as they appear on screen.
    /// Each piece keeps the style of the span it came from; empty pieces are dropped.
    pub fn visual_rows(&self) -> Vec<Vec<Span>> {
        let mut rows = Vec::new();
        for line in self.lines() {
            let mut row: Vec<Span> = Vec::new();
            for span in &line.spans {
                let mut pieces = span.text.split('\n');
                if let Some(first) = pieces.next() {
                    push_piece(&mut row, first, span.style);
                }
                for piece in pieces {
                    rows.push(std::mem::take(&mut row));
                    push_piece(&mut row, piece, span.style);
                }
            }
            rows.push(row);
        }
        rows
    }
}

fn push_piece(row: &mut Vec<Span>, text: &str, style: Style) {
    if !text.is_empty() {
        row.push(Span::new(text, style));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> StyledText {
        let mut text = StyledText::new();
        text.push_line(StyledLine::new(vec![
            Span::plain("|- "),
            Span::new("mode", Style::Emphasis),
        ]));
        text.push_line(StyledLine::new(vec![Span::plain("    - fast\n    - slow")]));
        text
    }

    #[test]
    fn plain_terminates_every_line() {
        assert_eq!(sample().plain(), "|- mode\n    - fast\n    - slow\n");
        assert_eq!(StyledText::new().plain(), "");
    }

    #[test]
    fn continuations_are_one_logical_line() {
        let text = sample();
        assert_eq!(text.line_count(), 2);
        assert_eq!(text.visual_rows().len(), 3);
    }

    #[test]
    fn visual_rows_keep_span_styles() {
        let mut text = StyledText::new();
        text.push_line(StyledLine::new(vec![
            Span::plain("a\n  "),
            Span::new("Alert", Style::Alert),
        ]));
        assert_eq!(
            text.visual_rows(),
            vec![
                vec![Span::plain("a")],
                vec![Span::plain("  "), Span::new("Alert", Style::Alert)],
            ]
        );
    }

    #[test]
    fn append_keeps_order() {
        let mut text = sample();
        text.append(sample());
        assert_eq!(text.line_count(), 4);
        assert_eq!(text.lines()[2].plain(), "|- mode");
    }
}

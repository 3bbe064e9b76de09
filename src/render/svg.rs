use crate::Result;
use crate::render::{StyledTextRenderer, Theme};
use crate::styled::{Span, StyledText};

/// Layout knobs for the SVG output.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgOptions {
    pub font_size: f64,
    /// The image is never narrower than this many character cells.
    pub min_columns: usize,
    pub theme: Theme,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            min_columns: 80,
            theme: Theme::default(),
        }
    }
}

impl SvgOptions {
    fn char_width(&self) -> f64 {
        self.font_size * 0.61
    }

    fn line_height(&self) -> f64 {
        self.font_size * 1.22
    }
}

const PAD_X: f64 = 20.0;
const HEADER: f64 = 46.0;
const PAD_BOTTOM: f64 = 18.0;

/// Renders styled text as a terminal-window style SVG document.
#[derive(Debug, Clone, Default)]
pub struct SvgRenderer {
    options: SvgOptions,
}

impl SvgRenderer {
    pub fn new(options: SvgOptions) -> Self {
        Self { options }
    }
}

impl StyledTextRenderer for SvgRenderer {
    fn render(&self, text: &StyledText, title: &str) -> Result<String> {
        Ok(render_svg(text, title, &self.options))
    }
}

/// Render a self-contained SVG (styles embedded).
///
/// Like the HTML report, the template is filled with `replace` rather than
/// `format!()`: the stylesheet and markup are full of braces.
pub fn render_svg(text: &StyledText, title: &str, options: &SvgOptions) -> String {
    const TEMPLATE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="__WIDTH__" height="__HEIGHT__" viewBox="0 0 __WIDTH__ __HEIGHT__">
  <style>__STYLE__  </style>
  <rect x="1" y="1" rx="8" ry="8" width="__FRAME_W__" height="__FRAME_H__" fill="__BG__" stroke="__FRAME__" stroke-width="1"/>
  <g transform="translate(26,22)">
    <circle cx="0" cy="0" r="7" fill="__BTN0__"/>
    <circle cx="22" cy="0" r="7" fill="__BTN1__"/>
    <circle cx="44" cy="0" r="7" fill="__BTN2__"/>
  </g>
  <text class="title" x="__TITLE_X__" y="27" text-anchor="middle">__TITLE__</text>
  <g>
__ROWS__  </g>
</svg>
"#;

    let rows = text.visual_rows();
    let columns = rows
        .iter()
        .map(|row| row.iter().map(|s| s.text.chars().count()).sum::<usize>())
        .max()
        .unwrap_or(0)
        .max(options.min_columns);

    let width = (PAD_X * 2.0 + columns as f64 * options.char_width()).ceil();
    let height = (HEADER + rows.len() as f64 * options.line_height() + PAD_BOTTOM).ceil();

    let mut body = String::new();
    for (i, row) in rows.iter().enumerate() {
        let y = HEADER + i as f64 * options.line_height() + options.font_size;
        body.push_str(&format!(
            "    <text class=\"row\" x=\"{PAD_X}\" y=\"{y:.2}\" xml:space=\"preserve\">"
        ));
        for span in row {
            body.push_str(&render_span(span));
        }
        body.push_str("</text>\n");
    }

    let theme = &options.theme;
    TEMPLATE
        .replace("__WIDTH__", &width.to_string())
        .replace("__HEIGHT__", &height.to_string())
        .replace("__FRAME_W__", &(width - 2.0).to_string())
        .replace("__FRAME_H__", &(height - 2.0).to_string())
        .replace("__STYLE__", &theme.stylesheet(options.font_size))
        .replace("__BG__", &theme.background)
        .replace("__FRAME__", &theme.frame)
        .replace("__BTN0__", &theme.buttons[0])
        .replace("__BTN1__", &theme.buttons[1])
        .replace("__BTN2__", &theme.buttons[2])
        .replace("__TITLE_X__", &(width / 2.0).to_string())
        .replace("__TITLE__", &escape_xml(title))
        .replace("__ROWS__", &body)
}

fn render_span(span: &Span) -> String {
    let text = escape_xml(&span.text);
    match Theme::class_name(span.style) {
        Some(class) => format!("<tspan class=\"{class}\">{text}</tspan>"),
        None => format!("<tspan>{text}</tspan>"),
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            // Not allowed anywhere in an XML 1.0 document.
            '\u{0}'..='\u{8}' | '\u{b}' | '\u{c}' | '\u{e}'..='\u{1f}' | '\u{fffe}' | '\u{ffff}' => {
                out.push(char::REPLACEMENT_CHARACTER);
            }
            _ => out.push(c),
        }
    }
    out
}

use crate::styled::Style;

/// Colors for the terminal-window frame and for each text style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub background: String,
    pub frame: String,
    pub foreground: String,
    pub title: String,
    pub emphasis: String,
    pub alert: String,
    /// Close / minimize / zoom dots, left to right.
    pub buttons: [String; 3],
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: "#292929".to_string(),
            frame: "#454545".to_string(),
            foreground: "#c5c8c6".to_string(),
            title: "#c5c8c6".to_string(),
            emphasis: "#5f87ff".to_string(),
            alert: "#ff5f5f".to_string(),
            buttons: [
                "#ff5f57".to_string(),
                "#febc2e".to_string(),
                "#28c840".to_string(),
            ],
        }
    }
}

impl Theme {
    /// CSS class for a style; plain text uses the row's default class only.
    pub fn class_name(style: Style) -> Option<&'static str> {
        match style {
            Style::Plain => None,
            Style::Emphasis => Some("emphasis"),
            Style::Secondary => Some("secondary"),
            Style::Alert => Some("alert"),
        }
    }

    /// Stylesheet for the rows. Built with `replace` since CSS is full of braces.
    pub fn stylesheet(&self, font_size: f64) -> String {
        const CSS: &str = r#"
    .row { font-family: "Fira Code", Menlo, Consolas, "DejaVu Sans Mono", monospace; font-size: __SIZE__px; fill: __FG__; }
    .title { font-family: Arial, sans-serif; font-size: __SIZE__px; fill: __TITLE__; }
    .emphasis { font-weight: bold; fill: __EMPHASIS__; }
    .secondary { font-style: italic; }
    .alert { font-weight: bold; fill: __ALERT__; }
"#;

        CSS.replace("__SIZE__", &font_size.to_string())
            .replace("__FG__", &self.foreground)
            .replace("__TITLE__", &self.title)
            .replace("__EMPHASIS__", &self.emphasis)
            .replace("__ALERT__", &self.alert)
    }
}

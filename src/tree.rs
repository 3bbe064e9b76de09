//! Parameter tree -> styled text tree.
//!
//! Output for one parameter at depth d (indent = 4*d spaces):
//!
//! ```text
//! |- name: description (Type: str, Required: True)
//!     Available Choices
//!     - fast
//!     - slow
//! ```
//!
//! Children under `options` follow their parent at depth d+1.

use crate::spec::{Parameter, ParameterTree};
use crate::styled::{Span, Style, StyledLine, StyledText};

const INDENT: &str = "    ";

/// Build the styled tree for `parameters`, rendered at `depth` (0 for the root).
///
/// Parameters appear in document order; each block, including its nested
/// options, is complete before the next sibling starts.
pub fn build_tree(parameters: &ParameterTree, depth: usize) -> StyledText {
    let mut text = StyledText::new();
    let indent = INDENT.repeat(depth);

    for param in parameters.iter() {
        text.push_line(parameter_line(param, &indent));

        if let Some(choices) = &param.choices {
            text.push_line(StyledLine::new(vec![
                Span::plain(format!("{indent}{INDENT}")),
                Span::new("Available Choices", Style::Alert),
            ]));

            let separator = format!("\n{indent}{INDENT}- ");
            let listed = choices
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(&separator);
            text.push_line(StyledLine::new(vec![Span::plain(format!(
                "{indent}{INDENT}- {listed}"
            ))]));
        }

        if let Some(children) = param.node.children() {
            text.append(build_tree(children, depth + 1));
        }
    }

    text
}

fn parameter_line(param: &Parameter, indent: &str) -> StyledLine {
    StyledLine::new(vec![
        Span::plain(format!("{indent}|- ")),
        Span::new(param.name.as_str(), Style::Emphasis),
        Span::plain(format!(": {} ", param.description)),
        Span::new(
            format!("(Type: {}, Required: {})", param.kind, param.required),
            Style::Secondary,
        ),
    ])
}

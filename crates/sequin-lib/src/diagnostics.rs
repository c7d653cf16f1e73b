//! Rendering errors against their source text.
//!
//! Errors that carry a span are shown as an annotated snippet pointing at
//! the offending token; everything else renders as a one-line report.

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};

use crate::Error;

/// Plain (uncolored) rendering.
pub fn render(error: &Error, source: &str) -> String {
    render_colored(error, source, false)
}

pub fn render_colored(error: &Error, source: &str, colored: bool) -> String {
    let renderer = if colored {
        Renderer::styled()
    } else {
        Renderer::plain()
    };
    let message = error.to_string();

    let report: Vec<Group> = match error {
        Error::Syntax { span, .. } => {
            let range = adjust_range(span.clone(), source.len());
            let snippet = Snippet::source(source).line_start(1).annotation(
                AnnotationKind::Primary
                    .span(range)
                    .label(&message),
            );
            vec![Level::ERROR.primary_title(&message).element(snippet)]
        }
        _ => vec![Group::with_title(Level::ERROR.primary_title(&message))],
    };

    renderer.render(&report)
}

/// Point spans widen to one character so the caret has something to sit on.
fn adjust_range(range: std::ops::Range<usize>, limit: usize) -> std::ops::Range<usize> {
    if range.start == range.end {
        range.start..(range.start + 1).min(limit)
    } else {
        range
    }
}

//! Pretty error reporting using ariadne.
//!
//! Renders a diagnostic with source context. Used by the CLI in batch mode;
//! the plain `error: <line>:<col>: <message>` line on stderr remains the
//! contract, this is supplementary.

use ariadne::{Color, Label, Report, ReportKind, Source};

use crate::lexer::Span;

/// Report a single error with source context.
pub fn report_error(filename: &str, source: &str, span: Span, message: &str) {
    let offset = span.start.min(source.len());
    let end = span.end.clamp(offset, source.len());

    let _ = Report::build(ReportKind::Error, filename, offset)
        .with_message(message)
        .with_label(
            Label::new((filename, offset..end))
                .with_message(message)
                .with_color(Color::Red),
        )
        .finish()
        .eprint((filename, Source::from(source)));
}

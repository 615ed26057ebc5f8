use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for JsonSmith codegen operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to parse JSON input")]
    #[diagnostic(code(jsonsmith::invalid_json))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("syntax error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot derive a class from this JSON: {reason}")]
    #[diagnostic(
        code(jsonsmith::unrenderable_shape),
        help("the document root must be an object, or a non-empty array whose first element is an object")
    )]
    UnrenderableShape {
        #[source_code]
        src: NamedSource<String>,
        reason: String,
    },
}

impl Error {
    /// Create a parse error from a serde_json error, labelling the offending
    /// position in the input.
    pub fn parse(source: serde_json::Error, src: &str) -> Box<Self> {
        let span = span_at(src, source.line(), source.column());
        Box::new(Error::Parse {
            src: NamedSource::new("input.json", src.to_string()),
            span,
            source,
        })
    }

    /// Create an unrenderable-shape error.
    pub fn unrenderable_shape(reason: impl Into<String>, src: &str) -> Box<Self> {
        Box::new(Error::UnrenderableShape {
            src: NamedSource::new("input.json", src.to_string()),
            reason: reason.into(),
        })
    }
}

/// Convert serde_json's 1-based line/column into a one-byte span.
///
/// serde_json reports line 0 for errors with no position information.
fn span_at(src: &str, line: usize, column: usize) -> Option<SourceSpan> {
    if line == 0 || src.is_empty() {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let offset = (line_start + column.saturating_sub(1)).min(src.len().saturating_sub(1));
    Some(SourceSpan::from(offset..offset + 1))
}

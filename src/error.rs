use std::ops::Range;
use thiserror::Error;

/// The single failure kind of the normalizer: the input cannot be turned into a function of `x`.
///
/// Where it is known, the byte range of the offending part of the input is kept so front-ends can
/// point at it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExpressionError {
    #[error("expression is empty")]
    Empty,

    #[error("unknown character '{ch}'")]
    UnknownChar { ch: char, span: Range<usize> },

    #[error("invalid number '{text}'")]
    InvalidNumber { text: String, span: Range<usize> },

    #[error("unexpected end of input")]
    UnexpectedEnd,

    #[error("unexpected {found}")]
    UnexpectedToken { found: String, span: Range<usize> },

    #[error("missing closing parenthesis")]
    MissingParen { span: Range<usize> },

    #[error("unknown name '{name}'")]
    UnknownName { name: String, span: Range<usize> },

    #[error("function '{name}' needs an argument list")]
    MissingArguments { name: &'static str, span: Range<usize> },

    #[error("{name} takes {expected} argument(s), got {got}")]
    Arity {
        name: &'static str,
        expected: &'static str,
        got: usize,
        span: Range<usize>,
    },

    #[error("expression is nested too deeply")]
    TooDeep { span: Range<usize> },
}

impl ExpressionError {
    /// The region of the input this error points at, if any.
    pub fn span(&self) -> Option<Range<usize>> {
        match self {
            ExpressionError::Empty | ExpressionError::UnexpectedEnd => None,
            ExpressionError::UnknownChar { span, .. }
            | ExpressionError::InvalidNumber { span, .. }
            | ExpressionError::UnexpectedToken { span, .. }
            | ExpressionError::MissingParen { span }
            | ExpressionError::TooDeep { span }
            | ExpressionError::UnknownName { span, .. }
            | ExpressionError::MissingArguments { span, .. }
            | ExpressionError::Arity { span, .. } => Some(span.clone()),
        }
    }
}

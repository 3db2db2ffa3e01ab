//! Pattern-parser error taxonomy (`spec.md` §7: `ParseError{span, kind}`).

use crate::span::Span;

#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("unmatched '{{' at {span:?}")]
    UnmatchedOpenBrace { span: Span },
    #[error("unmatched '}}' at {span:?}")]
    UnmatchedCloseBrace { span: Span },
    #[error("unterminated quoted span starting at {span:?}")]
    UnterminatedQuote { span: Span },
    #[error("unterminated tag <{name}> at {span:?}")]
    UnterminatedTag { name: String, span: Span },
    #[error("empty argument name at {span:?}")]
    EmptyArgumentName { span: Span },
    #[error("plural/ordinal/select block at {span:?} is missing an `other` case")]
    MissingOtherCase { span: Span },
    #[error("malformed plural offset {text:?} at {span:?}")]
    MalformedOffset { text: String, span: Span },
    #[error("malformed case key {text:?} at {span:?}")]
    MalformedCaseKey { text: String, span: Span },
    #[error("malformed number skeleton at {span:?}: {source}")]
    MalformedNumberSkeleton {
        span: Span,
        #[source]
        source: msgfmt_number::NumberError,
    },
    #[error("malformed datetime skeleton at {span:?}: {source}")]
    MalformedDateTimeSkeleton {
        span: Span,
        #[source]
        source: msgfmt_datetime::DateTimeError,
    },
    #[error("unexpected end of pattern while parsing {context} starting at {span:?}")]
    UnexpectedEnd { context: String, span: Span },
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnmatchedOpenBrace { span }
            | ParseError::UnmatchedCloseBrace { span }
            | ParseError::UnterminatedQuote { span }
            | ParseError::UnterminatedTag { span, .. }
            | ParseError::EmptyArgumentName { span }
            | ParseError::MissingOtherCase { span }
            | ParseError::MalformedOffset { span, .. }
            | ParseError::MalformedCaseKey { span, .. }
            | ParseError::MalformedNumberSkeleton { span, .. }
            | ParseError::MalformedDateTimeSkeleton { span, .. }
            | ParseError::UnexpectedEnd { span, .. } => *span,
        }
    }
}

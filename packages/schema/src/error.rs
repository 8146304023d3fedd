use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors produced while parsing a type expression such as `java.util.List<User>[]`
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Unexpected token at {pos}: expected {expected}, found {found}")]
    UnexpectedToken {
        pos: usize,
        expected: String,
        found: String,
    },

    #[error("Unexpected end of input at {pos}")]
    UnexpectedEof { pos: usize },

    #[error("Lexer error at {pos}")]
    LexerError { pos: usize },

    #[error("Type nested deeper than {limit} levels at {pos}")]
    NestingTooDeep { pos: usize, limit: usize },
}

impl ParseError {
    pub fn unexpected_token(pos: usize, expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::UnexpectedToken {
            pos,
            expected: expected.into(),
            found: found.into(),
        }
    }

    pub fn unexpected_eof(pos: usize) -> Self {
        Self::UnexpectedEof { pos }
    }

    pub fn lexer_error(pos: usize) -> Self {
        Self::LexerError { pos }
    }

    pub fn nesting_too_deep(pos: usize, limit: usize) -> Self {
        Self::NestingTooDeep { pos, limit }
    }

    /// Byte offset into the type expression where the error occurred
    pub fn pos(&self) -> usize {
        match self {
            ParseError::UnexpectedToken { pos, .. }
            | ParseError::UnexpectedEof { pos }
            | ParseError::LexerError { pos }
            | ParseError::NestingTooDeep { pos, .. } => *pos,
        }
    }
}

/// Errors produced while loading a schema document into a type model
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid type expression '{expression}' in {location}: {error}")]
    InvalidType {
        location: String,
        expression: String,
        #[source]
        error: ParseError,
    },

    #[error("Malformed schema document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

use std::fmt::{Display, Formatter};

pub type Result<T> = std::result::Result<T, SyntaxError>;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum InnerSyntaxError {
    InvalidStatement(String),
    ExpectedType(String),
    ExpectedIdentifier(String),
    ExpectedButGot(&'static str, String),
    UnexpectedToken(String),
    UnexpectedEof(&'static str),
    MissingClosingBrace,
    BadNumber(String),
}

/// [`InnerSyntaxError`] anchored to a source position. Errors raised after
/// the token stream ran out keep only the last seen line; the column is
/// already gone at that point.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SyntaxError {
    pub inner: InnerSyntaxError,
    pub line: u64,
    pub col: Option<u64>,
}

impl InnerSyntaxError {
    pub fn set_pos(self, line: u64, col: u64) -> SyntaxError {
        SyntaxError {
            inner: self,
            line,
            col: Some(col),
        }
    }

    pub fn set_line(self, line: u64) -> SyntaxError {
        SyntaxError {
            inner: self,
            line,
            col: None,
        }
    }
}

impl Display for SyntaxError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.col {
            Some(col) => write!(f, "line {}, column {col}: {}", self.line, self.inner),
            None => write!(f, "line {}: {}", self.line, self.inner),
        }
    }
}

impl Display for InnerSyntaxError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        use InnerSyntaxError as SE;
        match self {
            SE::InvalidStatement(t) => write!(f, "invalid statement, unexpected token '{t}'"),
            SE::ExpectedType(t) => write!(f, "expected a valid type, but got '{t}'"),
            SE::ExpectedIdentifier(t) => write!(f, "expected an identifier, but got '{t}'"),
            SE::ExpectedButGot(expected, got) => {
                write!(f, "expected {expected}, but got '{got}'")
            }
            SE::UnexpectedToken(t) => write!(f, "unexpected token '{t}' in expression"),
            SE::UnexpectedEof(expected) => {
                write!(f, "expected {expected}, but ran out of input")
            }
            SE::MissingClosingBrace => write!(f, "missing closing '}}' in if block"),
            SE::BadNumber(t) => write!(f, "bad numeric literal '{t}'"),
        }
    }
}

impl std::error::Error for SyntaxError {}
impl std::error::Error for InnerSyntaxError {}

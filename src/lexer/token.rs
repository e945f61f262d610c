/// Identifiers matching one of these are re-tagged [`TokenKind::Keyword`].
pub const KEYWORDS: [&str; 10] = [
    "if", "else", "while", "return", "for", "int", "float", "bool", "true", "false",
];

/// Basic token classification
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TokenKind {
    /// double-quoted string literal, escapes allowed
    Str,
    /// single-quoted character literal
    Char,
    /// ==
    Equals,
    /// !=
    NotEqual,
    /// <=
    LessEqual,
    /// >=
    GreaterEqual,
    /// <
    Less,
    /// >
    Greater,
    /// integer or decimal numeric literal
    Number,
    /// any unknown word (variable names, function names, ..)
    Identifier,
    /// one of [`KEYWORDS`]
    Keyword,
    /// one of + - * / =
    Operator,
    /// (
    LParen,
    /// )
    RParen,
    /// {
    LBrace,
    /// }
    RBrace,
    /// ;
    Semicolon,
}

/// Token with its exact source lexeme and 1-based start position.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: u64,
    pub col: u64,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u64, col: u64) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            col,
        }
    }

    #[inline]
    pub fn is_keyword(&self, kw: &str) -> bool {
        self.kind == TokenKind::Keyword && self.text == kw
    }

    #[inline]
    pub fn is_operator(&self, op: &str) -> bool {
        self.kind == TokenKind::Operator && self.text == op
    }

    #[inline]
    pub fn is_comparison(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Equals | TokenKind::NotEqual | TokenKind::Less | TokenKind::Greater
        )
    }
}

impl TryFrom<char> for TokenKind {
    type Error = &'static str;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            ';' => Ok(Self::Semicolon),
            '(' => Ok(Self::LParen),
            ')' => Ok(Self::RParen),
            '{' => Ok(Self::LBrace),
            '}' => Ok(Self::RBrace),
            '+' | '-' | '*' | '/' | '=' => Ok(Self::Operator),
            _ => Err("not a single-character token"),
        }
    }
}

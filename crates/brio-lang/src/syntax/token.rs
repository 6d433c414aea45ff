#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals
    Int(i64),
    Bool(bool),
    Ident(String),
    StringLit(String),

    // Keywords
    Print,
    If,
    Else,
    While,
    For,

    // Type keywords — declarations open with one of these
    TInt,
    TString,
    TBool,

    // Operators
    Plus,    // +
    Minus,   // -
    Star,    // *
    Slash,   // /
    Eq,      // =
    EqEq,    // ==
    BangEq,  // !=
    Lt,      // <
    LtEq,    // <=
    Gt,      // >
    GtEq,    // >=
    AndAnd,  // &&
    OrOr,    // ||
    Bang,    // !

    // Punctuation
    Semicolon, // ;
    Comma,     // ,
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }

    Eof,
}

impl TokenKind {
    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Bool(_) | Self::StringLit(_))
    }

    pub fn is_arithmetic(&self) -> bool {
        matches!(self, Self::Plus | Self::Minus | Self::Star | Self::Slash)
    }

    pub fn is_comparison(&self) -> bool {
        matches!(self, Self::EqEq | Self::BangEq | Self::Lt | Self::LtEq | Self::Gt | Self::GtEq)
    }

    pub fn is_logical(&self) -> bool {
        matches!(self, Self::AndAnd | Self::OrOr | Self::Bang)
    }

    pub fn is_type_keyword(&self) -> bool {
        matches!(self, Self::TInt | Self::TString | Self::TBool)
    }

    pub fn is_keyword(&self) -> bool {
        matches!(self, Self::Print | Self::If | Self::Else | Self::While | Self::For)
    }
}

/// Maps an identifier string to its keyword token, or returns `Ident`.
pub fn keyword_or_ident(s: String) -> TokenKind {
    match s.as_str() {
        "print"  => TokenKind::Print,
        "if"     => TokenKind::If,
        "else"   => TokenKind::Else,
        "while"  => TokenKind::While,
        "for"    => TokenKind::For,
        "int"    => TokenKind::TInt,
        "string" => TokenKind::TString,
        "bool"   => TokenKind::TBool,
        "true"   => TokenKind::Bool(true),
        "false"  => TokenKind::Bool(false),
        _        => TokenKind::Ident(s),
    }
}

// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, line: usize, column: usize) -> Self {
        Self { kind, line, column }
    }
}

/// Error codes prefixed by phase: L = lexer, P = parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    // Lexer
    L001, // unexpected character
    L002, // unterminated string literal
    L003, // invalid escape sequence

    // Parser
    P001, // unexpected token
    P002, // missing expected token
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::L001 => "L001",
            Self::L002 => "L002",
            Self::L003 => "L003",
            Self::P001 => "P001",
            Self::P002 => "P002",
        }
    }
}

/// A compile-phase diagnostic. `compile` collects every one it can find
/// before giving up, so a script with several mistakes reports them all.
#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl Error {
    pub fn new(code: ErrorCode, line: usize, column: usize, message: impl Into<String>) -> Self {
        Self { code, line, column, message: message.into() }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}:{} — {}", self.code.as_str(), self.line, self.column, self.message)
    }
}

// ─────────────────────────────────────────────────────────────────────────────

/// A fault raised during evaluation. All kinds are fatal: the first one
/// unwinds through every enclosing statement and ends the run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    #[error("undeclared variable `{name}` (line {line})")]
    UndeclaredVariable { name: String, line: usize },

    #[error("division by zero (line {line})")]
    DivisionByZero { line: usize },

    /// Evaluator self-consistency fault. No current node form produces it —
    /// the operator enums are closed and matched exhaustively — but drivers
    /// can still match on the complete fault set.
    #[error("internal error: {details}")]
    Internal { details: String },
}

pub mod error;
pub mod runtime;
pub mod syntax;

pub use error::{Error, ErrorCode, RuntimeError};
pub use runtime::interpreter::Interpreter;
pub use runtime::value::Value;
pub use syntax::ast::Program;
pub use syntax::token::{Token, TokenKind};

// ─── Public API ───────────────────────────────────────────────────────────────

/// Parse source text into a statement tree ready for evaluation.
/// All lex and parse diagnostics are collected before giving up.
pub fn compile(source: &str) -> Result<Program, Vec<Error>> {
    let tokens = syntax::lexer::Lexer::new(source).tokenize()?;
    syntax::parser::Parser::new(tokens).parse()
}

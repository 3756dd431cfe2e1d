pub mod tokens;
pub mod eval;
pub mod shell;
pub mod cli;

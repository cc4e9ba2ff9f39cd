// types and terms of the calculus
pub mod syntax;
// string -> positioned tokens
pub mod scanner;
// tokens -> type and term ASTs
pub mod parser;
// typing context and its textual form
pub mod context;
// term AST -> type
pub mod checker;
// error kinds for every stage
pub mod error;
// canonical printable forms
mod printing;

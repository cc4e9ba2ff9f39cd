use std::fmt;

use crate::syntax::Type;

/// An unrecognized character encountered while tokenizing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanError {
    pub message: String,
    pub position: usize,
}

impl ScanError {
    pub fn new(message: impl Into<String>, position: usize) -> Self {
        ScanError {
            message: message.into(),
            position,
        }
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at position {}", self.message, self.position)
    }
}

impl std::error::Error for ScanError {}

/// Tokens that do not match the grammar.
///
/// `position` is the offset of the offending token, or the offset just past
/// the last token when input ended mid-construct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub position: usize,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, position: usize) -> Self {
        SyntaxError {
            message: message.into(),
            position,
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at position {}", self.message, self.position)
    }
}

impl std::error::Error for SyntaxError {}

/// Either failure mode of turning source text into an AST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    Scan(ScanError),
    Syntax(SyntaxError),
}

impl SourceError {
    /// Offset the failure should be reported at.
    pub fn position(&self) -> usize {
        match self {
            SourceError::Scan(err) => err.position,
            SourceError::Syntax(err) => err.position,
        }
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Scan(err) => err.fmt(f),
            SourceError::Syntax(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for SourceError {}

impl From<ScanError> for SourceError {
    fn from(err: ScanError) -> Self {
        SourceError::Scan(err)
    }
}

impl From<SyntaxError> for SourceError {
    fn from(err: SyntaxError) -> Self {
        SourceError::Syntax(err)
    }
}

/// Failure of the checking phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    /// A term variable with no binding in the typing context.
    UnknownVariable { name: String },
    /// The function side of an application is not an implication whose
    /// domain equals the argument's type.
    BadApplication { function: Type, argument: Type },
    /// The target of a type application is not a universal type.
    NotUniversal { target: Type, argument: Type },
}

impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeError::UnknownVariable { name } => {
                write!(f, "'{}' has no type in the given context", name)
            }
            TypeError::BadApplication { function, argument } => {
                write!(f, "type {} cannot be applied to type {}", function, argument)
            }
            TypeError::NotUniversal { target, argument } => {
                write!(
                    f,
                    "type {} is not universal and cannot be instantiated at {}",
                    target, argument
                )
            }
        }
    }
}

impl std::error::Error for TypeError {}

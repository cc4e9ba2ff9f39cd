use std::fmt::Display;

use crate::syntax::{Term, Type};

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Base(name) => write!(f, "{}", name),
            Type::Implication(left, right) => write!(f, "({}->{})", left, right),
            Type::Universal { variable, body } => write!(f, "(forall {}. {})", variable, body),
        }
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Variable(name) => write!(f, "{}", name),
            Term::Abstraction {
                param,
                param_type,
                body,
            } => {
                write!(f, "(lambda {}:{}.{})", param, param_type, body)
            }
            Term::Application { func, arg } => write!(f, "({} {})", func, arg),
            Term::TypeAbstraction { param, body } => {
                write!(f, "(type_lambda {}.{})", param, body)
            }
            Term::TypeApplication { func, arg } => write!(f, "({} [{}])", func, arg),
        }
    }
}

use std::collections::HashMap;

use crate::error::{SourceError, SyntaxError};
use crate::parser;
use crate::syntax::Type;

/// Typing context: term-variable names and their types.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    bindings: HashMap<String, Type>,
}

impl Context {
    pub fn empty() -> Self {
        Context::default()
    }

    pub fn lookup(&self, name: &str) -> Option<&Type> {
        self.bindings.get(name)
    }

    /// A copy of this context with one binding added, shadowing any earlier
    /// binding for `name`. The receiver is left untouched.
    pub fn extend(&self, name: &str, ty: Type) -> Context {
        let mut bindings = self.bindings.clone();
        bindings.insert(name.to_string(), ty);
        Context { bindings }
    }

    /// Parse a context from `name1:type1, name2:type2, ...`.
    ///
    /// The empty string is the empty context. Each type fragment is scanned
    /// and parsed on its own. If a name repeats, the latest binding wins.
    pub fn parse(input: &str) -> Result<Context, SourceError> {
        let mut bindings = HashMap::new();
        if input.trim().is_empty() {
            return Ok(Context { bindings });
        }

        let mut offset = 0;
        for entry in input.split(',') {
            let Some((name, type_source)) = entry.split_once(':') else {
                return Err(SyntaxError::new("Expected a name:type binding", offset).into());
            };
            let ty = parser::parse_type(type_source)?;
            bindings.insert(name.trim().to_string(), ty);
            offset += entry.len() + 1;
        }

        Ok(Context { bindings })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_type;

    fn ty(source: &str) -> Type {
        parse_type(source).unwrap()
    }

    #[test]
    fn the_empty_string_is_the_empty_context() {
        assert_eq!(Context::parse("").unwrap(), Context::empty());
        assert_eq!(Context::parse("  ").unwrap(), Context::empty());
    }

    #[test]
    fn entries_are_trimmed_and_parsed() {
        let context = Context::parse(" x : a->b , y:c ").unwrap();
        assert_eq!(context.lookup("x"), Some(&ty("a->b")));
        assert_eq!(context.lookup("y"), Some(&ty("c")));
    }

    #[test]
    fn repeated_names_take_the_latest_type() {
        let context = Context::parse("x:a, x:b").unwrap();
        assert_eq!(context.lookup("x"), Some(&ty("b")));
    }

    #[test]
    fn an_entry_without_a_colon_is_rejected() {
        assert!(Context::parse("x:a, y").is_err());
    }

    #[test]
    fn extending_returns_a_fresh_context() {
        let parent = Context::empty().extend("x", ty("a"));
        let child = parent.extend("x", ty("b"));
        assert_eq!(parent.lookup("x"), Some(&ty("a")));
        assert_eq!(child.lookup("x"), Some(&ty("b")));
    }
}

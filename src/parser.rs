use crate::error::{SourceError, SyntaxError};
use crate::scanner::{Token, TokenKind, scan};
use crate::syntax::{Term, Type};

/// Parse a complete type from source text.
pub fn parse_type(input: &str) -> Result<Type, SourceError> {
    let tokens = scan(input)?;
    let mut parser = Parser::new(&tokens);
    let ty = parser.parse_type()?;
    parser.finish()?;
    Ok(ty)
}

/// Parse a complete term from source text.
pub fn parse_term(input: &str) -> Result<Term, SourceError> {
    let tokens = scan(input)?;
    let mut parser = Parser::new(&tokens);
    let term = parser.parse_application()?;
    parser.finish()?;
    Ok(term)
}

#[derive(Debug)]
pub struct Parser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token<'a>]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    /// Whether the current token's kind is among `expected`, without
    /// consuming it.
    fn check(&self, expected: &[TokenKind]) -> bool {
        self.peek()
            .is_some_and(|token| expected.contains(&token.kind))
    }

    /// Consume the current token if its kind is among `expected`, else fail
    /// naming what was expected and what was found.
    fn read(&mut self, expected: &[TokenKind]) -> Result<Token<'a>, SyntaxError> {
        match self.peek() {
            Some(&token) if expected.contains(&token.kind) => {
                self.pos += 1;
                Ok(token)
            }
            Some(token) => Err(SyntaxError::new(
                format!(
                    "Expected {}, found {}",
                    describe_kinds(expected),
                    token.describe()
                ),
                token.position,
            )),
            None => Err(SyntaxError::new(
                format!("Expected {}, found end of source", describe_kinds(expected)),
                self.end_position(),
            )),
        }
    }

    // offset just past the last token
    fn end_position(&self) -> usize {
        self.tokens
            .last()
            .map(|token| token.position + token.lexeme.len())
            .unwrap_or(0)
    }

    /// Any token left over after the top-level construct is a syntax error.
    pub fn finish(&self) -> Result<(), SyntaxError> {
        match self.peek() {
            Some(token) => Err(SyntaxError::new("Unknown syntax", token.position)),
            None => Ok(()),
        }
    }

    // primary_type -> <var> | "(" <type> ")" | "forall" <var> "." <type>
    fn parse_primary_type(&mut self) -> Result<Type, SyntaxError> {
        let token = self.read(&[
            TokenKind::Variable,
            TokenKind::BracketOpen,
            TokenKind::Forall,
        ])?;
        match token.kind {
            TokenKind::Variable => Ok(Type::Base(token.lexeme.to_string())),
            TokenKind::BracketOpen => {
                let ty = self.parse_type()?;
                self.read(&[TokenKind::BracketClose])?;
                Ok(ty)
            }
            TokenKind::Forall => {
                let variable = self.read(&[TokenKind::Variable])?;
                self.read(&[TokenKind::Dot])?;
                let body = self.parse_type()?;
                Ok(Type::Universal {
                    variable: variable.lexeme.to_string(),
                    body: Box::new(body),
                })
            }
            _ => unreachable!("read only yields the expected kinds"),
        }
    }

    // type -> <primary_type> ("->" <type>)?
    // a -> b -> c is parsed as a -> (b -> c)
    pub fn parse_type(&mut self) -> Result<Type, SyntaxError> {
        let left = self.parse_primary_type()?;
        if !self.check(&[TokenKind::Arrow]) {
            return Ok(left);
        }
        self.read(&[TokenKind::Arrow])?;
        let right = self.parse_type()?;
        Ok(Type::Implication(Box::new(left), Box::new(right)))
    }

    // abstraction -> "lambda" <var> ":" <type> "." <application>
    fn parse_abstraction(&mut self) -> Result<Term, SyntaxError> {
        self.read(&[TokenKind::Lambda])?;
        let param = self.read(&[TokenKind::Variable])?;
        self.read(&[TokenKind::Colon])?;
        let param_type = self.parse_type()?;
        self.read(&[TokenKind::Dot])?;
        let body = self.parse_application()?;
        Ok(Term::Abstraction {
            param: param.lexeme.to_string(),
            param_type,
            body: Box::new(body),
        })
    }

    // type_abs -> "type_lambda" <var> "." <application>
    fn parse_type_abstraction(&mut self) -> Result<Term, SyntaxError> {
        self.read(&[TokenKind::TypeLambda])?;
        let param = self.read(&[TokenKind::Variable])?;
        self.read(&[TokenKind::Dot])?;
        let body = self.parse_application()?;
        Ok(Term::TypeAbstraction {
            param: param.lexeme.to_string(),
            body: Box::new(body),
        })
    }

    // primary_term -> <var> | "(" <application> ")" | <abstraction> | <type_abs>
    fn parse_primary_term(&mut self) -> Result<Term, SyntaxError> {
        match self.peek().map(|token| token.kind) {
            Some(TokenKind::Lambda) => self.parse_abstraction(),
            Some(TokenKind::TypeLambda) => self.parse_type_abstraction(),
            _ => {
                let token = self.read(&[
                    TokenKind::Variable,
                    TokenKind::BracketOpen,
                    TokenKind::Lambda,
                    TokenKind::TypeLambda,
                ])?;
                match token.kind {
                    TokenKind::Variable => Ok(Term::Variable(token.lexeme.to_string())),
                    TokenKind::BracketOpen => {
                        let term = self.parse_application()?;
                        self.read(&[TokenKind::BracketClose])?;
                        Ok(term)
                    }
                    _ => unreachable!("lambda forms are handled above"),
                }
            }
        }
    }

    // application -> <primary_term> (<primary_term> | "[" <type> "]")*
    // a b c is parsed as (a b) c; e [T] binds like ordinary application
    pub fn parse_application(&mut self) -> Result<Term, SyntaxError> {
        let mut term = self.parse_primary_term()?;
        loop {
            if self.check(&[
                TokenKind::Variable,
                TokenKind::BracketOpen,
                TokenKind::Lambda,
                TokenKind::TypeLambda,
            ]) {
                let arg = self.parse_primary_term()?;
                term = Term::Application {
                    func: Box::new(term),
                    arg: Box::new(arg),
                };
            } else if self.check(&[TokenKind::SqBracketOpen]) {
                self.read(&[TokenKind::SqBracketOpen])?;
                let arg = self.parse_type()?;
                self.read(&[TokenKind::SqBracketClose])?;
                term = Term::TypeApplication {
                    func: Box::new(term),
                    arg,
                };
            } else {
                return Ok(term);
            }
        }
    }
}

fn describe_kinds(kinds: &[TokenKind]) -> String {
    match kinds {
        [kind] => kind.describe().to_string(),
        _ => {
            let described: Vec<&str> = kinds.iter().map(|kind| kind.describe()).collect();
            format!("one of {}", described.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bracketed_types_only_group() {
        assert_eq!(
            parse_type("(((((a))->((b)->c)))").unwrap_err().position(),
            20
        );
        assert_eq!(
            parse_type("(((((a))->((b)->c))))").unwrap(),
            parse_type("a->(b->c)").unwrap()
        );
    }

    #[test]
    fn read_names_the_expected_and_found_tokens() {
        match parse_term("lambda x a").unwrap_err() {
            SourceError::Syntax(err) => {
                assert_eq!(err.position, 9);
                assert!(err.message.contains("':'"), "{}", err.message);
                assert!(err.message.contains("'a'"), "{}", err.message);
            }
            other => panic!("expected a syntax error, got {other:?}"),
        }
    }

    #[test]
    fn running_out_of_tokens_is_reported_past_the_source() {
        match parse_term("lambda x:a.").unwrap_err() {
            SourceError::Syntax(err) => {
                assert_eq!(err.position, 11);
                assert!(err.message.contains("end of source"), "{}", err.message);
            }
            other => panic!("expected a syntax error, got {other:?}"),
        }
    }

    #[test]
    fn leftover_tokens_are_rejected() {
        match parse_type("a b").unwrap_err() {
            SourceError::Syntax(err) => {
                assert_eq!(err.message, "Unknown syntax");
                assert_eq!(err.position, 2);
            }
            other => panic!("expected a syntax error, got {other:?}"),
        }
    }
}

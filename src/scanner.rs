use logos::Logos;

use crate::error::ScanError;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\n]+")]
pub enum TokenKind {
    #[token("lambda")]
    Lambda,
    #[token("type_lambda")]
    TypeLambda,
    #[token("forall")]
    Forall,
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,
    #[token("(")]
    BracketOpen,
    #[token(")")]
    BracketClose,
    #[token("[")]
    SqBracketOpen,
    #[token("]")]
    SqBracketClose,
    #[token("->")]
    Arrow,
    // a word that is not a keyword
    #[regex(r"[a-zA-Z_]+")]
    Variable,
}

impl TokenKind {
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::Lambda => "'lambda'",
            TokenKind::TypeLambda => "'type_lambda'",
            TokenKind::Forall => "'forall'",
            TokenKind::Colon => "':'",
            TokenKind::Dot => "'.'",
            TokenKind::BracketOpen => "'('",
            TokenKind::BracketClose => "')'",
            TokenKind::SqBracketOpen => "'['",
            TokenKind::SqBracketClose => "']'",
            TokenKind::Arrow => "'->'",
            TokenKind::Variable => "a variable",
        }
    }
}

/// A token and where its first character sits in the source string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub lexeme: &'a str,
    pub position: usize,
}

impl Token<'_> {
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Variable => format!("variable '{}'", self.lexeme),
            kind => kind.describe().to_string(),
        }
    }
}

/// Tokenize `source`, failing at the first unrecognized character.
pub fn scan(source: &str) -> Result<Vec<Token<'_>>, ScanError> {
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();

    while let Some(kind) = lexer.next() {
        let kind = kind.map_err(|()| ScanError::new("Unknown token", lexer.span().start))?;
        tokens.push(Token {
            kind,
            lexeme: lexer.slice(),
            position: lexer.span().start,
        });
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_record_their_source_offset() {
        let tokens = scan("lambda x:(a->b).x").unwrap();
        let positions: Vec<usize> = tokens.iter().map(|token| token.position).collect();
        assert_eq!(positions, vec![0, 7, 8, 9, 10, 11, 13, 14, 15, 16]);
    }

    #[test]
    fn keywords_win_over_variables() {
        let kinds: Vec<TokenKind> = scan("lambda type_lambda forall lambdax x_y")
            .unwrap()
            .iter()
            .map(|token| token.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Lambda,
                TokenKind::TypeLambda,
                TokenKind::Forall,
                TokenKind::Variable,
                TokenKind::Variable,
            ]
        );
    }

    #[test]
    fn the_first_bad_character_is_reported() {
        assert_eq!(scan("1").unwrap_err().position, 0);
        assert_eq!(scan("x+y").unwrap_err().position, 1);
        assert_eq!(scan("->.-->").unwrap_err().position, 3);
    }

    #[test]
    fn whitespace_is_skipped() {
        let tokens = scan(" \t\n->").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Arrow);
        assert_eq!(tokens[0].position, 3);
    }
}

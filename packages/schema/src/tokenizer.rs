use crate::error::{ParseError, ParseResult};
use logos::Logos;
use std::fmt;
use std::ops::Range;

/// Tokens of a type expression (`java.util.Map<String, ? extends Item>[]`)
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r]+")]
pub enum Token<'src> {
    #[token("extends")]
    Extends,

    #[token("super")]
    Super,

    #[token("<")]
    LAngle,

    #[token(">")]
    RAngle,

    #[token(",")]
    Comma,

    #[token(".")]
    Dot,

    #[token("?")]
    Question,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    // Java identifiers, `$` included for nested binary names
    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*", |lex| lex.slice())]
    Ident(&'src str),
}

impl<'src> fmt::Display for Token<'src> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Extends => write!(f, "'extends'"),
            Token::Super => write!(f, "'super'"),
            Token::LAngle => write!(f, "'<'"),
            Token::RAngle => write!(f, "'>'"),
            Token::Comma => write!(f, "','"),
            Token::Dot => write!(f, "'.'"),
            Token::Question => write!(f, "'?'"),
            Token::LBracket => write!(f, "'['"),
            Token::RBracket => write!(f, "']'"),
            Token::Ident(s) => write!(f, "identifier '{}'", s),
        }
    }
}

/// Split a type expression into tokens with their byte spans
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token<'_>, Range<usize>)>> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => return Err(ParseError::lexer_error(lexer.span().start)),
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_generic_array() {
        let tokens = tokenize("java.util.List<Item>[]").unwrap();
        let kinds: Vec<_> = tokens.iter().map(|(t, _)| t.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                Token::Ident("java"),
                Token::Dot,
                Token::Ident("util"),
                Token::Dot,
                Token::Ident("List"),
                Token::LAngle,
                Token::Ident("Item"),
                Token::RAngle,
                Token::LBracket,
                Token::RBracket,
            ]
        );
    }

    #[test]
    fn test_keywords_do_not_swallow_identifiers() {
        let tokens = tokenize("? extends extendsFoo").unwrap();
        assert_eq!(tokens[1].0, Token::Extends);
        assert_eq!(tokens[2].0, Token::Ident("extendsFoo"));
    }

    #[test]
    fn test_lexer_error_position() {
        let err = tokenize("List<#>").unwrap_err();
        assert_eq!(err, ParseError::LexerError { pos: 5 });
    }
}

use crate::error::{ParseError, ParseResult};
use crate::tokenizer::{tokenize, Token};
use crate::types::{PrimitiveType, TypeDescriptor};
use std::ops::Range;

const OBJECT: &str = "java.lang.Object";

/// Generic arguments, wildcard bounds and array dimensions together may not
/// nest deeper than this
pub const MAX_TYPE_NESTING: usize = 256;

/// Recursive-descent parser for type expressions
///
/// ```text
/// type := '?' (('extends' | 'super') type)?
///       | name ('<' type (',' type)* '>')? ('[' ']')*
/// name := ident ('.' ident)*
/// ```
pub struct TypeParser<'src, 'p> {
    tokens: Vec<(Token<'src>, Range<usize>)>,
    pos: usize,
    source_len: usize,
    depth: usize,
    /// Type parameters in scope; bare names matching one become `Variable`
    type_params: &'p [String],
}

impl<'src, 'p> TypeParser<'src, 'p> {
    pub fn new(source: &'src str, type_params: &'p [String]) -> ParseResult<Self> {
        Ok(Self {
            tokens: tokenize(source)?,
            pos: 0,
            source_len: source.len(),
            depth: 0,
            type_params,
        })
    }

    /// Parse a complete expression, rejecting trailing tokens
    pub fn parse(&mut self) -> ParseResult<TypeDescriptor> {
        let ty = self.parse_type()?;
        if let Some((token, span)) = self.peek() {
            return Err(ParseError::unexpected_token(
                span.start,
                "end of type",
                token.to_string(),
            ));
        }
        Ok(ty)
    }

    fn parse_type(&mut self) -> ParseResult<TypeDescriptor> {
        if self.depth >= MAX_TYPE_NESTING {
            return Err(self.nesting_error());
        }
        self.depth += 1;
        let result = self.parse_nested_type();
        self.depth -= 1;
        result
    }

    fn parse_nested_type(&mut self) -> ParseResult<TypeDescriptor> {
        let base = if self.match_token(Token::Question) {
            if self.match_token(Token::Extends) || self.match_token(Token::Super) {
                // Wildcards resolve to their bound
                self.parse_type()?
            } else {
                TypeDescriptor::class(OBJECT)
            }
        } else {
            self.parse_reference()?
        };

        let mut ty = base;
        let mut dimensions = 0;
        while self.check(&Token::LBracket) {
            dimensions += 1;
            if self.depth + dimensions > MAX_TYPE_NESTING {
                return Err(self.nesting_error());
            }
            self.pos += 1;
            self.expect(Token::RBracket)?;
            ty = TypeDescriptor::array_of(ty);
        }
        Ok(ty)
    }

    fn parse_reference(&mut self) -> ParseResult<TypeDescriptor> {
        let name = self.parse_qualified_name()?;

        let mut args = Vec::new();
        if self.match_token(Token::LAngle) {
            loop {
                args.push(self.parse_type()?);
                if !self.match_token(Token::Comma) {
                    break;
                }
            }
            self.expect(Token::RAngle)?;
        }

        if args.is_empty() && !name.contains('.') {
            if let Some(primitive) = PrimitiveType::from_keyword(&name) {
                return Ok(TypeDescriptor::Primitive(primitive));
            }
            if self.type_params.iter().any(|p| *p == name) {
                return Ok(TypeDescriptor::Variable(name));
            }
        }

        Ok(TypeDescriptor::generic(name, args))
    }

    fn parse_qualified_name(&mut self) -> ParseResult<String> {
        let mut name = self.expect_ident()?;
        while self.match_token(Token::Dot) {
            name.push('.');
            name.push_str(&self.expect_ident()?);
        }
        Ok(name)
    }

    // Helper methods

    fn peek(&self) -> Option<&(Token<'src>, Range<usize>)> {
        self.tokens.get(self.pos)
    }

    fn check(&self, token: &Token) -> bool {
        match self.peek() {
            Some((t, _)) => std::mem::discriminant(t) == std::mem::discriminant(token),
            None => false,
        }
    }

    fn match_token(&mut self, token: Token) -> bool {
        if self.check(&token) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, token: Token) -> ParseResult<()> {
        if self.match_token(token.clone()) {
            return Ok(());
        }
        Err(self.error_here(token.to_string()))
    }

    fn expect_ident(&mut self) -> ParseResult<String> {
        match self.peek() {
            Some((Token::Ident(s), _)) => {
                let val = s.to_string();
                self.pos += 1;
                Ok(val)
            }
            _ => Err(self.error_here("identifier")),
        }
    }

    fn nesting_error(&self) -> ParseError {
        let pos = self.peek().map_or(self.source_len, |(_, span)| span.start);
        ParseError::nesting_too_deep(pos, MAX_TYPE_NESTING)
    }

    fn error_here(&self, expected: impl Into<String>) -> ParseError {
        match self.peek() {
            Some((token, span)) => ParseError::unexpected_token(span.start, expected, token.to_string()),
            None => ParseError::unexpected_eof(self.source_len),
        }
    }
}

/// Parse a type expression with no type parameters in scope
pub fn parse_type(source: &str) -> ParseResult<TypeDescriptor> {
    parse_type_in(source, &[])
}

/// Parse a type expression inside a declaration with the given type parameters
pub fn parse_type_in(source: &str, type_params: &[String]) -> ParseResult<TypeDescriptor> {
    TypeParser::new(source, type_params)?.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ClassType;

    #[test]
    fn test_parse_primitive() {
        assert_eq!(
            parse_type("int").unwrap(),
            TypeDescriptor::Primitive(PrimitiveType::Int)
        );
    }

    #[test]
    fn test_parse_multi_dimensional_array() {
        let ty = parse_type("int[][]").unwrap();
        assert_eq!(
            ty,
            TypeDescriptor::array_of(TypeDescriptor::array_of(TypeDescriptor::Primitive(
                PrimitiveType::Int
            )))
        );
    }

    #[test]
    fn test_parse_nested_generics() {
        let ty = parse_type("java.util.Map<String, java.util.List<com.acme.User>>").unwrap();
        assert_eq!(
            ty,
            TypeDescriptor::Class(ClassType::new(
                "java.util.Map",
                vec![
                    TypeDescriptor::class("String"),
                    TypeDescriptor::generic(
                        "java.util.List",
                        vec![TypeDescriptor::class("com.acme.User")]
                    ),
                ]
            ))
        );
    }

    #[test]
    fn test_parse_type_variable_in_scope() {
        let params = vec!["T".to_string()];
        assert_eq!(
            parse_type_in("T", &params).unwrap(),
            TypeDescriptor::Variable("T".to_string())
        );
        // Out of scope it is just an unknown class name
        assert_eq!(parse_type("T").unwrap(), TypeDescriptor::class("T"));
    }

    #[test]
    fn test_parse_wildcards() {
        assert_eq!(
            parse_type("List<? extends Item>").unwrap(),
            TypeDescriptor::generic("List", vec![TypeDescriptor::class("Item")])
        );
        assert_eq!(
            parse_type("List<?>").unwrap(),
            TypeDescriptor::generic("List", vec![TypeDescriptor::class(OBJECT)])
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse_type("List<Item"),
            Err(ParseError::UnexpectedEof { pos: 9 })
        ));
        assert!(matches!(
            parse_type("List Item"),
            Err(ParseError::UnexpectedToken { pos: 5, .. })
        ));
        assert!(matches!(
            parse_type("int[}"),
            Err(ParseError::LexerError { pos: 4 })
        ));
        assert!(matches!(parse_type(""), Err(ParseError::UnexpectedEof { .. })));
    }

    #[test]
    fn test_nesting_limit() {
        let nested = |levels: usize| format!("{}int{}", "List<".repeat(levels), ">".repeat(levels));

        // The outermost type counts as one level
        assert!(parse_type(&nested(MAX_TYPE_NESTING - 1)).is_ok());
        assert!(matches!(
            parse_type(&nested(MAX_TYPE_NESTING)),
            Err(ParseError::NestingTooDeep { limit: MAX_TYPE_NESTING, .. })
        ));

        // Far past the limit fails the same way instead of exhausting the stack
        let err = parse_type(&nested(200_000)).unwrap_err();
        assert_eq!(err, ParseError::NestingTooDeep { pos: 5 * MAX_TYPE_NESTING, limit: MAX_TYPE_NESTING });
    }

    #[test]
    fn test_array_dimensions_count_toward_nesting() {
        let dims = |n: usize| format!("int{}", "[]".repeat(n));

        assert!(parse_type(&dims(MAX_TYPE_NESTING - 1)).is_ok());
        assert!(matches!(
            parse_type(&dims(MAX_TYPE_NESTING)),
            Err(ParseError::NestingTooDeep { .. })
        ));
        assert!(matches!(
            parse_type(&format!("List<{}>", dims(MAX_TYPE_NESTING - 1))),
            Err(ParseError::NestingTooDeep { .. })
        ));
    }
}

//! Recursive-descent parser from a token stream to a [`Template`].
//!
//! Grammar:
//!
//! ```text
//! template := '(' element (',' element)* ')'
//! element  := type ':' body
//! type     := "integer" | "string"
//! body     := '*' | [operator] literal
//! ```
//!
//! The literal kind is dictated by the already-parsed type, so a comparer
//! holding a literal of the wrong type cannot be produced. A body with no
//! operator token is an implicit equality comparison.

use crate::error::{ParseError, Result};
use crate::matcher::{Matcher, Operator, Template};
use crate::token::{Punct, Token, TokenSource};
use crate::value::ElementType;

/// Parse one complete template from `source`.
pub fn parse_template<S: TokenSource>(source: S) -> Result<Template> {
    TemplateParser::new(source).parse()
}

/// Single-use parser over one token source.
///
/// Construction advances the source onto its first token, establishing the
/// one token of lookahead every other operation relies on. [`parse`]
/// consumes the parser, so a finished or failed parser cannot be reused.
///
/// [`parse`]: TemplateParser::parse
pub struct TemplateParser<S> {
    source: S,
}

impl<S: TokenSource> TemplateParser<S> {
    pub fn new(mut source: S) -> Self {
        // Move the cursor onto the first token of the stream.
        source.advance();
        TemplateParser { source }
    }

    pub fn parse(mut self) -> Result<Template> {
        self.skip(Punct::LeftParen)?;
        let mut elements = vec![self.parse_element()?];
        while self.try_skip_comma() {
            elements.push(self.parse_element()?);
        }
        self.skip(Punct::RightParen)?;
        Ok(Template::new(elements))
    }

    fn parse_element(&mut self) -> Result<Matcher> {
        let required = self.read_type()?;
        self.skip(Punct::Colon)?;

        if self.is(Punct::Star) {
            self.advance();
            return Ok(Matcher::RequiredType(required));
        }
        if let Token::Operator(op) = self.source.token() {
            let op = *op;
            self.advance();
            return self.parse_comparer(required, op);
        }
        // Bare literal: implicit equality.
        self.parse_comparer(required, Operator::Equal)
    }

    /// Closed vocabulary check: the identifiers `integer` and `string` are
    /// the only accepted type names.
    fn read_type(&mut self) -> Result<ElementType> {
        let required = match self.source.token() {
            Token::Identifier(name) => match name.as_str() {
                "integer" => ElementType::Integer,
                "string" => ElementType::String,
                _ => {
                    return Err(ParseError::UnknownType {
                        line: self.source.line(),
                        found: name.clone(),
                    });
                }
            },
            Token::Eof => return Err(self.end_of_input("an element type")),
            _ => return Err(self.syntax_error("an element type identifier")),
        };
        self.advance();
        Ok(required)
    }

    fn parse_comparer(&mut self, required: ElementType, op: Operator) -> Result<Matcher> {
        match required {
            ElementType::Integer => self.parse_integer_comparer(op),
            ElementType::String => self.parse_string_comparer(op),
        }
    }

    fn parse_integer_comparer(&mut self, op: Operator) -> Result<Matcher> {
        let value = match self.source.token() {
            Token::Integer(value) => *value,
            Token::Eof => return Err(self.end_of_input("an integer literal")),
            _ => return Err(self.syntax_error("an integer literal")),
        };
        self.advance();
        Ok(Matcher::IntegerComparer { op, value })
    }

    fn parse_string_comparer(&mut self, op: Operator) -> Result<Matcher> {
        let value = match self.source.token() {
            Token::StringLiteral(value) => value.clone(),
            Token::Eof => return Err(self.end_of_input("a string literal")),
            _ => return Err(self.syntax_error("a string literal")),
        };
        self.advance();
        Ok(Matcher::StringComparer { op, value })
    }

    fn is(&self, punct: Punct) -> bool {
        matches!(self.source.token(), Token::Punct(p) if *p == punct)
    }

    fn is_eof(&self) -> bool {
        matches!(self.source.token(), Token::Eof)
    }

    fn skip(&mut self, punct: Punct) -> Result<()> {
        if self.is(punct) {
            self.advance();
            Ok(())
        } else if self.is_eof() {
            Err(self.end_of_input(&format!("'{}'", punct)))
        } else {
            Err(self.syntax_error(&format!("'{}'", punct)))
        }
    }

    fn try_skip_comma(&mut self) -> bool {
        if self.is(Punct::Comma) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn advance(&mut self) {
        self.source.advance();
    }

    fn syntax_error(&self, expected: &str) -> ParseError {
        ParseError::Syntax {
            line: self.source.line(),
            expected: expected.to_string(),
            found: self.source.token().kind_name().to_string(),
        }
    }

    fn end_of_input(&self, expected: &str) -> ParseError {
        ParseError::EndOfInput {
            line: self.source.line(),
            expected: expected.to_string(),
        }
    }
}

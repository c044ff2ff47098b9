//! Path expression parser.
//!
//! Purely lexical: identifiers are not checked against the class registry
//! here, so malformed text and unknown field names stay distinct error
//! conditions (the latter surface during resolution).

use thiserror::Error;

use crate::types::{IndexSpec, Path, PathStep};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty path")]
    Empty,
    #[error("empty path element")]
    EmptyStep,
    #[error("unexpected character: {0}")]
    UnexpectedChar(char),
    #[error("unclosed index expression")]
    UnclosedIndex,
    #[error("invalid index expression: {0}")]
    InvalidIndex(String),
    #[error("trailing character after index: {0}")]
    TrailingChars(char),
}

/// Path parser.
pub struct PathParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> PathParser<'a> {
    /// Parse a path expression such as `alert.source(0).node.name`.
    pub fn parse(input: &'a str) -> Result<Path, ParseError> {
        if input.is_empty() {
            return Err(ParseError::Empty);
        }
        let mut parser = Self { input, pos: 0 };
        let mut steps = Vec::new();
        loop {
            steps.push(parser.parse_step()?);
            match parser.peek() {
                None => break,
                Some('.') => {
                    parser.advance();
                }
                Some(c) => return Err(ParseError::TrailingChars(c)),
            }
        }
        Ok(Path { steps })
    }

    fn parse_step(&mut self) -> Result<PathStep, ParseError> {
        let name = self.parse_identifier()?;
        let index = if self.peek() == Some('(') {
            self.advance();
            let spec = self.parse_index()?;
            match self.peek() {
                Some(')') => self.advance(),
                Some(c) => return Err(ParseError::InvalidIndex(c.to_string())),
                None => return Err(ParseError::UnclosedIndex),
            }
            Some(spec)
        } else {
            None
        };
        Ok(PathStep { name, index })
    }

    fn parse_identifier(&mut self) -> Result<String, ParseError> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                self.advance();
            } else {
                break;
            }
        }
        if self.pos == start {
            return match self.peek() {
                Some(c) => Err(ParseError::UnexpectedChar(c)),
                None => Err(ParseError::EmptyStep),
            };
        }
        Ok(self.input[start..self.pos].to_owned())
    }

    fn parse_index(&mut self) -> Result<IndexSpec, ParseError> {
        match self.peek() {
            Some('*') => {
                self.advance();
                Ok(IndexSpec::Wildcard)
            }
            Some('>') => {
                self.advance();
                if self.peek() == Some('>') {
                    self.advance();
                    Ok(IndexSpec::Append)
                } else {
                    Err(ParseError::InvalidIndex(">".to_owned()))
                }
            }
            _ => {
                let start = self.pos;
                while let Some(c) = self.peek() {
                    if c.is_ascii_digit() {
                        self.advance();
                    } else {
                        break;
                    }
                }
                if self.pos == start {
                    return match self.peek() {
                        Some(c) => Err(ParseError::InvalidIndex(c.to_string())),
                        None => Err(ParseError::UnclosedIndex),
                    };
                }
                let digits = &self.input[start..self.pos];
                digits
                    .parse::<usize>()
                    .map(IndexSpec::Exact)
                    .map_err(|_| ParseError::InvalidIndex(digits.to_owned()))
            }
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(name: &str, index: Option<IndexSpec>) -> PathStep {
        PathStep { name: name.to_owned(), index }
    }

    #[test]
    fn test_parse_plain() {
        let path = PathParser::parse("alert.classification.text").unwrap();
        assert_eq!(
            path.steps,
            vec![step("alert", None), step("classification", None), step("text", None)]
        );
    }

    #[test]
    fn test_parse_indices() {
        let path = PathParser::parse("alert.source(1).node.address(2).address").unwrap();
        assert_eq!(path.steps[1], step("source", Some(IndexSpec::Exact(1))));
        assert_eq!(path.steps[3], step("address", Some(IndexSpec::Exact(2))));
    }

    #[test]
    fn test_parse_wildcard_and_append() {
        let path = PathParser::parse("alert.source(*).node.address(>>)").unwrap();
        assert_eq!(path.steps[1].index, Some(IndexSpec::Wildcard));
        assert_eq!(path.steps[3].index, Some(IndexSpec::Append));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(PathParser::parse(""), Err(ParseError::Empty));
        assert_eq!(PathParser::parse("alert."), Err(ParseError::EmptyStep));
        assert_eq!(PathParser::parse(".alert"), Err(ParseError::UnexpectedChar('.')));
        assert_eq!(PathParser::parse("alert.source("), Err(ParseError::UnclosedIndex));
        assert_eq!(
            PathParser::parse("alert.source(x)"),
            Err(ParseError::InvalidIndex("x".to_owned()))
        );
        assert_eq!(
            PathParser::parse("alert.source(1x)"),
            Err(ParseError::InvalidIndex("x".to_owned()))
        );
        assert_eq!(
            PathParser::parse("alert.source(0)x"),
            Err(ParseError::TrailingChars('x'))
        );
        assert_eq!(PathParser::parse("alert.source(>)"), Err(ParseError::InvalidIndex(">".to_owned())));
    }

    #[test]
    fn test_display_round_trip() {
        for text in [
            "alert.classification.text",
            "alert.source(1).node.address(2).address",
            "alert.source(*).node.address(*)",
            "alert.source(>>).interface",
        ] {
            assert_eq!(PathParser::parse(text).unwrap().to_string(), text);
        }
    }
}

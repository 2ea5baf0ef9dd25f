//! List-literal reader: `[42, [[1, ['a', 'b']], [2, [3.14, 6.023e23]]]]`.
//!
//! Accepts nested `[...]` lists (trailing comma allowed), integers, floats,
//! single- or double-quoted strings, and the keywords `True`, `False`,
//! `None` (or their lowercase JSON spellings). Whitespace is insignificant
//! and `#` starts a comment running to the end of the line.
//!
//! Numbers go through `lexical-core`; a token containing `.`, `e` or `E`
//! is a float, anything else an integer. Integers beyond `i128` keep their
//! digits as text, so they still print exactly as written.

use crate::core::{
    constants::MAX_NESTING,
    error::{ParseErrorKind, ParseTreeError},
    value::{Scalar, Value},
};

/// Parse a whole document into one tree value.
pub fn parse(src: &str) -> Result<Value, ParseTreeError> {
    let mut cur = Cursor::new(src);
    let value = cur.value(0)?;
    cur.skip_blank();
    if cur.peek().is_some() {
        return Err(cur.error(ParseErrorKind::TrailingInput));
    }
    Ok(value)
}

/// 1-based line and column of a character.
#[derive(Clone, Copy)]
struct Pos {
    line: usize,
    column: usize,
}

struct Cursor<'a> {
    src: &'a str,
    at: usize,
    line: usize,
    line_start: usize,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            at: 0,
            line: 1,
            line_start: 0,
        }
    }

    // --- Helpers ---

    #[inline]
    fn peek(&self) -> Option<char> {
        self.src[self.at..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.at += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.line_start = self.at;
        }
        Some(c)
    }

    fn pos(&self) -> Pos {
        Pos {
            line: self.line,
            column: self.src[self.line_start..self.at].chars().count() + 1,
        }
    }

    fn error(&self, kind: ParseErrorKind) -> ParseTreeError {
        Self::error_at(self.pos(), kind)
    }

    fn error_at(pos: Pos, kind: ParseErrorKind) -> ParseTreeError {
        ParseTreeError {
            line: pos.line,
            column: pos.column,
            kind,
        }
    }

    /// The next char, or an error if input ran out.
    fn expect_any(&mut self) -> Result<char, ParseTreeError> {
        self.bump()
            .ok_or_else(|| self.error(ParseErrorKind::UnexpectedEnd))
    }

    fn take_while(&mut self, keep: impl Fn(char) -> bool) -> &'a str {
        let start = self.at;
        while self.peek().is_some_and(&keep) {
            self.bump();
        }
        &self.src[start..self.at]
    }

    fn skip_blank(&mut self) {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.bump();
                }
                Some('#') => {
                    self.take_while(|c| c != '\n');
                }
                _ => break,
            }
        }
    }

    // --- Grammar ---

    fn value(&mut self, depth: usize) -> Result<Value, ParseTreeError> {
        self.skip_blank();
        match self.peek() {
            None => Err(self.error(ParseErrorKind::UnexpectedEnd)),
            Some('[') => self.list(depth + 1),
            Some(q @ ('\'' | '"')) => self.string(q).map(|s| Value::Scalar(Scalar::Text(s))),
            Some(c) if c.is_ascii_digit() || matches!(c, '-' | '+' | '.') => {
                self.number().map(Value::Scalar)
            }
            Some(c) if c.is_alphabetic() => self.keyword().map(Value::Scalar),
            Some(c) => Err(self.error(ParseErrorKind::UnexpectedChar(c))),
        }
    }

    fn list(&mut self, depth: usize) -> Result<Value, ParseTreeError> {
        if depth > MAX_NESTING {
            return Err(self.error(ParseErrorKind::TooDeep));
        }
        self.bump(); // '['
        let mut items = Vec::new();
        loop {
            self.skip_blank();
            if self.peek() == Some(']') {
                self.bump();
                break;
            }
            items.push(self.value(depth)?);
            self.skip_blank();
            match self.peek() {
                Some(',') => {
                    self.bump();
                }
                Some(']') => {
                    self.bump();
                    break;
                }
                Some(c) => return Err(self.error(ParseErrorKind::UnexpectedChar(c))),
                None => return Err(self.error(ParseErrorKind::UnexpectedEnd)),
            }
        }
        Ok(Value::Seq(items))
    }

    fn number(&mut self) -> Result<Scalar, ParseTreeError> {
        let start = self.pos();
        let token = self.take_while(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E'));
        let bad = || Self::error_at(start, ParseErrorKind::BadNumber(token.to_owned()));

        let unsigned = token.strip_prefix('+').unwrap_or(token);
        let digits = unsigned.as_bytes();
        if token.contains(['.', 'e', 'E']) {
            lexical_core::parse::<f64>(digits)
                .map(Scalar::Float)
                .map_err(|_| bad())
        } else {
            match lexical_core::parse::<i128>(digits) {
                Ok(n) => Ok(Scalar::Int(n)),
                Err(_) if is_wide_integer(digits) => Ok(Scalar::Text(unsigned.to_owned())),
                Err(_) => Err(bad()),
            }
        }
    }

    fn keyword(&mut self) -> Result<Scalar, ParseTreeError> {
        let start = self.pos();
        let word = self.take_while(|c| c.is_alphanumeric() || c == '_');
        match word {
            "True" | "true" => Ok(Scalar::Bool(true)),
            "False" | "false" => Ok(Scalar::Bool(false)),
            "None" | "null" => Ok(Scalar::None),
            _ => {
                let first = word.chars().next().unwrap_or_default();
                Err(Self::error_at(start, ParseErrorKind::UnexpectedChar(first)))
            }
        }
    }

    fn string(&mut self, quote: char) -> Result<String, ParseTreeError> {
        self.bump(); // opening quote
        let mut out = String::new();
        loop {
            match self.expect_any()? {
                c if c == quote => return Ok(out),
                '\\' => out.push(self.escape()?),
                c => out.push(c),
            }
        }
    }

    fn escape(&mut self) -> Result<char, ParseTreeError> {
        let start = self.pos();
        let c = match self.expect_any()? {
            'n' => '\n',
            't' => '\t',
            'r' => '\r',
            '0' => '\0',
            '\\' => '\\',
            '\'' => '\'',
            '"' => '"',
            'x' => self.hex_escape(2, start)?,
            'u' => self.hex_escape(4, start)?,
            _ => return Err(Self::error_at(start, ParseErrorKind::BadEscape)),
        };
        Ok(c)
    }

    fn hex_escape(&mut self, width: usize, start: Pos) -> Result<char, ParseTreeError> {
        let mut code = 0u32;
        for _ in 0..width {
            let digit = self
                .expect_any()?
                .to_digit(16)
                .ok_or_else(|| Self::error_at(start, ParseErrorKind::BadEscape))?;
            code = code * 16 + digit;
        }
        char::from_u32(code).ok_or_else(|| Self::error_at(start, ParseErrorKind::BadEscape))
    }
}

/// Optional `-` then at least one digit, nothing else.
fn is_wide_integer(token: &[u8]) -> bool {
    let body = token.strip_prefix(b"-").unwrap_or(token);
    !body.is_empty() && body.iter().all(u8::is_ascii_digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(src: &str) -> ParseErrorKind {
        parse(src).unwrap_err().kind
    }

    #[test]
    fn nested_mixed_scalars() {
        let v = parse("[[[1, [True, ['abc', 'def']]], [2, [3.5, 6.023e23]]], 42]").unwrap();
        let Value::Seq(top) = &v else {
            panic!("expected a list, got {v:?}");
        };
        assert_eq!(top.len(), 2);
        assert_eq!(top[1], Value::from(42));

        let first = &top[0].as_seq().unwrap()[0];
        assert_eq!(
            first,
            &Value::seq([
                Value::from(1),
                Value::seq([Value::from(true), Value::seq(["abc", "def"])]),
            ])
        );
        let second = &top[0].as_seq().unwrap()[1];
        assert_eq!(
            second,
            &Value::seq([Value::from(2), Value::seq([3.5, 6.023e23])])
        );
    }

    #[test]
    fn keywords_and_json_spellings() {
        assert_eq!(
            parse("[None, null, True, true, False, false]").unwrap(),
            Value::seq([
                Value::none(),
                Value::none(),
                Value::from(true),
                Value::from(true),
                Value::from(false),
                Value::from(false),
            ])
        );
    }

    #[test]
    fn numbers() {
        assert_eq!(parse("-43").unwrap(), Value::from(-43));
        assert_eq!(parse("+7").unwrap(), Value::from(7));
        assert_eq!(parse("1e-7").unwrap(), Value::from(1e-7));
        assert_eq!(parse("2.5").unwrap(), Value::from(2.5));
        assert_eq!(
            parse("170141183460469231731687303715884105727").unwrap(),
            Value::Scalar(Scalar::Int(i128::MAX))
        );
        assert_eq!(
            parse("[170141183460469231731687303715884105728, -99999999999999999999999999999999999999999]")
                .unwrap(),
            Value::seq([
                "170141183460469231731687303715884105728",
                "-99999999999999999999999999999999999999999",
            ])
        );
        assert_eq!(
            parse("+340282366920938463463374607431768211456").unwrap(),
            Value::from("340282366920938463463374607431768211456")
        );
        assert!(matches!(kind("1-2"), ParseErrorKind::BadNumber(t) if t == "1-2"));
        assert!(matches!(kind("1.2.3"), ParseErrorKind::BadNumber(t) if t == "1.2.3"));
        assert!(matches!(kind("-"), ParseErrorKind::BadNumber(_)));
    }

    #[test]
    fn string_escapes() {
        assert_eq!(parse(r"'dva\nradky'").unwrap(), Value::from("dva\nradky"));
        assert_eq!(parse(r#""it's""#).unwrap(), Value::from("it's"));
        assert_eq!(parse(r"'\x41é\t\\'").unwrap(), Value::from("Aé\t\\"));
        assert!(matches!(kind(r"'\q'"), ParseErrorKind::BadEscape));
        assert!(matches!(kind(r"'\u12'"), ParseErrorKind::BadEscape));
        assert!(matches!(kind("'open"), ParseErrorKind::UnexpectedEnd));
    }

    #[test]
    fn layout_is_free_form() {
        let src = "# comment line\n[ 1 ,\n  [ 2, 3, ],  # trailing comma\n]\n";
        assert_eq!(
            parse(src).unwrap(),
            Value::seq([Value::from(1), Value::seq([2, 3])])
        );
        assert_eq!(parse("[]").unwrap(), Value::Seq(vec![]));
    }

    #[test]
    fn errors_carry_position() {
        let err = parse("[1,\n  (1, 2)]").unwrap_err();
        assert_eq!((err.line, err.column), (2, 3));
        assert!(matches!(err.kind, ParseErrorKind::UnexpectedChar('(')));

        let err = parse("[1, 2] 3").unwrap_err();
        assert_eq!((err.line, err.column), (1, 8));
        assert!(matches!(err.kind, ParseErrorKind::TrailingInput));

        assert!(matches!(kind("[1 2]"), ParseErrorKind::UnexpectedChar('2')));
        assert!(matches!(kind("[1,"), ParseErrorKind::UnexpectedEnd));
        assert!(matches!(kind("[,]"), ParseErrorKind::UnexpectedChar(',')));
        assert!(matches!(kind("Nope"), ParseErrorKind::UnexpectedChar('N')));
        assert!(matches!(kind(""), ParseErrorKind::UnexpectedEnd));
    }

    #[test]
    fn nesting_limit() {
        let ok = format!("{}{}", "[".repeat(MAX_NESTING), "]".repeat(MAX_NESTING));
        assert!(parse(&ok).is_ok());

        let deep = format!("{}{}", "[".repeat(MAX_NESTING + 1), "]".repeat(MAX_NESTING + 1));
        assert!(matches!(kind(&deep), ParseErrorKind::TooDeep));
    }
}

//! Loosely-typed tree input: scalars and sequences.
//!
//! A tree is written as nested sequences. Every sequence the renderer treats
//! as a node must be a `[label, children]` pair (in either order); any other
//! value is a [`Scalar`] and renders as a leaf. Labels print through
//! [`Scalar`]'s `Display`, one rule per kind:
//!
//! * `None`, `True`, `False`
//! * integers in plain decimal
//! * floats as the shortest round-trip digits, switching to `6.023e+23`
//!   style once the decimal exponent leaves `-4..16`
//! * text verbatim, embedded line breaks included

use std::fmt::{self, Write};

use lexical_core::FormattedSize;

/// Any value that is not a sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    None,
    Bool(bool),
    Int(i128),
    Float(f64),
    Text(String),
}

/// One element of the tree encoding.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(Scalar),
    Seq(Vec<Value>),
}

impl Value {
    #[inline]
    #[must_use]
    pub const fn none() -> Self {
        Self::Scalar(Scalar::None)
    }

    /// Collect anything convertible into a sequence value.
    pub fn seq<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self::Seq(items.into_iter().map(Into::into).collect())
    }

    #[inline]
    #[must_use]
    pub const fn is_seq(&self) -> bool {
        matches!(self, Self::Seq(_))
    }

    #[inline]
    #[must_use]
    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Self::Seq(items) => Some(items),
            Self::Scalar(_) => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::None => f.write_str("None"),
            Scalar::Bool(true) => f.write_str("True"),
            Scalar::Bool(false) => f.write_str("False"),
            Scalar::Int(n) => write!(f, "{n}"),
            Scalar::Float(x) => write_float(f, *x),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

// --- Float formatting ---

/// Decimal exponents outside `SCI_LOW..SCI_HIGH` switch to scientific form.
const SCI_LOW: i32 = -4;
const SCI_HIGH: i32 = 16;

/// Shortest round-trip digits of `|x|` and the position of the decimal
/// point relative to the first digit (`0.d1d2… × 10^point`).
///
/// Leading and trailing zeros are stripped; zero yields no digits.
fn shortest_digits(x: f64) -> (Vec<u8>, i32) {
    let mut buf = [0u8; f64::FORMATTED_SIZE_DECIMAL];
    let text: &[u8] = lexical_core::write(x.abs(), &mut buf);

    let (mantissa, exp) = match text.iter().position(|&b| b == b'e' || b == b'E') {
        Some(i) => (&text[..i], parse_exponent(&text[i + 1..])),
        None => (text, 0),
    };
    let (int_part, frac_part) = match mantissa.iter().position(|&b| b == b'.') {
        Some(i) => (&mantissa[..i], &mantissa[i + 1..]),
        None => (mantissa, &[][..]),
    };

    let mut digits: Vec<u8> = int_part.iter().chain(frac_part).copied().collect();
    let mut point = i32::try_from(int_part.len()).unwrap_or(i32::MAX) + exp;

    let leading = digits.iter().take_while(|&&d| d == b'0').count();
    digits.drain(..leading);
    point -= i32::try_from(leading).unwrap_or(0);
    while digits.last() == Some(&b'0') {
        digits.pop();
    }
    (digits, point)
}

#[inline]
fn parse_exponent(b: &[u8]) -> i32 {
    let (neg, b) = match b.first() {
        Some(b'-') => (true, &b[1..]),
        Some(b'+') => (false, &b[1..]),
        _ => (false, b),
    };
    let n = b
        .iter()
        .filter(|d| d.is_ascii_digit())
        .fold(0i32, |acc, d| acc * 10 + i32::from(d - b'0'));
    if neg { -n } else { n }
}

fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if x.is_nan() {
        return f.write_str("nan");
    }
    if x.is_sign_negative() {
        f.write_char('-')?;
    }
    if x.is_infinite() {
        return f.write_str("inf");
    }

    let (digits, point) = shortest_digits(x);
    if digits.is_empty() {
        return f.write_str("0.0");
    }
    // digits are ASCII by construction
    let ds = std::str::from_utf8(&digits).map_err(|_| fmt::Error)?;
    let sci_exp = point - 1;

    if !(SCI_LOW..SCI_HIGH).contains(&sci_exp) {
        let (head, tail) = ds.split_at(1);
        f.write_str(head)?;
        if !tail.is_empty() {
            write!(f, ".{tail}")?;
        }
        let sign = if sci_exp < 0 { '-' } else { '+' };
        return write!(f, "e{sign}{:02}", sci_exp.unsigned_abs());
    }

    let len = i32::try_from(ds.len()).unwrap_or(i32::MAX);
    if point <= 0 {
        f.write_str("0.")?;
        for _ in 0..-point {
            f.write_char('0')?;
        }
        f.write_str(ds)
    } else if point >= len {
        f.write_str(ds)?;
        for _ in 0..point - len {
            f.write_char('0')?;
        }
        f.write_str(".0")
    } else {
        let (int_part, frac_part) = ds.split_at(point.unsigned_abs() as usize);
        write!(f, "{int_part}.{frac_part}")
    }
}

// --- convenience conversions ---
impl From<Scalar> for Value {
    #[inline]
    fn from(s: Scalar) -> Self {
        Self::Scalar(s)
    }
}
impl From<Vec<Value>> for Value {
    #[inline]
    fn from(v: Vec<Value>) -> Self {
        Self::Seq(v)
    }
}
impl From<bool> for Value {
    #[inline]
    fn from(b: bool) -> Self {
        Self::Scalar(Scalar::Bool(b))
    }
}
impl From<i32> for Value {
    #[inline]
    fn from(n: i32) -> Self {
        Self::Scalar(Scalar::Int(n.into()))
    }
}
impl From<i64> for Value {
    #[inline]
    fn from(n: i64) -> Self {
        Self::Scalar(Scalar::Int(n.into()))
    }
}
impl From<u32> for Value {
    #[inline]
    fn from(n: u32) -> Self {
        Self::Scalar(Scalar::Int(n.into()))
    }
}
impl From<u64> for Value {
    #[inline]
    fn from(n: u64) -> Self {
        Self::Scalar(Scalar::Int(n.into()))
    }
}
impl From<f64> for Value {
    #[inline]
    fn from(x: f64) -> Self {
        Self::Scalar(Scalar::Float(x))
    }
}
impl From<&str> for Value {
    #[inline]
    fn from(s: &str) -> Self {
        Self::Scalar(Scalar::Text(s.to_owned()))
    }
}
impl From<String> for Value {
    #[inline]
    fn from(s: String) -> Self {
        Self::Scalar(Scalar::Text(s))
    }
}

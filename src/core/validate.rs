//! Pair classification: which element is the label, which the children.

use crate::core::{
    error::TreeFault,
    value::{Scalar, Value},
};

/// A validated node, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pair<'a> {
    pub label: &'a Scalar,
    pub children: &'a [Value],
}

/// Split a 2-element sequence into label and children.
///
/// Exactly one element must be a sequence; it becomes `children` whichever
/// position it holds. Children are not inspected here.
pub fn validate(items: &[Value]) -> Result<Pair<'_>, TreeFault> {
    let [first, second] = items else {
        return Err(TreeFault::WrongLength(items.len()));
    };
    match (first, second) {
        (Value::Scalar(label), Value::Seq(children))
        | (Value::Seq(children), Value::Scalar(label)) => Ok(Pair { label, children }),
        (Value::Scalar(_), Value::Scalar(_)) => Err(TreeFault::MissingChildren),
        (Value::Seq(_), Value::Seq(_)) => Err(TreeFault::AmbiguousPair),
    }
}

/// A children list of two entries, exactly one a sequence, is shorthand for
/// a single nested pair rather than two siblings.
#[inline]
#[must_use]
pub fn is_shorthand_pair(children: &[Value]) -> bool {
    matches!(children, [a, b] if a.is_seq() != b.is_seq())
}

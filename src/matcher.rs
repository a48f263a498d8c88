//! Template element matchers and whole-template matching.
//!
//! A [`Matcher`] is a single-position predicate over one typed tuple
//! element; a [`Template`] is an ordered sequence of them, one per tuple
//! position. Matching never fails: a type mismatch simply does not match,
//! since type compatibility was already enforced when the template was
//! parsed.

use std::fmt;
use std::slice;

use crate::value::{ElementType, Value};

/// Relational operator applied by comparer matchers.
///
/// Integers compare by numeric order, strings lexicographically. This enum
/// is also part of the scanner's token vocabulary; adding an operator means
/// adding a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Equal,
    NotEqual,
    LessThan,
    LessOrEqual,
    GreaterThan,
    GreaterOrEqual,
}

impl Operator {
    /// The operator's textual symbol, as the scanner spells it.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::NotEqual => "!=",
            Operator::LessThan => "<",
            Operator::LessOrEqual => "<=",
            Operator::GreaterThan => ">",
            Operator::GreaterOrEqual => ">=",
        }
    }

    /// Whether `lhs op rhs` holds under the payload's natural ordering.
    fn holds<T: Ord + ?Sized>(&self, lhs: &T, rhs: &T) -> bool {
        match self {
            Operator::Equal => lhs == rhs,
            Operator::NotEqual => lhs != rhs,
            Operator::LessThan => lhs < rhs,
            Operator::LessOrEqual => lhs <= rhs,
            Operator::GreaterThan => lhs > rhs,
            Operator::GreaterOrEqual => lhs >= rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single-position predicate over one stored tuple element.
///
/// The parser guarantees a comparer's literal type equals the element type
/// it was declared under, so the stored-vs-literal comparison below is
/// always like-for-like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    /// Wildcard of a type: any payload, as long as the type tag agrees.
    RequiredType(ElementType),
    /// Integer elements whose payload relates to `value` via `op`.
    IntegerComparer { op: Operator, value: i64 },
    /// String elements whose payload relates to `value` via `op`.
    StringComparer { op: Operator, value: String },
}

impl Matcher {
    /// Test one stored element. Never fails: a type mismatch is `false`.
    pub fn matches(&self, element: &Value) -> bool {
        match self {
            Matcher::RequiredType(required) => element.element_type() == *required,
            Matcher::IntegerComparer { op, value } => match element {
                Value::Integer(stored) => op.holds(stored, value),
                Value::String(_) => false,
            },
            Matcher::StringComparer { op, value } => match element {
                Value::String(stored) => op.holds(stored.as_str(), value.as_str()),
                Value::Integer(_) => false,
            },
        }
    }
}

/// An ordered sequence of matchers; position `i` of the template
/// constrains position `i` of a candidate tuple.
///
/// Templates are immutable once built and exclusively own their matchers.
///
/// # Example
///
/// ```
/// use tuple_template::{ElementType, Matcher, Operator, Template, Value};
///
/// let template = Template::new(vec![
///     Matcher::RequiredType(ElementType::Integer),
///     Matcher::StringComparer {
///         op: Operator::Equal,
///         value: "red".to_string(),
///     },
/// ]);
///
/// assert!(template.matches(&[Value::Integer(42), Value::String("red".to_string())]));
/// assert!(!template.matches(&[Value::Integer(42), Value::String("blue".to_string())]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    elements: Vec<Matcher>,
}

impl Template {
    pub fn new(elements: Vec<Matcher>) -> Self {
        Template { elements }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The matchers in source order.
    pub fn iter(&self) -> slice::Iter<'_, Matcher> {
        self.elements.iter()
    }

    /// Whole-tuple test: a template of length `n` only matches tuples of
    /// length `n`, element-wise by position.
    pub fn matches(&self, tuple: &[Value]) -> bool {
        self.elements.len() == tuple.len()
            && self
                .elements
                .iter()
                .zip(tuple)
                .all(|(matcher, element)| matcher.matches(element))
    }
}

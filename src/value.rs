//! Typed elements stored in the tuple space.

use std::fmt;

/// Type tag shared by stored tuple elements and template matchers.
///
/// The set is closed: a matcher only ever compares values of its own
/// declared type, and the parser's type vocabulary is exactly these names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementType {
    Integer,
    String,
}

impl ElementType {
    /// The lowercase name used in template text and diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            ElementType::Integer => "integer",
            ElementType::String => "string",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// One stored tuple element: a payload tagged by its type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Integer(i64),
    String(String),
}

impl Value {
    pub fn element_type(&self) -> ElementType {
        match self {
            Value::Integer(_) => ElementType::Integer,
            Value::String(_) => ElementType::String,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_type_of_value() {
        assert_eq!(Value::Integer(7).element_type(), ElementType::Integer);
        assert_eq!(
            Value::String("red".to_string()).element_type(),
            ElementType::String
        );
    }

    #[test]
    fn test_type_names() {
        assert_eq!(ElementType::Integer.type_name(), "integer");
        assert_eq!(ElementType::String.to_string(), "string");
    }
}

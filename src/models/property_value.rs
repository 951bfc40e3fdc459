use std::fmt;

/// Native value for one row property.
///
/// This is the facade-side representation: decode produces it from the
/// wire property JSON, encode consumes it. `Null` stands for an unset
/// property (an empty select, a cleared number, a date without a start).
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// Plain text: titles, rich text, selects, URLs, emails, phone
    /// numbers, server timestamps
    Text(String),
    /// Numeric property
    Number(f64),
    /// Checkbox flag
    Boolean(bool),
    /// Start-date string of a date property
    Date(String),
    /// Option names of a multi-select, in remote order
    List(Vec<String>),
    /// Unset
    Null,
}

impl PropertyValue {
    pub fn is_null(&self) -> bool {
        matches!(self, PropertyValue::Null)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropertyValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            PropertyValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Variant name for diagnostics and error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::Text(_) => "text",
            PropertyValue::Number(_) => "number",
            PropertyValue::Boolean(_) => "boolean",
            PropertyValue::Date(_) => "date",
            PropertyValue::List(_) => "list",
            PropertyValue::Null => "null",
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Text(s) => f.write_str(s),
            PropertyValue::Number(n) => write!(f, "{}", n),
            PropertyValue::Boolean(b) => write!(f, "{}", b),
            PropertyValue::Date(s) => f.write_str(s),
            PropertyValue::List(items) => f.write_str(&items.join(", ")),
            PropertyValue::Null => f.write_str("null"),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Text(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Number(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Number(value as f64)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Boolean(value)
    }
}

impl From<Vec<String>> for PropertyValue {
    fn from(value: Vec<String>) -> Self {
        PropertyValue::List(value)
    }
}

impl From<Vec<&str>> for PropertyValue {
    fn from(value: Vec<&str>) -> Self {
        PropertyValue::List(value.into_iter().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_conversions() {
        assert_eq!(PropertyValue::from("abc"), PropertyValue::Text("abc".into()));
        assert_eq!(PropertyValue::from(1.5), PropertyValue::Number(1.5));
        assert_eq!(PropertyValue::from(3i64), PropertyValue::Number(3.0));
        assert_eq!(PropertyValue::from(true), PropertyValue::Boolean(true));
        assert_eq!(
            PropertyValue::from(vec!["a", "b"]),
            PropertyValue::List(vec!["a".into(), "b".into()])
        );
    }

    #[test]
    fn test_accessors() {
        assert_eq!(PropertyValue::Text("x".into()).as_text(), Some("x"));
        assert_eq!(PropertyValue::Number(2.0).as_number(), Some(2.0));
        assert_eq!(PropertyValue::Boolean(false).as_bool(), Some(false));
        assert!(PropertyValue::Null.is_null());
        assert_eq!(PropertyValue::Null.as_text(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(PropertyValue::Text("hi".into()).to_string(), "hi");
        assert_eq!(
            PropertyValue::List(vec!["a".into(), "b".into()]).to_string(),
            "a, b"
        );
        assert_eq!(PropertyValue::Null.to_string(), "null");
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Property type for collection schema fields.
///
/// Closed enumeration of the property encodings the codec understands.
/// Each variant maps to one JSON shape on the wire. A schema tag outside
/// this set is an unsupported-type failure at the point of use, never a
/// silent default.
///
/// # Example JSON
///
/// ```json
/// "select"        // scalar option
/// "multi_select"  // option set
/// "created_time"  // server-assigned, read-only
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    /// Primary rich-text column of a collection
    Title,
    /// Free-form rich text
    RichText,
    /// 64-bit floating point
    Number,
    /// Single named option
    Select,
    /// Ordered set of named options
    MultiSelect,
    /// Calendar date (start date string on the wire)
    Date,
    /// Boolean flag
    Checkbox,
    /// URL string
    Url,
    /// Email address string
    Email,
    /// Phone number string
    PhoneNumber,
    /// Creation timestamp, server-assigned
    CreatedTime,
    /// Last-edit timestamp, server-assigned
    LastEditedTime,
}

impl PropertyType {
    /// Parse a wire type tag. Returns `None` for tags outside the
    /// supported set.
    pub fn parse(tag: &str) -> Option<PropertyType> {
        match tag {
            "title" => Some(PropertyType::Title),
            "rich_text" => Some(PropertyType::RichText),
            "number" => Some(PropertyType::Number),
            "select" => Some(PropertyType::Select),
            "multi_select" => Some(PropertyType::MultiSelect),
            "date" => Some(PropertyType::Date),
            "checkbox" => Some(PropertyType::Checkbox),
            "url" => Some(PropertyType::Url),
            "email" => Some(PropertyType::Email),
            "phone_number" => Some(PropertyType::PhoneNumber),
            "created_time" => Some(PropertyType::CreatedTime),
            "last_edited_time" => Some(PropertyType::LastEditedTime),
            _ => None,
        }
    }

    /// The wire tag for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Title => "title",
            PropertyType::RichText => "rich_text",
            PropertyType::Number => "number",
            PropertyType::Select => "select",
            PropertyType::MultiSelect => "multi_select",
            PropertyType::Date => "date",
            PropertyType::Checkbox => "checkbox",
            PropertyType::Url => "url",
            PropertyType::Email => "email",
            PropertyType::PhoneNumber => "phone_number",
            PropertyType::CreatedTime => "created_time",
            PropertyType::LastEditedTime => "last_edited_time",
        }
    }

    /// Server-assigned types are never written back.
    pub fn is_read_only(&self) -> bool {
        matches!(
            self,
            PropertyType::CreatedTime | PropertyType::LastEditedTime
        )
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

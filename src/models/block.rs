use serde_json::{json, Value as JsonValue};

use crate::error::{NotebaseLinkError, Result};

/// Appendable page content, one variant per supported block kind.
///
/// Each variant has a type-specific encoder producing the wire shape the
/// block-append endpoint expects. Binary image payloads are not
/// representable; images are referenced by external URL only.
///
/// # Examples
///
/// ```rust
/// use notebase_link::BlockSpec;
///
/// let summary = BlockSpec::heading(2, "Results");
/// let body = BlockSpec::paragraph("accuracy improved by 0.4%");
/// let snippet = BlockSpec::code("print(acc)", "python");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum BlockSpec {
    Paragraph { text: String },
    /// Heading levels 1 through 3; anything else is an unsupported block
    /// type at encode time
    Heading { level: u8, text: String },
    Code { code: String, language: String },
    Callout { text: String, icon: String },
    Divider,
    /// Image referenced by a hosted URL
    ExternalImage { url: String },
}

impl BlockSpec {
    pub fn paragraph(text: impl Into<String>) -> Self {
        BlockSpec::Paragraph { text: text.into() }
    }

    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        BlockSpec::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn code(code: impl Into<String>, language: impl Into<String>) -> Self {
        BlockSpec::Code {
            code: code.into(),
            language: language.into(),
        }
    }

    pub fn callout(text: impl Into<String>, icon: impl Into<String>) -> Self {
        BlockSpec::Callout {
            text: text.into(),
            icon: icon.into(),
        }
    }

    pub fn divider() -> Self {
        BlockSpec::Divider
    }

    pub fn external_image(url: impl Into<String>) -> Self {
        BlockSpec::ExternalImage { url: url.into() }
    }

    /// Build a text-bearing block from a wire kind tag.
    ///
    /// Covers the kinds whose payload is a single text run; unknown tags
    /// fail with [`NotebaseLinkError::UnsupportedBlockType`].
    pub fn from_kind(kind: &str, text: &str) -> Result<Self> {
        match kind {
            "paragraph" => Ok(Self::paragraph(text)),
            "heading_1" => Ok(Self::heading(1, text)),
            "heading_2" => Ok(Self::heading(2, text)),
            "heading_3" => Ok(Self::heading(3, text)),
            "code" => Ok(Self::code(text, "plain text")),
            "callout" => Ok(Self::callout(text, "💡")),
            "divider" => Ok(Self::divider()),
            other => Err(NotebaseLinkError::UnsupportedBlockType(other.to_string())),
        }
    }

    /// The wire kind tag this block encodes to.
    pub fn kind(&self) -> String {
        match self {
            BlockSpec::Paragraph { .. } => "paragraph".to_string(),
            BlockSpec::Heading { level, .. } => format!("heading_{}", level),
            BlockSpec::Code { .. } => "code".to_string(),
            BlockSpec::Callout { .. } => "callout".to_string(),
            BlockSpec::Divider => "divider".to_string(),
            BlockSpec::ExternalImage { .. } => "image".to_string(),
        }
    }

    /// Whether the service accepts nested children under this kind.
    pub fn supports_children(&self) -> bool {
        matches!(
            self,
            BlockSpec::Paragraph { .. } | BlockSpec::Callout { .. }
        )
    }

    /// Encode to the wire shape of the block-append endpoint.
    pub fn to_json(&self) -> Result<JsonValue> {
        let (kind, payload) = self.payload()?;
        let mut block = serde_json::Map::new();
        block.insert("object".to_string(), json!("block"));
        block.insert("type".to_string(), JsonValue::String(kind.clone()));
        block.insert(kind, payload);
        Ok(JsonValue::Object(block))
    }

    /// Encode as a container with nested children.
    ///
    /// Fails with [`NotebaseLinkError::UnsupportedBlockType`] when this
    /// kind cannot hold children.
    pub fn to_json_with_children(&self, children: &[BlockSpec]) -> Result<JsonValue> {
        if !self.supports_children() {
            return Err(NotebaseLinkError::UnsupportedBlockType(format!(
                "'{}' cannot contain nested children",
                self.kind()
            )));
        }
        let encoded: Result<Vec<JsonValue>> =
            children.iter().map(BlockSpec::to_json).collect();

        let (kind, mut payload) = self.payload()?;
        if let Some(object) = payload.as_object_mut() {
            object.insert("children".to_string(), JsonValue::Array(encoded?));
        }
        let mut block = serde_json::Map::new();
        block.insert("object".to_string(), json!("block"));
        block.insert("type".to_string(), JsonValue::String(kind.clone()));
        block.insert(kind, payload);
        Ok(JsonValue::Object(block))
    }

    fn payload(&self) -> Result<(String, JsonValue)> {
        match self {
            BlockSpec::Paragraph { text } => Ok((
                "paragraph".to_string(),
                json!({ "rich_text": rich_text(text) }),
            )),
            BlockSpec::Heading { level, text } => {
                if !(1..=3).contains(level) {
                    return Err(NotebaseLinkError::UnsupportedBlockType(format!(
                        "heading_{}",
                        level
                    )));
                }
                Ok((
                    format!("heading_{}", level),
                    json!({ "rich_text": rich_text(text) }),
                ))
            }
            BlockSpec::Code { code, language } => Ok((
                "code".to_string(),
                json!({ "rich_text": rich_text(code), "language": language }),
            )),
            BlockSpec::Callout { text, icon } => Ok((
                "callout".to_string(),
                json!({
                    "rich_text": rich_text(text),
                    "icon": {"type": "emoji", "emoji": icon}
                }),
            )),
            BlockSpec::Divider => Ok(("divider".to_string(), json!({}))),
            BlockSpec::ExternalImage { url } => Ok((
                "image".to_string(),
                json!({ "type": "external", "external": {"url": url} }),
            )),
        }
    }
}

/// A single-segment rich text run.
fn rich_text(text: &str) -> JsonValue {
    json!([{ "type": "text", "text": {"content": text} }])
}

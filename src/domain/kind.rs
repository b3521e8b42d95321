use std::fmt;
use std::str::FromStr;

use super::error::ParseKindError;

/// The kind selector shown next to every field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    String,
    Number,
    Float,
    Boolean,
    Array,
    Nested,
    ObjectId,
}

impl FieldKind {
    pub const ALL: [FieldKind; 7] = [
        FieldKind::String,
        FieldKind::Number,
        FieldKind::Float,
        FieldKind::Boolean,
        FieldKind::Array,
        FieldKind::Nested,
        FieldKind::ObjectId,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Number => "number",
            FieldKind::Float => "float",
            FieldKind::Boolean => "boolean",
            FieldKind::Array => "array",
            FieldKind::Nested => "nested",
            FieldKind::ObjectId => "objectId",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "string" => Ok(FieldKind::String),
            "number" => Ok(FieldKind::Number),
            "float" => Ok(FieldKind::Float),
            "boolean" => Ok(FieldKind::Boolean),
            "array" => Ok(FieldKind::Array),
            "nested" => Ok(FieldKind::Nested),
            "objectId" | "object id" => Ok(FieldKind::ObjectId),
            other => Err(ParseKindError::UnknownKind(other.to_string())),
        }
    }
}

/// Element kind of an `array` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrayItemKind {
    String,
    Number,
    Float,
    Boolean,
    Nested,
}

impl ArrayItemKind {
    pub const ALL: [ArrayItemKind; 5] = [
        ArrayItemKind::String,
        ArrayItemKind::Number,
        ArrayItemKind::Float,
        ArrayItemKind::Boolean,
        ArrayItemKind::Nested,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ArrayItemKind::String => "string",
            ArrayItemKind::Number => "number",
            ArrayItemKind::Float => "float",
            ArrayItemKind::Boolean => "boolean",
            ArrayItemKind::Nested => "nested",
        }
    }

    /// The scalar element kind, or `None` for arrays of nested documents.
    pub fn scalar(self) -> Option<ScalarItem> {
        match self {
            ArrayItemKind::String => Some(ScalarItem::String),
            ArrayItemKind::Number => Some(ScalarItem::Number),
            ArrayItemKind::Float => Some(ScalarItem::Float),
            ArrayItemKind::Boolean => Some(ScalarItem::Boolean),
            ArrayItemKind::Nested => None,
        }
    }
}

impl fmt::Display for ArrayItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArrayItemKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "string" => Ok(ArrayItemKind::String),
            "number" => Ok(ArrayItemKind::Number),
            "float" => Ok(ArrayItemKind::Float),
            "boolean" => Ok(ArrayItemKind::Boolean),
            "nested" => Ok(ArrayItemKind::Nested),
            other => Err(ParseKindError::UnknownItemKind(other.to_string())),
        }
    }
}

/// Element kinds an array can hold without carrying children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScalarItem {
    #[default]
    String,
    Number,
    Float,
    Boolean,
}

impl From<ScalarItem> for ArrayItemKind {
    fn from(item: ScalarItem) -> Self {
        match item {
            ScalarItem::String => ArrayItemKind::String,
            ScalarItem::Number => ArrayItemKind::Number,
            ScalarItem::Float => ArrayItemKind::Float,
            ScalarItem::Boolean => ArrayItemKind::Boolean,
        }
    }
}

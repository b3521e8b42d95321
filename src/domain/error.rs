use thiserror::Error;

use super::FieldId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseKindError {
    #[error("unknown field kind '{0}' (expected string, number, float, boolean, array, nested or objectId)")]
    UnknownKind(String),

    #[error("unknown array item kind '{0}' (expected string, number, float, boolean or nested)")]
    UnknownItemKind(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForestError {
    #[error("field id {id} appears {count} times in the forest")]
    DuplicateId { id: FieldId, count: usize },
}

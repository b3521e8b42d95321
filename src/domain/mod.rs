mod error;
mod field;
mod id;
mod kind;

pub use error::{ForestError, ParseKindError};
pub use field::{Field, FieldShape};
pub use id::FieldId;
pub use kind::{ArrayItemKind, FieldKind, ScalarItem};

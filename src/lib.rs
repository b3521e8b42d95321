#![deny(rust_2018_idioms)]

mod domain;
mod forest;
mod io;
mod materialize;
mod session;

pub use domain::{
    ArrayItemKind, Field, FieldId, FieldKind, FieldShape, ForestError, ParseKindError, ScalarItem,
};
pub use forest::{FieldPatch, Forest};
pub use io::{DocumentFormat, OutputDestination, UnknownFormatError, emit, render_document};
pub use materialize::{Document, default_value, materialize, materialize_fields, materialize_value};
pub use session::{BuilderOptions, EditIntent, Outcome, SchemaBuilder, apply_intent};

pub mod prelude {
    pub use super::{
        EditIntent, Field, FieldId, FieldKind, FieldPatch, FieldShape, Forest, SchemaBuilder,
        materialize,
    };
}

//! Stateful wrapper that owns one forest on behalf of a front end.

mod intent;
mod options;

use std::mem;

use anyhow::Result;
use tracing::debug;

use crate::domain::FieldId;
use crate::forest::Forest;
use crate::io::render_document;
use crate::materialize::{Document, materialize};

pub use intent::{EditIntent, apply_intent};
pub use options::BuilderOptions;

/// Result of applying one intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Outcome {
    /// The forest differs from the one before the intent.
    pub changed: bool,
    /// Field created by `AddRoot` or `AddChild`.
    pub created: Option<FieldId>,
}

/// Holds the authoritative forest and the document derived from it.
///
/// The document is recomputed only when an intent actually changes the
/// forest.
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    forest: Forest,
    document: Document,
    revision: u64,
    options: BuilderOptions,
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::from_forest(Forest::new())
    }

    pub fn from_forest(forest: Forest) -> Self {
        let document = materialize(&forest);
        Self {
            forest,
            document,
            revision: 0,
            options: BuilderOptions::default(),
        }
    }

    pub fn with_options(mut self, options: BuilderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &BuilderOptions {
        &self.options
    }

    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Number of effective changes applied so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn apply(&mut self, intent: EditIntent) -> Outcome {
        let current = mem::take(&mut self.forest);
        let before = current.clone();
        let (next, created) = apply_intent(current, &intent);
        let changed = next != before;
        self.forest = next;
        if changed {
            self.revision += 1;
            self.document = materialize(&self.forest);
        }
        debug!(?intent, changed, revision = self.revision, "applied edit intent");
        Outcome { changed, created }
    }

    pub fn apply_all(&mut self, intents: impl IntoIterator<Item = EditIntent>) -> Vec<Outcome> {
        intents.into_iter().map(|intent| self.apply(intent)).collect()
    }

    /// Document rendered with the session's preview settings.
    pub fn preview(&self) -> Result<String> {
        render_document(&self.document, self.options.format, self.options.pretty)
    }
}

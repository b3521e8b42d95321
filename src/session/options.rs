use crate::io::DocumentFormat;

/// Preview settings for a [`super::SchemaBuilder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderOptions {
    pub format: DocumentFormat,
    pub pretty: bool,
}

impl Default for BuilderOptions {
    fn default() -> Self {
        Self {
            format: DocumentFormat::Json,
            pretty: true,
        }
    }
}

impl BuilderOptions {
    pub fn with_format(mut self, format: DocumentFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

mod format;
mod output;

pub use format::{DocumentFormat, UnknownFormatError};
pub use output::{OutputDestination, emit, render_document};

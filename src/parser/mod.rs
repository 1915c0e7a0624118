pub mod html;

pub use html::{HtmlScanner, ScanState};

/// A run of document text found between tags on a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    pub line: usize,
}

//! Parsing options and configuration.

/// Options for parsing containers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Load artboards in parallel
    pub parallel: bool,

    /// Reject containers whose `mimetype` entry names another format
    pub verify_mime_type: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable parallel artboard loading.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Load artboards in parallel.
    pub fn parallel(mut self) -> Self {
        self.parallel = true;
        self
    }

    /// Load artboards one after another, in manifest order.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Enable or disable the mime type check.
    pub fn with_mime_check(mut self, verify: bool) -> Self {
        self.verify_mime_type = verify;
        self
    }
}

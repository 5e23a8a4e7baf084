use crate::engine::DEFAULT_CONTEXT_LINES;

/// Settings for the file-level entry points and the `linediff` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOptions {
    pub context_lines: usize,
    /// Prepend the `---`/`+++` header so the output can be fed to `patch(1)`.
    pub patch_header: bool,
    pub old_label: Option<String>,
    pub new_label: Option<String>,
}

impl Default for DiffOptions {
    fn default() -> Self {
        DiffOptions {
            context_lines: DEFAULT_CONTEXT_LINES,
            patch_header: false,
            old_label: None,
            new_label: None,
        }
    }
}

impl DiffOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_context_lines(mut self, context_lines: usize) -> Self {
        self.context_lines = context_lines;
        self
    }

    pub fn with_patch_header(mut self, patch_header: bool) -> Self {
        self.patch_header = patch_header;
        self
    }

    /// Names shown in the patch header instead of the file paths.
    pub fn with_labels(mut self, old_label: Option<String>, new_label: Option<String>) -> Self {
        self.old_label = old_label;
        self.new_label = new_label;
        self
    }
}

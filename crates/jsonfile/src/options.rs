/// Output layout for encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Compact output - no whitespace between tokens
    #[default]
    Compact,
    /// Pretty-printed output - newlines plus fixed-width indentation
    Indented,
}

#[derive(Debug, Clone)]
pub struct Options {
    pub layout: Layout,
    /// Indentation size for `Layout::Indented` (default: 4 spaces)
    pub indent: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            indent: 4,
        }
    }
}

impl Options {
    pub fn compact() -> Self {
        Self {
            layout: Layout::Compact,
            ..Self::default()
        }
    }

    pub fn indented() -> Self {
        Self {
            layout: Layout::Indented,
            ..Self::default()
        }
    }
}

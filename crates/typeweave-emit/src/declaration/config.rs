//! Configuration types for declaration printing.

/// Configuration for [`TypeScriptPrinter`](super::TypeScriptPrinter).
#[derive(Clone, Debug)]
pub struct DeclarationConfig {
    /// Whether to export type aliases
    pub export: bool,
    /// Whether object properties are `readonly`
    pub readonly: bool,
    /// Spaces per indentation level in multi-line type literals
    pub indent: usize,
}

impl Default for DeclarationConfig {
    fn default() -> Self {
        Self {
            export: true,
            readonly: false,
            indent: 2,
        }
    }
}

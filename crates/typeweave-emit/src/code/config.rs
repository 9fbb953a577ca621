//! Configuration types for code emission.

/// Target validation library.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Dialect {
    /// `z.string()`, `z.object({ ... })`
    #[default]
    Zod,
    /// `Type.String()`, `Type.Object({ ... })`
    TypeBox,
}

impl Dialect {
    /// Name used in unsupported-feature errors.
    pub fn name(self) -> &'static str {
        match self {
            Dialect::Zod => "Zod",
            Dialect::TypeBox => "TypeBox",
        }
    }
}

/// Configuration for code emission.
#[derive(Clone, Debug, Default)]
pub struct CodeConfig {
    /// Target library
    pub dialect: Dialect,
    /// Whether to export emitted declarations
    pub export: bool,
}

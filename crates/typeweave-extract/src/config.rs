//! Configuration types for extraction.

/// Which named types become entries in the definition map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DefinitionPolicy {
    /// Register every aliased or declared named type.
    #[default]
    Named,
    /// Register aliased types only. Declared interfaces are inlined unless
    /// they recur through themselves.
    AliasesOnly,
    /// Keep only definitions that are part of a reference cycle; inline the rest.
    RecursiveOnly,
}

/// Configuration for [`Extractor`](crate::Extractor).
#[derive(Clone, Debug, Default)]
pub struct ExtractConfig {
    /// Definition registration policy
    pub policy: DefinitionPolicy,
}

impl ExtractConfig {
    pub fn with_policy(policy: DefinitionPolicy) -> Self {
        Self { policy }
    }
}

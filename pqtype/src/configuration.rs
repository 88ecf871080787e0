/// What canonicalization does with types it does not model structurally.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OpaquePolicy {
    /// Pass them through as `Opaque` and log each occurrence at debug level.
    Allow,
    /// Fail with `TypeError::UnsupportedType`.
    Reject,
}

impl Default for OpaquePolicy {
    fn default() -> Self {
        Self::Allow
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CanonicalizeConfiguration {
    pub opaque_policy: OpaquePolicy,
}

pub static DEFAULT_CANONICALIZE_CONFIGURATION: CanonicalizeConfiguration =
    CanonicalizeConfiguration {
        opaque_policy: OpaquePolicy::Allow,
    };

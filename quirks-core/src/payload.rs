//! The apply/undo pair an [`Override`](crate::Override) wraps.

/// Error reported by a payload. Opaque to the registry; surfaced to callers
/// as the source of [`OverrideError::ActivationFailure`](crate::OverrideError).
pub type PayloadError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A reversible side effect.
///
/// Contract: `apply` followed by `undo` restores the prior observable
/// behaviour. The owning override guarantees each is called at most once
/// per transition, so implementations need not guard against being
/// re-applied while already applied.
///
/// Payloads run while the owning override's state lock is held and must not
/// call back into that same override.
pub trait ActivationPayload: Send + Sync {
    fn apply(&self) -> Result<(), PayloadError>;
    fn undo(&self) -> Result<(), PayloadError>;
}

/// Payload built from two closures.
pub struct FnPayload<A, U> {
    apply: A,
    undo: U,
}

impl<A, U> FnPayload<A, U>
where
    A: Fn() -> Result<(), PayloadError> + Send + Sync,
    U: Fn() -> Result<(), PayloadError> + Send + Sync,
{
    pub fn new(apply: A, undo: U) -> Self {
        Self { apply, undo }
    }
}

impl<A, U> ActivationPayload for FnPayload<A, U>
where
    A: Fn() -> Result<(), PayloadError> + Send + Sync,
    U: Fn() -> Result<(), PayloadError> + Send + Sync,
{
    fn apply(&self) -> Result<(), PayloadError> {
        (self.apply)()
    }

    fn undo(&self) -> Result<(), PayloadError> {
        (self.undo)()
    }
}

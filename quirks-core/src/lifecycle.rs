//! The per-override state machine.
//!
//! Every variant shares the same transitions; only the payload differs.
//! A single mutex guards the state *and* the payload call, so a
//! check-then-apply sequence is atomic: two threads racing to enable the
//! same override produce one `apply`, not two.

use parking_lot::Mutex;

use crate::error::{OverrideError, Phase};
use crate::payload::ActivationPayload;
use crate::types::{OverrideName, OverrideState};

struct Slot {
    state: OverrideState,
    last_error: Option<String>,
}

/// A named, reversible unit of behaviour change.
pub struct Override {
    name: OverrideName,
    payload: Box<dyn ActivationPayload>,
    slot: Mutex<Slot>,
}

impl std::fmt::Debug for Override {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Override")
            .field("name", &self.name)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

impl Override {
    /// A fresh override in [`OverrideState::Unknown`]. Nothing is applied.
    pub fn new(name: impl Into<OverrideName>, payload: impl ActivationPayload + 'static) -> Self {
        Self {
            name: name.into(),
            payload: Box::new(payload),
            slot: Mutex::new(Slot {
                state: OverrideState::Unknown,
                last_error: None,
            }),
        }
    }

    pub fn name(&self) -> &OverrideName {
        &self.name
    }

    pub fn state(&self) -> OverrideState {
        self.slot.lock().state
    }

    /// Message of the most recent apply/undo failure, cleared by the next
    /// successful transition.
    pub fn last_error(&self) -> Option<String> {
        self.slot.lock().last_error.clone()
    }

    /// Apply the payload and move to `Enabled`. No-op when already enabled.
    ///
    /// On payload failure the override ends in `Failed` and the error is
    /// returned; calling `enable` again retries the apply.
    pub fn enable(&self) -> Result<(), OverrideError> {
        let mut slot = self.slot.lock();
        if slot.state == OverrideState::Enabled {
            tracing::debug!(name = %self.name, "already enabled");
            return Ok(());
        }
        self.run(&mut slot, Phase::Apply)
    }

    /// Undo the payload and move to `Disabled`.
    ///
    /// No-op from `Unknown` (nothing was ever applied) and from `Disabled`.
    /// From `Failed` the undo is attempted so a partially applied payload can
    /// clean up.
    pub fn disable(&self) -> Result<(), OverrideError> {
        let mut slot = self.slot.lock();
        match slot.state {
            OverrideState::Unknown | OverrideState::Disabled => {
                tracing::debug!(name = %self.name, state = %slot.state, "disable is a no-op");
                Ok(())
            }
            OverrideState::Enabled | OverrideState::Failed => self.run(&mut slot, Phase::Undo),
        }
    }

    /// Lazy activation used by registry lookups: enable only if the override
    /// has never been touched. Returns `true` if this call ran the apply.
    pub(crate) fn activate_if_unknown(&self) -> Result<bool, OverrideError> {
        let mut slot = self.slot.lock();
        if slot.state != OverrideState::Unknown {
            return Ok(false);
        }
        self.run(&mut slot, Phase::Apply).map(|()| true)
    }

    fn run(&self, slot: &mut Slot, phase: Phase) -> Result<(), OverrideError> {
        let result = match phase {
            Phase::Apply => self.payload.apply(),
            Phase::Undo => self.payload.undo(),
        };
        match result {
            Ok(()) => {
                let from = slot.state;
                slot.state = match phase {
                    Phase::Apply => OverrideState::Enabled,
                    Phase::Undo => OverrideState::Disabled,
                };
                slot.last_error = None;
                tracing::info!(name = %self.name, %from, to = %slot.state, "override transition");
                Ok(())
            }
            Err(source) => {
                slot.state = OverrideState::Failed;
                slot.last_error = Some(source.to_string());
                tracing::warn!(
                    name = %self.name,
                    %phase,
                    error = %source,
                    "override payload failed"
                );
                Err(OverrideError::ActivationFailure {
                    name: self.name.clone(),
                    phase,
                    source,
                })
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

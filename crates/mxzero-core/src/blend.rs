//! Lock-free blend coefficient shared between the audio thread and the
//! license check.
//!
//! The coefficient is an `f32` bit-cast into an `AtomicU32`. The license
//! check stores with `Release`, the audio thread loads with `Acquire` once
//! per block. Only two values are ever stored: [`ALPHA_LOCKED`] and
//! [`ALPHA_UNLOCKED`].

#[cfg(not(feature = "std"))]
use alloc::sync::Arc;
use core::sync::atomic::{AtomicU32, Ordering};
#[cfg(feature = "std")]
use std::sync::Arc;

/// Blend coefficient while gating is active.
pub const ALPHA_LOCKED: f32 = 1.0;

/// Blend coefficient once gating has been bypassed.
pub const ALPHA_UNLOCKED: f32 = 0.0;

/// Process-wide gating state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateState {
    /// Periodic gating is audible (alpha = 1).
    Locked,
    /// Gating is bypassed (alpha = 0). Terminal.
    Unlocked,
}

/// Handle to the shared blend coefficient.
///
/// Cheap to clone; every clone refers to the same coefficient. Starts
/// [`GateState::Locked`]. The only transition is [`unlock`](Self::unlock),
/// which is one-way.
///
/// # Example
///
/// ```rust
/// use mxzero_core::{BlendControl, GateState};
///
/// let blend = BlendControl::new();
/// let audio_side = blend.clone();
/// assert_eq!(audio_side.state(), GateState::Locked);
///
/// assert!(blend.unlock());
/// assert_eq!(audio_side.alpha(), 0.0);
/// assert!(!blend.unlock()); // already unlocked
/// ```
#[derive(Clone, Debug)]
pub struct BlendControl {
    alpha: Arc<AtomicU32>,
}

impl BlendControl {
    /// Create a locked coefficient (alpha = 1).
    pub fn new() -> Self {
        Self {
            alpha: Arc::new(AtomicU32::new(ALPHA_LOCKED.to_bits())),
        }
    }

    /// Current blend coefficient (lock-free).
    #[inline]
    pub fn alpha(&self) -> f32 {
        f32::from_bits(self.alpha.load(Ordering::Acquire))
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> GateState {
        if self.alpha() == ALPHA_UNLOCKED {
            GateState::Unlocked
        } else {
            GateState::Locked
        }
    }

    /// Whether gating has been bypassed.
    #[inline]
    pub fn is_unlocked(&self) -> bool {
        self.state() == GateState::Unlocked
    }

    /// Bypass gating for every holder of this coefficient.
    ///
    /// Returns `true` if this call performed the `Locked → Unlocked`
    /// transition, `false` if it was already unlocked.
    pub fn unlock(&self) -> bool {
        let previous = self.alpha.swap(ALPHA_UNLOCKED.to_bits(), Ordering::AcqRel);
        let transitioned = f32::from_bits(previous) != ALPHA_UNLOCKED;

        #[cfg(feature = "tracing")]
        if transitioned {
            tracing::info!("gate unlocked: blend coefficient set to {ALPHA_UNLOCKED}");
        }

        transitioned
    }
}

impl Default for BlendControl {
    fn default() -> Self {
        Self::new()
    }
}

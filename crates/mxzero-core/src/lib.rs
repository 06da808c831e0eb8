//! mxzero Core - real-time trial gate
//!
//! This crate holds everything that runs on the audio thread: a duty-cycle
//! envelope, a click-free gain smoother, the blend mixer, and the
//! [`TrialGate`] processor that wires them together. It performs no I/O and
//! no allocation while processing.
//!
//! # Signal Flow
//!
//! ```text
//! DutyCycleEnvelope ──target──▶ GainSmoother ──gain──▶ mixer ──▶ output
//!                                                        ▲
//!                              input ────────────────────┤
//!                              BlendControl (alpha) ─────┘
//! ```
//!
//! Per sample and channel the mixer computes
//! `alpha * gain * input + (1 - alpha) * input`. `alpha` starts at 1.0
//! (gated) and drops to 0.0 (bypassed) when the license check, which lives
//! in `mxzero-license`, unlocks the shared [`BlendControl`].
//!
//! # no_std Support
//!
//! Disable the default `std` feature for embedded targets:
//!
//! ```toml
//! [dependencies]
//! mxzero-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use mxzero_core::{AudioProcessor, GateConfig, GateState, TrialGate};
//!
//! let mut gate = TrialGate::new(GateConfig::default())?;
//! gate.prepare(44100.0, 512)?;
//!
//! let mut left = vec![0.25f32; 512];
//! let mut right = vec![0.25f32; 512];
//! gate.process(&mut [&mut left, &mut right]);
//!
//! assert_eq!(gate.state(), GateState::Locked);
//! # Ok::<(), mxzero_core::GateError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod blend;
pub mod config;
pub mod envelope;
pub mod error;
pub mod gate;
pub mod mixer;
pub mod processor;
pub mod smoothing;

// Re-export main types at crate root
pub use blend::{ALPHA_LOCKED, ALPHA_UNLOCKED, BlendControl, GateState};
pub use config::{
    DEFAULT_DUTY_CYCLE, DEFAULT_LOW_FREQUENCY_HZ, DEFAULT_RAMP_SECONDS, GateConfig, RampShape,
};
pub use envelope::DutyCycleEnvelope;
pub use error::GateError;
pub use gate::TrialGate;
pub use mixer::{blend_frame, blend_sample};
pub use processor::{AudioProcessor, StreamConfig};
pub use smoothing::GainSmoother;

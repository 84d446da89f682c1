//! Validation gate for reel.
//!
//! Every create and update payload passes through the gate before the store
//! is touched. The gate runs a pipeline of stages (required fields, plus any
//! configured stricter checks) and produces an accept/reject verdict with a
//! per-stage audit trail. It never mutates anything itself.
//!
//! # Quick Start
//!
//! ```rust
//! use reel_gate::{Intent, ValidationGate, Verdict, REQUIRED_FIELDS_MESSAGE};
//! use reel_types::MoviePayload;
//!
//! let gate = ValidationGate::default();
//! let payload: MoviePayload = serde_json::from_str(r#"{"title": "X", "genre": "Y"}"#).unwrap();
//! let result = gate.validate(Intent::Create, &payload).unwrap();
//! assert_eq!(result.verdict, Verdict::Reject { reason: REQUIRED_FIELDS_MESSAGE.into() });
//! ```

pub mod config;
pub mod error;
pub mod gate;
pub mod stage;
pub mod stages;

// Re-exports for convenience.
pub use config::GateConfig;
pub use error::GateError;
pub use gate::{GateResult, ValidationGate, Verdict};
pub use stage::{GateContext, GateStage, Intent, MutationProposal, StageDecision, StageResult};
pub use stages::{BlankTextStage, RequiredFieldsStage, YearRangeStage, REQUIRED_FIELDS_MESSAGE};

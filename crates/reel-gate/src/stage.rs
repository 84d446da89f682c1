use std::fmt;
use std::time::Duration;

use reel_types::MoviePayload;

use crate::error::GateError;

// ---------------------------------------------------------------------------
// Intent / MutationProposal
// ---------------------------------------------------------------------------

/// Which mutation a payload is about to drive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Intent {
    /// A new record; every attribute is required.
    Create,
    /// A partial update of an existing record.
    Update,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => write!(f, "create"),
            Self::Update => write!(f, "update"),
        }
    }
}

/// A payload together with the mutation it is meant for.
#[derive(Clone, Copy, Debug)]
pub struct MutationProposal<'a> {
    pub intent: Intent,
    pub payload: &'a MoviePayload,
}

impl<'a> MutationProposal<'a> {
    pub fn new(intent: Intent, payload: &'a MoviePayload) -> Self {
        Self { intent, payload }
    }
}

// ---------------------------------------------------------------------------
// StageDecision
// ---------------------------------------------------------------------------

/// The outcome of a single gate stage evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StageDecision {
    /// The stage passed; proceed to the next stage.
    Pass,
    /// The stage failed; the payload must not reach the store.
    Fail { reason: String },
}

impl StageDecision {
    /// Returns `true` if the decision is `Pass`.
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }
}

// ---------------------------------------------------------------------------
// StageResult
// ---------------------------------------------------------------------------

/// Recorded result from a completed stage evaluation.
#[derive(Clone, Debug)]
pub struct StageResult {
    /// Name of the stage that produced this result.
    pub stage_name: String,
    /// Whether the stage passed.
    pub passed: bool,
    /// Populated on failure.
    pub reason: Option<String>,
    /// Wall-clock time the stage took to evaluate.
    pub elapsed: Duration,
}

// ---------------------------------------------------------------------------
// GateContext
// ---------------------------------------------------------------------------

/// Per-evaluation state shared by the stages.
#[derive(Debug, Default)]
pub struct GateContext {
    /// Results from stages that have already run in this evaluation.
    pub previous_stages: Vec<StageResult>,
}

// ---------------------------------------------------------------------------
// GateStage trait
// ---------------------------------------------------------------------------

/// A single evaluation stage in the gate pipeline.
///
/// Stages are evaluated in order. Each stage receives the proposal and the
/// shared context, and returns a pass/fail decision. Stages must be free of
/// side effects.
///
/// The trait is object-safe and `Send + Sync` so stages can be stored in
/// a `Vec<Box<dyn GateStage>>`.
pub trait GateStage: Send + Sync {
    /// Human-readable name of this stage (e.g., "required-fields").
    fn name(&self) -> &str;

    /// Evaluate the proposal and return a decision.
    fn evaluate(
        &self,
        proposal: &MutationProposal<'_>,
        context: &GateContext,
    ) -> Result<StageDecision, GateError>;
}

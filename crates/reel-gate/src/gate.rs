use std::time::{Duration, Instant};

use reel_types::MoviePayload;
use tracing::debug;

use crate::config::GateConfig;
use crate::error::GateError;
use crate::stage::{GateContext, GateStage, Intent, MutationProposal, StageDecision, StageResult};
use crate::stages::{BlankTextStage, RequiredFieldsStage, YearRangeStage};

// ---------------------------------------------------------------------------
// Verdict / GateResult
// ---------------------------------------------------------------------------

/// Accept or reject, with the reason a rejection is reported under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Accept,
    Reject { reason: String },
}

impl Verdict {
    /// Returns `true` if the payload may proceed to the store.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accept)
    }
}

/// The outcome of running a payload through the full gate pipeline.
#[derive(Clone, Debug)]
pub struct GateResult {
    /// The final decision.
    pub verdict: Verdict,
    /// Per-stage results in evaluation order.
    pub stage_results: Vec<StageResult>,
    /// Total wall-clock time for the pipeline evaluation.
    pub elapsed: Duration,
}

impl GateResult {
    /// Returns `true` if the payload was accepted.
    pub fn is_accepted(&self) -> bool {
        self.verdict.is_accepted()
    }
}

// ---------------------------------------------------------------------------
// ValidationGate
// ---------------------------------------------------------------------------

/// The validation gate: a pipeline of stages that every create and update
/// payload passes through before the store is touched.
///
/// The gate only decides. Callers branch on the returned [`Verdict`]; a
/// rejection must never be followed by a store mutation.
pub struct ValidationGate {
    stages: Vec<Box<dyn GateStage>>,
    config: GateConfig,
}

impl ValidationGate {
    /// Create a new gate with the given configuration.
    ///
    /// Starts with an empty pipeline. Use [`Self::add_stage`] to add stages,
    /// or [`Self::with_default_stages`] for the standard pipeline.
    pub fn new(config: GateConfig) -> Self {
        Self {
            stages: Vec::new(),
            config,
        }
    }

    /// Create a gate with the standard pipeline:
    /// RequiredFields -> BlankText (if enabled) -> YearRange (if bounded)
    pub fn with_default_stages(config: GateConfig) -> Self {
        let mut gate = Self::new(config);
        gate.add_stage(Box::new(RequiredFieldsStage));
        if gate.config.reject_blank_text {
            gate.add_stage(Box::new(BlankTextStage));
        }
        if gate.config.has_year_bounds() {
            let stage = YearRangeStage::new(gate.config.min_year, gate.config.max_year);
            gate.add_stage(Box::new(stage));
        }
        gate
    }

    /// Append a stage to the end of the pipeline.
    pub fn add_stage(&mut self, stage: Box<dyn GateStage>) {
        self.stages.push(stage);
    }

    /// The current configuration.
    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Number of stages in the pipeline.
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Validate a payload for the given intent.
    pub fn validate(
        &self,
        intent: Intent,
        payload: &MoviePayload,
    ) -> Result<GateResult, GateError> {
        self.evaluate(&MutationProposal::new(intent, payload))
    }

    /// Evaluate a proposal through the full pipeline.
    ///
    /// The pipeline is **fail-fast**: the first stage that fails stops
    /// evaluation and produces a `Reject` verdict carrying that stage's
    /// reason. If all stages pass the verdict is `Accept`.
    pub fn evaluate(&self, proposal: &MutationProposal<'_>) -> Result<GateResult, GateError> {
        let pipeline_start = Instant::now();
        let mut context = GateContext::default();
        let mut stage_results = Vec::with_capacity(self.stages.len());

        for stage in &self.stages {
            let stage_start = Instant::now();
            let decision = stage.evaluate(proposal, &context)?;
            let elapsed = stage_start.elapsed();

            let reason = match &decision {
                StageDecision::Pass => None,
                StageDecision::Fail { reason } => Some(reason.clone()),
            };
            debug!(
                stage = stage.name(),
                intent = %proposal.intent,
                passed = decision.is_pass(),
                ?elapsed,
                "gate stage evaluated"
            );

            let result = StageResult {
                stage_name: stage.name().to_string(),
                passed: decision.is_pass(),
                reason,
                elapsed,
            };
            stage_results.push(result.clone());
            context.previous_stages.push(result);

            if let StageDecision::Fail { reason } = decision {
                return Ok(GateResult {
                    verdict: Verdict::Reject { reason },
                    stage_results,
                    elapsed: pipeline_start.elapsed(),
                });
            }
        }

        Ok(GateResult {
            verdict: Verdict::Accept,
            stage_results,
            elapsed: pipeline_start.elapsed(),
        })
    }
}

impl Default for ValidationGate {
    fn default() -> Self {
        Self::with_default_stages(GateConfig::default())
    }
}

impl std::fmt::Debug for ValidationGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.stages.iter().map(|s| s.name()).collect();
        f.debug_struct("ValidationGate")
            .field("stages", &names)
            .field("config", &self.config)
            .finish()
    }
}

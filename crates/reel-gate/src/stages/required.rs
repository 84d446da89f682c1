use crate::error::GateError;
use crate::stage::{GateContext, GateStage, Intent, MutationProposal, StageDecision};

/// Reason reported when a create payload lacks an attribute.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Title, genre, and year are required.";

/// Required-field stage.
///
/// A create must carry a truthy `title`, `genre` and `year`. Updates are
/// partial, so nothing is required of them here.
pub struct RequiredFieldsStage;

impl GateStage for RequiredFieldsStage {
    fn name(&self) -> &str {
        "required-fields"
    }

    fn evaluate(
        &self,
        proposal: &MutationProposal<'_>,
        _context: &GateContext,
    ) -> Result<StageDecision, GateError> {
        if proposal.intent == Intent::Update {
            return Ok(StageDecision::Pass);
        }

        let payload = proposal.payload;
        if payload.title().is_none() || payload.genre().is_none() || payload.year().is_none() {
            return Ok(StageDecision::Fail {
                reason: REQUIRED_FIELDS_MESSAGE.into(),
            });
        }

        Ok(StageDecision::Pass)
    }
}

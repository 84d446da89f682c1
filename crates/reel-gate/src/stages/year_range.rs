use crate::error::GateError;
use crate::stage::{GateContext, GateStage, MutationProposal, StageDecision};

/// Bounds check on a present year.
///
/// Either bound may be open. A falsy year is not checked here.
pub struct YearRangeStage {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl YearRangeStage {
    pub fn new(min: Option<i64>, max: Option<i64>) -> Self {
        Self { min, max }
    }
}

impl GateStage for YearRangeStage {
    fn name(&self) -> &str {
        "year-range"
    }

    fn evaluate(
        &self,
        proposal: &MutationProposal<'_>,
        _context: &GateContext,
    ) -> Result<StageDecision, GateError> {
        let Some(year) = proposal.payload.year() else {
            return Ok(StageDecision::Pass);
        };

        let reason = match (self.min, self.max) {
            (Some(min), Some(max)) if year < min || year > max => {
                format!("year must be between {min} and {max}")
            }
            (Some(min), None) if year < min => format!("year must be at least {min}"),
            (None, Some(max)) if year > max => format!("year must be at most {max}"),
            _ => return Ok(StageDecision::Pass),
        };

        Ok(StageDecision::Fail { reason })
    }
}

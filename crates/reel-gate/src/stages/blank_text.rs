use crate::error::GateError;
use crate::stage::{GateContext, GateStage, MutationProposal, StageDecision};

/// Rejects titles and genres made only of whitespace.
///
/// Applies to both creates and updates. Absent fields are left to the
/// required-field stage.
pub struct BlankTextStage;

impl GateStage for BlankTextStage {
    fn name(&self) -> &str {
        "blank-text"
    }

    fn evaluate(
        &self,
        proposal: &MutationProposal<'_>,
        _context: &GateContext,
    ) -> Result<StageDecision, GateError> {
        let payload = proposal.payload;
        for (field, value) in [("title", payload.title()), ("genre", payload.genre())] {
            if value.is_some_and(|v| v.trim().is_empty()) {
                return Ok(StageDecision::Fail {
                    reason: format!("{field} must not be blank"),
                });
            }
        }
        Ok(StageDecision::Pass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::Intent;
    use reel_types::MoviePayload;

    #[test]
    fn whitespace_genre_fails() {
        let payload = MoviePayload {
            genre: Some(" \t".into()),
            ..Default::default()
        };
        let decision = BlankTextStage
            .evaluate(&MutationProposal::new(Intent::Update, &payload), &GateContext::default())
            .unwrap();
        assert_eq!(
            decision,
            StageDecision::Fail {
                reason: "genre must not be blank".into()
            }
        );
    }

    #[test]
    fn absent_and_padded_text_pass() {
        let payload = MoviePayload {
            title: Some("  Heat ".into()),
            ..Default::default()
        };
        let decision = BlankTextStage
            .evaluate(&MutationProposal::new(Intent::Update, &payload), &GateContext::default())
            .unwrap();
        assert!(decision.is_pass());
    }
}

//! AssessAnswersHandler - Scores one questionnaire and maps the result.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::foundation::{AnswerSet, Constitution, DomainError, PersonalityType, QuestionBank};
use crate::domain::mapping::{ElementsVector, MappingFacade, PersonalitySource};
use crate::domain::scoring::{ConstitutionScores, DiagnosisSelector, ScoreCalculator};

/// Command to assess a completed questionnaire.
#[derive(Debug, Clone)]
pub struct AssessAnswersCommand {
    pub answers: AnswerSet,
}

/// Everything the presentation layer shows for one submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub scores: ConstitutionScores,
    pub dominant: Constitution,
    pub personality: PersonalityType,
    pub personality_source: PersonalitySource,
    pub elements: ElementsVector,
}

/// Handler running score -> diagnosis -> mapping.
pub struct AssessAnswersHandler {
    bank: Arc<QuestionBank>,
    facade: Arc<MappingFacade>,
}

impl AssessAnswersHandler {
    pub fn new(bank: Arc<QuestionBank>, facade: Arc<MappingFacade>) -> Self {
        Self { bank, facade }
    }

    /// # Errors
    ///
    /// `InvalidInput` when the answers do not match the question bank.
    pub fn handle(&self, cmd: AssessAnswersCommand) -> Result<Assessment, DomainError> {
        let scores = ScoreCalculator::calculate(&self.bank, &cmd.answers)?;
        let dominant = DiagnosisSelector::dominant(&scores);
        let mapped = self.facade.map(&scores, &cmd.answers);

        tracing::debug!(
            dominant = %dominant,
            personality = %mapped.personality.personality,
            source = ?mapped.personality.source,
            "Assessment completed"
        );

        Ok(Assessment {
            scores,
            dominant,
            personality: mapped.personality.personality,
            personality_source: mapped.personality.source,
            elements: mapped.elements,
        })
    }
}

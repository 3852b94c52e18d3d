//! Mapping Facade - one call producing both personality and elements.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::foundation::AnswerSet;
use crate::domain::scoring::ConstitutionScores;

use super::classifier::{PersonalityClassifier, PersonalityPrediction};
use super::elements::{ElementsMapper, ElementsVector};

/// Output of [`MappingFacade::map`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MappingResult {
    pub personality: PersonalityPrediction,
    pub elements: ElementsVector,
}

/// Combines the elements mapper with the personality classifier.
#[derive(Debug)]
pub struct MappingFacade {
    mapper: ElementsMapper,
    classifier: Arc<PersonalityClassifier>,
}

impl MappingFacade {
    pub fn new(mapper: ElementsMapper, classifier: Arc<PersonalityClassifier>) -> Self {
        Self { mapper, classifier }
    }

    pub fn classifier(&self) -> &PersonalityClassifier {
        &self.classifier
    }

    pub fn mapper(&self) -> ElementsMapper {
        self.mapper
    }

    /// Maps one scored submission. Elements are always computed by the
    /// mapper; the personality may come from the fallback table.
    pub fn map(&self, scores: &ConstitutionScores, answers: &AnswerSet) -> MappingResult {
        MappingResult {
            personality: self.classifier.classify(scores, answers),
            elements: self.mapper.map(scores),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Constitution, Element, PersonalityType};
    use crate::domain::mapping::{ElementsPolicy, PersonalitySource};

    #[test]
    fn facade_returns_real_elements_with_fallback_personality() {
        let facade = MappingFacade::new(
            ElementsMapper::new(ElementsPolicy::Enhanced),
            Arc::new(PersonalityClassifier::fallback_only()),
        );
        let scores = ConstitutionScores::ZERO.with(Constitution::QiStagnation, 90.0);
        let out = facade.map(&scores, &AnswerSet::uniform(3).unwrap());

        assert_eq!(out.personality.personality, PersonalityType::Infp);
        assert_eq!(out.personality.source, PersonalitySource::Fallback);
        assert_eq!(out.elements, facade.mapper().map(&scores));
        assert_eq!(out.elements.strongest(), Element::Wood);
    }
}

//! Career path questionnaire: validation, scoring, and result assembly.
//!
//! Answers are collected into a [`QuizDraft`], finalized into [`QuizAnswers`],
//! and scored once by [`recommend`]. Scoring is a pure function of the answers
//! and the static tables in `scoring` and `advice`.

pub mod advice;
pub mod domain;
mod draft;
pub mod import;
mod result;
pub mod router;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use advice::{PathAdvice, SubjectCluster};
pub use domain::{
    CareerPath, Course, Priority, PriorityRanking, QuizAnswers, RankingError, ReasonForCourse,
    RiskTolerance, Subject, SubjectRatings, WorkType,
};
pub use draft::{QuizAnswer, QuizDraft, QuizField, QuizSubmission, QuizValidationError};
pub use import::{QuizImportError, QuizResponseImporter, ScoredResponse};
pub use result::QuizResult;
pub use router::quiz_router;
pub use scoring::{ConfidenceLevel, Contradiction, PathScores, ScoreCard};

use tracing::debug;

/// Score a validated questionnaire and build the result page payload.
pub fn recommend(answers: &QuizAnswers) -> QuizResult {
    let card = scoring::evaluate(answers);

    debug!(
        path = card.recommended.label(),
        gap = card.gap,
        confidence = card.confidence.label(),
        contradictions = card.contradictions.len(),
        "career path recommended"
    );

    result::assemble(answers, card)
}

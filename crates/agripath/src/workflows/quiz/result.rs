use serde::Serialize;

use super::advice::{advice_for, clusters_for};
use super::domain::{CareerPath, Priority, QuizAnswers, ReasonForCourse};
use super::scoring::{ConfidenceLevel, PathScores, ScoreCard};

/// Outcome shown on the result page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub recommended_path: CareerPath,
    pub confidence_level: ConfidenceLevel,
    pub justification: String,
    pub subject_clusters: Vec<String>,
    pub next_steps: Vec<String>,
    pub time_horizon: String,
    pub warnings: Vec<String>,
    pub has_contradiction: bool,
    pub path_scores: PathScores,
    pub score_gap: u32,
}

pub(crate) const TOP_PRIORITY_WINDOW: usize = 3;

pub(crate) fn assemble(answers: &QuizAnswers, card: ScoreCard) -> QuizResult {
    let path = card.recommended;
    let advice = advice_for(path);

    let subject_clusters = if path.is_scholarly() {
        answers
            .scored_subjects()
            .map(clusters_for)
            .unwrap_or_default()
            .into_iter()
            .map(|cluster| cluster.label().to_string())
            .collect()
    } else {
        Vec::new()
    };

    QuizResult {
        recommended_path: path,
        confidence_level: card.confidence,
        justification: justification(answers, path),
        subject_clusters,
        next_steps: advice.next_steps.iter().map(|step| step.to_string()).collect(),
        time_horizon: advice.time_horizon.to_string(),
        warnings: warnings(answers, &card),
        has_contradiction: card.has_contradiction(),
        path_scores: card.scores,
        score_gap: card.gap,
    }
}

fn justification(answers: &QuizAnswers, path: CareerPath) -> String {
    format!(
        "{} fits best: you ranked \"{}\" as your top priority and chose agriculture because of {}.",
        path.label(),
        answers.priorities_ranked().top().label(),
        answers.reason_for_course().description()
    )
}

fn warnings(answers: &QuizAnswers, card: &ScoreCard) -> Vec<String> {
    let path = card.recommended;
    let mut warnings = Vec::new();

    if card.has_contradiction() {
        let reasons = card
            .contradictions
            .iter()
            .map(|contradiction| contradiction.summary())
            .collect::<Vec<_>>()
            .join("; ");
        warnings.push(format!(
            "Some of your answers pull in different directions ({reasons}). A session with a career counsellor is recommended before you commit."
        ));
    }

    match answers.reason_for_course() {
        ReasonForCourse::FasterEmployment if path.is_scholarly() => warnings.push(
            "You chose agriculture for faster employment, but this path usually delays a full salary by several years of postgraduate study."
                .to_string(),
        ),
        ReasonForCourse::FallbackChoice => warnings.push(
            "Agriculture was not your first choice; test your interest with an internship before investing in exam preparation."
                .to_string(),
        ),
        _ => {}
    }

    if path.is_scholarly() {
        warnings.push(
            "Research and academic posts are highly competitive: seats through NET, ARS, and funded Ph.D. programmes are limited."
                .to_string(),
        );
    }

    if path == CareerPath::GovtBankingAndFinance
        && answers
            .priorities_ranked()
            .position(Priority::WorkLifeBalance)
            >= TOP_PRIORITY_WINDOW
    {
        warnings.push(
            "Banking roles often involve long hours and rural postings; work-life balance was not among your top three priorities, so weigh this carefully."
                .to_string(),
        );
    }

    warnings
}

mod policy;
mod rules;
mod weights;

pub use policy::{classify_confidence, detect_contradictions, ConfidenceLevel, Contradiction};
pub use weights::{base_weight, priority_contribution, rank_multiplier, reinforced_paths};

pub(crate) use rules::bucket_interests;
pub(crate) use weights::{HIGH_INTEREST_MIN, MODERATE_INTEREST_MIN};

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

use super::domain::{CareerPath, QuizAnswers};

/// Accumulated score per canonical path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathScores([u32; CareerPath::COUNT]);

impl PathScores {
    pub fn from_scores(scores: [u32; CareerPath::COUNT]) -> Self {
        Self(scores)
    }

    pub fn get(&self, path: CareerPath) -> u32 {
        self.0[path.index()]
    }

    pub(crate) fn add(&mut self, path: CareerPath, points: u32) {
        self.0[path.index()] += points;
    }

    pub fn iter(&self) -> impl Iterator<Item = (CareerPath, u32)> + '_ {
        CareerPath::ordered()
            .into_iter()
            .map(move |path| (path, self.get(path)))
    }

    /// Highest-scoring path; ties go to the path listed first.
    pub fn best(&self) -> (CareerPath, u32) {
        let mut best = (CareerPath::Research, self.get(CareerPath::Research));
        for (path, score) in self.iter() {
            if score > best.1 {
                best = (path, score);
            }
        }
        best
    }

    /// Second-highest score, counting a tied runner-up at full value.
    pub fn runner_up_score(&self) -> u32 {
        let (best_path, _) = self.best();
        self.iter()
            .filter(|(path, _)| *path != best_path)
            .map(|(_, score)| score)
            .max()
            .unwrap_or(0)
    }

    pub fn gap(&self) -> u32 {
        let (_, best) = self.best();
        best - self.runner_up_score()
    }
}

impl Serialize for PathScores {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        #[derive(Serialize)]
        struct Entry {
            path: CareerPath,
            score: u32,
        }

        let mut seq = serializer.serialize_seq(Some(CareerPath::COUNT))?;
        for (path, score) in self.iter() {
            seq.serialize_element(&Entry { path, score })?;
        }
        seq.end()
    }
}

/// Scores, winner, and policy signals for one questionnaire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreCard {
    pub scores: PathScores,
    pub recommended: CareerPath,
    pub gap: u32,
    pub contradictions: Vec<Contradiction>,
    pub confidence: ConfidenceLevel,
}

impl ScoreCard {
    pub fn has_contradiction(&self) -> bool {
        !self.contradictions.is_empty()
    }
}

/// Scores every path from priorities, risk tolerance, and (after year one) subject interest.
/// Preferred work type is deliberately not an input here.
pub fn score_paths(answers: &QuizAnswers) -> PathScores {
    rules::score_answers(answers)
}

pub fn evaluate(answers: &QuizAnswers) -> ScoreCard {
    let scores = score_paths(answers);
    let (recommended, _) = scores.best();
    let gap = scores.gap();
    let contradictions = detect_contradictions(answers, recommended);
    let confidence = classify_confidence(gap, !contradictions.is_empty());

    ScoreCard {
        scores,
        recommended,
        gap,
        contradictions,
        confidence,
    }
}

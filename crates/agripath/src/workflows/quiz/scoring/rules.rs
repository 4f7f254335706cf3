use super::super::domain::{CareerPath, QuizAnswers, Subject, SubjectRatings};
use super::weights::{
    priority_contribution, reinforced_paths, HIGH_INTEREST_BONUS, HIGH_INTEREST_MIN,
    MODERATE_INTEREST_BONUS, MODERATE_INTEREST_MIN, RISK_BONUS,
};
use super::PathScores;

/// Counts of technical subjects in each interest bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct InterestBuckets {
    pub high: u32,
    pub moderate: u32,
}

pub(crate) fn bucket_interests(ratings: &SubjectRatings) -> InterestBuckets {
    let mut buckets = InterestBuckets::default();
    for subject in Subject::technical() {
        match ratings.get(&subject) {
            Some(rating) if *rating >= HIGH_INTEREST_MIN => buckets.high += 1,
            Some(rating) if *rating >= MODERATE_INTEREST_MIN => buckets.moderate += 1,
            _ => {}
        }
    }
    buckets
}

pub(crate) fn score_answers(answers: &QuizAnswers) -> PathScores {
    let mut scores = PathScores::default();

    for (rank, priority) in answers.priorities_ranked().as_slice().iter().enumerate() {
        for path in CareerPath::ordered() {
            scores.add(path, priority_contribution(path, *priority, rank));
        }
    }

    for path in reinforced_paths(answers.risk_tolerance()) {
        scores.add(*path, RISK_BONUS);
    }

    if let Some(ratings) = answers.scored_subjects() {
        let buckets = bucket_interests(ratings);
        let bonus = buckets.high * HIGH_INTEREST_BONUS + buckets.moderate * MODERATE_INTEREST_BONUS;
        scores.add(CareerPath::Research, bonus);
        scores.add(CareerPath::Academics, bonus);
    }

    scores
}

use super::common::*;
use crate::workflows::quiz::domain::Priority;
use crate::workflows::quiz::{
    QuizAnswer, QuizDraft, QuizField, QuizSubmission, QuizValidationError, RiskTolerance,
    Subject,
};

#[test]
fn empty_draft_reports_first_missing_step() {
    let err = QuizDraft::new().finalize().expect_err("empty draft is incomplete");
    assert_eq!(err, QuizValidationError::Missing(QuizField::Course));
}

#[test]
fn subject_step_only_shown_after_first_year() {
    let draft = QuizDraft::new().apply(QuizAnswer::YearOfStudy(1));
    assert!(!draft.shows_subject_step());

    let draft = draft.apply(QuizAnswer::YearOfStudy(2));
    assert!(draft.shows_subject_step());
}

#[test]
fn later_years_require_subject_ratings() {
    let err = Respondent::new(SCENARIO_A, RiskTolerance::Steady)
        .year(2)
        .draft()
        .finalize()
        .expect_err("ratings required after first year");

    assert_eq!(err, QuizValidationError::Missing(QuizField::SubjectLiking));
    assert_eq!(err.field(), QuizField::SubjectLiking);
}

#[test]
fn duplicate_priorities_are_rejected() {
    let mut order = SCENARIO_A;
    order[9] = order[0];

    let err = Respondent::new(order, RiskTolerance::Steady)
        .draft()
        .finalize()
        .expect_err("duplicates rejected");

    match err {
        QuizValidationError::Ranking(ranking) => {
            assert_eq!(ranking.duplicates, vec![Priority::PrestigeOfGovtJob]);
            assert_eq!(ranking.missing, vec![Priority::ForeignPlacement]);
        }
        other => panic!("expected ranking error, got {other:?}"),
    }
}

#[test]
fn short_ranking_is_rejected() {
    let err = Respondent::new(SCENARIO_A, RiskTolerance::Steady)
        .draft()
        .apply(QuizAnswer::PrioritiesRanked(SCENARIO_A[..9].to_vec()))
        .finalize()
        .expect_err("nine priorities rejected");

    assert_eq!(err.field(), QuizField::PrioritiesRanked);
}

#[test]
fn out_of_range_values_are_rejected() {
    let base = Respondent::new(SCENARIO_A, RiskTolerance::Steady);

    assert_eq!(
        base.clone().year(5).subjects(uniform_ratings(5)).draft().finalize(),
        Err(QuizValidationError::YearOutOfRange(5))
    );
    assert_eq!(
        base.clone().work_type(0).draft().finalize(),
        Err(QuizValidationError::WorkTypeOutOfRange(0))
    );
    assert_eq!(
        base.draft()
            .apply(QuizAnswer::SubjectRating {
                subject: Subject::Entomology,
                rating: 11,
            })
            .finalize(),
        Err(QuizValidationError::RatingOutOfRange {
            subject: Subject::Entomology,
            rating: 11,
        })
    );
}

#[test]
fn later_answers_replace_earlier_ones() {
    let answers = Respondent::new(SCENARIO_A, RiskTolerance::Steady)
        .draft()
        .apply(QuizAnswer::RiskTolerance(RiskTolerance::Variable))
        .finalize()
        .expect("valid answers");

    assert_eq!(answers.risk_tolerance(), RiskTolerance::Variable);
}

#[test]
fn submission_deserializes_from_client_payload() {
    let payload = serde_json::json!({
        "course": "bsc_horticulture",
        "yearOfStudy": 2,
        "reasonForCourse": "B",
        "preferredWorkType": 1,
        "prioritiesRanked": [
            "Innovative and Impactful work",
            "Intellectual freedom",
            "Teaching and mentoring",
            "Career Growth",
            "Foreign placement opportunities",
            "Flexibility of location",
            "Work-life balance",
            "Job Security",
            "Salary",
            "Prestige of Govt Job"
        ],
        "riskTolerance": "C",
        "subjectLiking": { "agronomy": 8, "entomology": 6, "others": 3 }
    });

    let submission: QuizSubmission =
        serde_json::from_value(payload).expect("payload deserializes");
    let answers = submission.validate().expect("payload is valid");

    assert_eq!(answers.year_of_study(), 2);
    assert_eq!(answers.priorities_ranked().top(), Priority::InnovativeWork);
    assert_eq!(
        answers
            .subject_liking()
            .and_then(|ratings| ratings.get(&Subject::Entomology)),
        Some(&6)
    );
}

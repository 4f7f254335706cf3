use serde::{Deserialize, Serialize};

use super::domain::{
    Course, Priority, PriorityRanking, QuizAnswers, RankingError, ReasonForCourse, RiskTolerance,
    Subject, SubjectRatings, WorkType,
};

/// One wizard step's worth of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizAnswer {
    Course(Course),
    YearOfStudy(u8),
    ReasonForCourse(ReasonForCourse),
    PreferredWorkType(u8),
    PrioritiesRanked(Vec<Priority>),
    RiskTolerance(RiskTolerance),
    SubjectRating { subject: Subject, rating: u8 },
}

/// Questionnaire under construction. Starts empty; a retake is a fresh default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizDraft {
    course: Option<Course>,
    year_of_study: Option<u8>,
    reason_for_course: Option<ReasonForCourse>,
    preferred_work_type: Option<u8>,
    priorities_ranked: Option<Vec<Priority>>,
    risk_tolerance: Option<RiskTolerance>,
    subject_liking: Option<SubjectRatings>,
}

impl QuizDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, replacing any earlier answer for the same step.
    pub fn apply(mut self, answer: QuizAnswer) -> Self {
        match answer {
            QuizAnswer::Course(course) => self.course = Some(course),
            QuizAnswer::YearOfStudy(year) => self.year_of_study = Some(year),
            QuizAnswer::ReasonForCourse(reason) => self.reason_for_course = Some(reason),
            QuizAnswer::PreferredWorkType(option) => self.preferred_work_type = Some(option),
            QuizAnswer::PrioritiesRanked(order) => self.priorities_ranked = Some(order),
            QuizAnswer::RiskTolerance(risk) => self.risk_tolerance = Some(risk),
            QuizAnswer::SubjectRating { subject, rating } => {
                self.subject_liking
                    .get_or_insert_with(SubjectRatings::new)
                    .insert(subject, rating);
            }
        }
        self
    }

    /// Whether the subject-interest step is part of this respondent's wizard.
    pub fn shows_subject_step(&self) -> bool {
        matches!(self.year_of_study, Some(year) if year != 1)
    }

    pub fn finalize(self) -> Result<QuizAnswers, QuizValidationError> {
        let course = self
            .course
            .ok_or(QuizValidationError::Missing(QuizField::Course))?;

        let year_of_study = self
            .year_of_study
            .ok_or(QuizValidationError::Missing(QuizField::YearOfStudy))?;
        if !(1..=4).contains(&year_of_study) {
            return Err(QuizValidationError::YearOutOfRange(year_of_study));
        }

        let reason_for_course = self
            .reason_for_course
            .ok_or(QuizValidationError::Missing(QuizField::ReasonForCourse))?;

        let work_option = self
            .preferred_work_type
            .ok_or(QuizValidationError::Missing(QuizField::PreferredWorkType))?;
        let preferred_work_type = WorkType::try_from(work_option)
            .map_err(|_| QuizValidationError::WorkTypeOutOfRange(work_option))?;

        let order = self
            .priorities_ranked
            .ok_or(QuizValidationError::Missing(QuizField::PrioritiesRanked))?;
        let priorities_ranked = PriorityRanking::new(order)?;

        let risk_tolerance = self
            .risk_tolerance
            .ok_or(QuizValidationError::Missing(QuizField::RiskTolerance))?;

        if let Some(ratings) = &self.subject_liking {
            if let Some((subject, rating)) = ratings
                .iter()
                .find(|(_, rating)| !(1..=10).contains(*rating))
            {
                return Err(QuizValidationError::RatingOutOfRange {
                    subject: *subject,
                    rating: *rating,
                });
            }
        }

        if year_of_study != 1 && self.subject_liking.is_none() {
            return Err(QuizValidationError::Missing(QuizField::SubjectLiking));
        }

        Ok(QuizAnswers {
            course,
            year_of_study,
            reason_for_course,
            preferred_work_type,
            priorities_ranked,
            risk_tolerance,
            subject_liking: self.subject_liking,
        })
    }
}

/// Questionnaire fields, named as the web client names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum QuizField {
    Course,
    YearOfStudy,
    ReasonForCourse,
    PreferredWorkType,
    PrioritiesRanked,
    RiskTolerance,
    SubjectLiking,
}

impl QuizField {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Course => "course",
            Self::YearOfStudy => "yearOfStudy",
            Self::ReasonForCourse => "reasonForCourse",
            Self::PreferredWorkType => "preferredWorkType",
            Self::PrioritiesRanked => "prioritiesRanked",
            Self::RiskTolerance => "riskTolerance",
            Self::SubjectLiking => "subjectLiking",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuizValidationError {
    #[error("{} is required", .0.key())]
    Missing(QuizField),
    #[error("yearOfStudy must be between 1 and 4, got {0}")]
    YearOutOfRange(u8),
    #[error("preferredWorkType must be between 1 and 5, got {0}")]
    WorkTypeOutOfRange(u8),
    #[error(transparent)]
    Ranking(#[from] RankingError),
    #[error("rating for {} must be between 1 and 10, got {rating}", .subject.key())]
    RatingOutOfRange { subject: Subject, rating: u8 },
}

impl QuizValidationError {
    pub fn field(&self) -> QuizField {
        match self {
            Self::Missing(field) => *field,
            Self::YearOutOfRange(_) => QuizField::YearOfStudy,
            Self::WorkTypeOutOfRange(_) => QuizField::PreferredWorkType,
            Self::Ranking(_) => QuizField::PrioritiesRanked,
            Self::RatingOutOfRange { .. } => QuizField::SubjectLiking,
        }
    }
}

/// Wire shape posted by the web wizard once every step is complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSubmission {
    pub course: Course,
    pub year_of_study: u8,
    pub reason_for_course: ReasonForCourse,
    pub preferred_work_type: u8,
    pub priorities_ranked: Vec<Priority>,
    pub risk_tolerance: RiskTolerance,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_liking: Option<SubjectRatings>,
}

impl QuizSubmission {
    pub fn into_draft(self) -> QuizDraft {
        QuizDraft {
            course: Some(self.course),
            year_of_study: Some(self.year_of_study),
            reason_for_course: Some(self.reason_for_course),
            preferred_work_type: Some(self.preferred_work_type),
            priorities_ranked: Some(self.priorities_ranked),
            risk_tolerance: Some(self.risk_tolerance),
            subject_liking: self.subject_liking,
        }
    }

    pub fn validate(self) -> Result<QuizAnswers, QuizValidationError> {
        self.into_draft().finalize()
    }
}

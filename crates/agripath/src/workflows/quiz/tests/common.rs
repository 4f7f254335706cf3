use crate::workflows::quiz::domain::Priority::{self, *};
use crate::workflows::quiz::{
    Course, QuizAnswer, QuizAnswers, QuizDraft, QuizSubmission, ReasonForCourse, RiskTolerance,
    Subject, SubjectRatings,
};

pub(super) type Order = [Priority; 10];

pub(super) const SCENARIO_A: Order = [
    PrestigeOfGovtJob,
    JobSecurity,
    InnovativeWork,
    Salary,
    WorkLifeBalance,
    CareerGrowth,
    TeachingAndMentoring,
    IntellectualFreedom,
    LocationFlexibility,
    ForeignPlacement,
];

pub(super) const SCENARIO_B: Order = [
    CareerGrowth,
    LocationFlexibility,
    ForeignPlacement,
    Salary,
    InnovativeWork,
    IntellectualFreedom,
    TeachingAndMentoring,
    JobSecurity,
    WorkLifeBalance,
    PrestigeOfGovtJob,
];

pub(super) const SCENARIO_C: Order = [
    CareerGrowth,
    Salary,
    LocationFlexibility,
    IntellectualFreedom,
    ForeignPlacement,
    PrestigeOfGovtJob,
    TeachingAndMentoring,
    WorkLifeBalance,
    InnovativeWork,
    JobSecurity,
];

/// Agribusiness leads by 12 under risk tolerance B.
pub(super) const GAP_12: Order = [
    PrestigeOfGovtJob,
    ForeignPlacement,
    TeachingAndMentoring,
    LocationFlexibility,
    InnovativeWork,
    IntellectualFreedom,
    JobSecurity,
    Salary,
    WorkLifeBalance,
    CareerGrowth,
];

/// Agribusiness leads by 13 under risk tolerance B.
pub(super) const GAP_13: Order = [
    PrestigeOfGovtJob,
    ForeignPlacement,
    JobSecurity,
    CareerGrowth,
    LocationFlexibility,
    WorkLifeBalance,
    TeachingAndMentoring,
    IntellectualFreedom,
    InnovativeWork,
    Salary,
];

/// Agribusiness leads by 25 under risk tolerance B.
pub(super) const GAP_25: Order = [
    WorkLifeBalance,
    LocationFlexibility,
    ForeignPlacement,
    InnovativeWork,
    IntellectualFreedom,
    PrestigeOfGovtJob,
    CareerGrowth,
    Salary,
    TeachingAndMentoring,
    JobSecurity,
];

/// Agribusiness leads by 26 under risk tolerance B.
pub(super) const GAP_26: Order = [
    PrestigeOfGovtJob,
    ForeignPlacement,
    Salary,
    JobSecurity,
    LocationFlexibility,
    CareerGrowth,
    InnovativeWork,
    TeachingAndMentoring,
    IntellectualFreedom,
    WorkLifeBalance,
];

/// Research and Academics both reach 103 under risk tolerance A.
pub(super) const TIE_RESEARCH_ACADEMICS: Order = [
    InnovativeWork,
    PrestigeOfGovtJob,
    CareerGrowth,
    ForeignPlacement,
    LocationFlexibility,
    TeachingAndMentoring,
    WorkLifeBalance,
    Salary,
    JobSecurity,
    IntellectualFreedom,
];

/// Govt Banking and Other Govt Jobs both reach 103 under risk tolerance A.
pub(super) const TIE_BANKING_GOVT: Order = [
    PrestigeOfGovtJob,
    Salary,
    CareerGrowth,
    ForeignPlacement,
    JobSecurity,
    TeachingAndMentoring,
    WorkLifeBalance,
    InnovativeWork,
    IntellectualFreedom,
    LocationFlexibility,
];

/// Agribusiness and Govt Banking both reach 101 under risk tolerance B.
pub(super) const TIE_AGRIBUSINESS_BANKING: Order = [
    PrestigeOfGovtJob,
    Salary,
    InnovativeWork,
    JobSecurity,
    CareerGrowth,
    WorkLifeBalance,
    IntellectualFreedom,
    LocationFlexibility,
    ForeignPlacement,
    TeachingAndMentoring,
];

/// Academics leads Other Govt Jobs by 26 under risk tolerance A.
pub(super) const ACADEMICS_LEAD: Order = [
    IntellectualFreedom,
    TeachingAndMentoring,
    JobSecurity,
    PrestigeOfGovtJob,
    LocationFlexibility,
    WorkLifeBalance,
    CareerGrowth,
    ForeignPlacement,
    Salary,
    InnovativeWork,
];

/// Govt Banking edges Academics with work-life balance ranked third, risk tolerance C.
pub(super) const BANKING_BALANCED: Order = [
    CareerGrowth,
    Salary,
    WorkLifeBalance,
    PrestigeOfGovtJob,
    ForeignPlacement,
    JobSecurity,
    InnovativeWork,
    IntellectualFreedom,
    LocationFlexibility,
    TeachingAndMentoring,
];

/// Builder for finalized answers with neutral defaults: first year,
/// administration work style, genuine interest, no subject ratings.
#[derive(Debug, Clone)]
pub(super) struct Respondent {
    pub order: Order,
    pub risk: RiskTolerance,
    pub year: u8,
    pub work_type: u8,
    pub reason: ReasonForCourse,
    pub subjects: Option<SubjectRatings>,
}

impl Respondent {
    pub fn new(order: Order, risk: RiskTolerance) -> Self {
        Self {
            order,
            risk,
            year: 1,
            work_type: 5,
            reason: ReasonForCourse::GenuineInterest,
            subjects: None,
        }
    }

    pub fn year(mut self, year: u8) -> Self {
        self.year = year;
        self
    }

    pub fn work_type(mut self, work_type: u8) -> Self {
        self.work_type = work_type;
        self
    }

    pub fn reason(mut self, reason: ReasonForCourse) -> Self {
        self.reason = reason;
        self
    }

    pub fn subjects(mut self, ratings: SubjectRatings) -> Self {
        self.subjects = Some(ratings);
        self
    }

    pub fn draft(&self) -> QuizDraft {
        let mut draft = QuizDraft::new()
            .apply(QuizAnswer::Course(Course::BscAgriculture))
            .apply(QuizAnswer::YearOfStudy(self.year))
            .apply(QuizAnswer::ReasonForCourse(self.reason))
            .apply(QuizAnswer::PreferredWorkType(self.work_type))
            .apply(QuizAnswer::PrioritiesRanked(self.order.to_vec()))
            .apply(QuizAnswer::RiskTolerance(self.risk));

        if let Some(ratings) = &self.subjects {
            for (subject, rating) in ratings {
                draft = draft.apply(QuizAnswer::SubjectRating {
                    subject: *subject,
                    rating: *rating,
                });
            }
        }

        draft
    }

    pub fn answers(&self) -> QuizAnswers {
        self.draft().finalize().expect("fixture answers are valid")
    }

    pub fn submission(&self) -> QuizSubmission {
        QuizSubmission {
            course: Course::BscAgriculture,
            year_of_study: self.year,
            reason_for_course: self.reason,
            preferred_work_type: self.work_type,
            priorities_ranked: self.order.to_vec(),
            risk_tolerance: self.risk,
            subject_liking: self.subjects.clone(),
        }
    }
}

/// Every technical subject at `rating`, plus a catch-all rating of 10.
pub(super) fn uniform_ratings(rating: u8) -> SubjectRatings {
    let mut ratings: SubjectRatings = Subject::technical()
        .into_iter()
        .map(|subject| (subject, rating))
        .collect();
    ratings.insert(Subject::Others, 10);
    ratings
}

use serde::{Deserialize, Serialize};

use super::super::domain::{
    CareerPath, Priority, QuizAnswers, ReasonForCourse, RiskTolerance,
};

pub(crate) const HIGH_CONFIDENCE_GAP: u32 = 25;
pub(crate) const MEDIUM_CONFIDENCE_GAP: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Maps the lead of the winning path over the runner-up to a confidence level.
/// Any contradiction caps confidence at low.
pub fn classify_confidence(gap: u32, contradicted: bool) -> ConfidenceLevel {
    if contradicted {
        ConfidenceLevel::Low
    } else if gap > HIGH_CONFIDENCE_GAP {
        ConfidenceLevel::High
    } else if gap > MEDIUM_CONFIDENCE_GAP {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Low
    }
}

/// A low-weight answer that disagrees with the recommended path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Contradiction {
    BusinessWorkStyleOnScholarlyPath,
    ScholarlyWorkStyleOnBusinessPath,
    SteadyIncomeOnAgribusiness,
    VariableIncomeOnSalariedService,
    ImpactFirstButSalaryTop,
    FastEmploymentOnScholarlyPath,
}

impl Contradiction {
    pub const fn summary(self) -> &'static str {
        match self {
            Self::BusinessWorkStyleOnScholarlyPath => {
                "preferred work style is business-oriented but the path is research or teaching"
            }
            Self::ScholarlyWorkStyleOnBusinessPath => {
                "preferred work style is research or teaching but the path is business or finance"
            }
            Self::SteadyIncomeOnAgribusiness => {
                "steady income was preferred but agribusiness earnings are variable"
            }
            Self::VariableIncomeOnSalariedService => {
                "variable, high-upside income was preferred but the path is salaried service"
            }
            Self::ImpactFirstButSalaryTop => {
                "impact was preferred over money yet salary is ranked first"
            }
            Self::FastEmploymentOnScholarlyPath => {
                "faster employment was the motivation but the path needs years of study"
            }
        }
    }
}

/// Evaluates every contradiction rule against the chosen path.
pub fn detect_contradictions(answers: &QuizAnswers, path: CareerPath) -> Vec<Contradiction> {
    let mut found = Vec::new();
    let work_type = answers.preferred_work_type();

    if work_type.is_business_oriented() && path.is_scholarly() {
        found.push(Contradiction::BusinessWorkStyleOnScholarlyPath);
    }

    if work_type.is_scholarly()
        && matches!(
            path,
            CareerPath::AgribusinessManagement | CareerPath::GovtBankingAndFinance
        )
    {
        found.push(Contradiction::ScholarlyWorkStyleOnBusinessPath);
    }

    match answers.risk_tolerance() {
        RiskTolerance::Steady if path == CareerPath::AgribusinessManagement => {
            found.push(Contradiction::SteadyIncomeOnAgribusiness);
        }
        RiskTolerance::Variable
            if matches!(
                path,
                CareerPath::OtherGovtJobs | CareerPath::GovtBankingAndFinance
            ) =>
        {
            found.push(Contradiction::VariableIncomeOnSalariedService);
        }
        RiskTolerance::ImpactOverIncome
            if answers.priorities_ranked().top() == Priority::Salary =>
        {
            found.push(Contradiction::ImpactFirstButSalaryTop);
        }
        _ => {}
    }

    if answers.reason_for_course() == ReasonForCourse::FasterEmployment && path.is_scholarly() {
        found.push(Contradiction::FastEmploymentOnScholarlyPath);
    }

    found
}

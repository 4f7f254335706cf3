use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Career outcomes the questionnaire can recommend.
///
/// Declaration order is the tie-break order: when two paths score the same,
/// the one listed first wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CareerPath {
    #[serde(rename = "Research")]
    Research,
    #[serde(rename = "Academics")]
    Academics,
    #[serde(rename = "Agribusiness Management")]
    AgribusinessManagement,
    #[serde(rename = "Govt Banking and Finance")]
    GovtBankingAndFinance,
    #[serde(rename = "Other Govt Jobs")]
    OtherGovtJobs,
}

impl CareerPath {
    pub const COUNT: usize = 5;

    pub const fn ordered() -> [Self; Self::COUNT] {
        [
            Self::Research,
            Self::Academics,
            Self::AgribusinessManagement,
            Self::GovtBankingAndFinance,
            Self::OtherGovtJobs,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Research => "Research",
            Self::Academics => "Academics",
            Self::AgribusinessManagement => "Agribusiness Management",
            Self::GovtBankingAndFinance => "Govt Banking and Finance",
            Self::OtherGovtJobs => "Other Govt Jobs",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// Research and Academics share the subject-interest bonus and clusters.
    pub const fn is_scholarly(self) -> bool {
        matches!(self, Self::Research | Self::Academics)
    }
}

impl fmt::Display for CareerPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Career values the respondent rank-orders, most important first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "Salary")]
    Salary,
    #[serde(rename = "Job Security")]
    JobSecurity,
    #[serde(rename = "Prestige of Govt Job")]
    PrestigeOfGovtJob,
    #[serde(rename = "Innovative and Impactful work")]
    InnovativeWork,
    #[serde(rename = "Career Growth")]
    CareerGrowth,
    #[serde(rename = "Flexibility of location")]
    LocationFlexibility,
    #[serde(rename = "Foreign placement opportunities")]
    ForeignPlacement,
    #[serde(rename = "Work-life balance")]
    WorkLifeBalance,
    #[serde(rename = "Intellectual freedom")]
    IntellectualFreedom,
    #[serde(rename = "Teaching and mentoring")]
    TeachingAndMentoring,
}

impl Priority {
    pub const COUNT: usize = 10;

    pub const fn ordered() -> [Self; Self::COUNT] {
        [
            Self::Salary,
            Self::JobSecurity,
            Self::PrestigeOfGovtJob,
            Self::InnovativeWork,
            Self::CareerGrowth,
            Self::LocationFlexibility,
            Self::ForeignPlacement,
            Self::WorkLifeBalance,
            Self::IntellectualFreedom,
            Self::TeachingAndMentoring,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Salary => "Salary",
            Self::JobSecurity => "Job Security",
            Self::PrestigeOfGovtJob => "Prestige of Govt Job",
            Self::InnovativeWork => "Innovative and Impactful work",
            Self::CareerGrowth => "Career Growth",
            Self::LocationFlexibility => "Flexibility of location",
            Self::ForeignPlacement => "Foreign placement opportunities",
            Self::WorkLifeBalance => "Work-life balance",
            Self::IntellectualFreedom => "Intellectual freedom",
            Self::TeachingAndMentoring => "Teaching and mentoring",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    pub fn from_label(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        Self::ordered()
            .into_iter()
            .find(|priority| priority.label().eq_ignore_ascii_case(trimmed))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A complete most-important-first ordering of all ten priorities.
///
/// Only constructible through [`PriorityRanking::new`], which rejects
/// duplicates and omissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PriorityRanking([Priority; Priority::COUNT]);

impl PriorityRanking {
    pub fn new(order: Vec<Priority>) -> Result<Self, RankingError> {
        let mut seen = BTreeSet::new();
        let mut duplicates = BTreeSet::new();
        for priority in &order {
            if !seen.insert(*priority) {
                duplicates.insert(*priority);
            }
        }

        let missing: Vec<Priority> = Priority::ordered()
            .into_iter()
            .filter(|priority| !seen.contains(priority))
            .collect();

        if !duplicates.is_empty() || !missing.is_empty() || order.len() != Priority::COUNT {
            return Err(RankingError {
                duplicates: duplicates.into_iter().collect(),
                missing,
                len: order.len(),
            });
        }

        let mut ranked = [Priority::Salary; Priority::COUNT];
        ranked.copy_from_slice(&order);
        Ok(Self(ranked))
    }

    pub fn as_slice(&self) -> &[Priority] {
        &self.0
    }

    pub fn top(&self) -> Priority {
        self.0[0]
    }

    /// Zero-based rank of `priority`; every priority is present by construction.
    pub fn position(&self, priority: Priority) -> usize {
        self.0
            .iter()
            .position(|candidate| *candidate == priority)
            .unwrap_or(Priority::COUNT)
    }
}

impl<'de> Deserialize<'de> for PriorityRanking {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let order = Vec::<Priority>::deserialize(deserializer)?;
        Self::new(order).map_err(serde::de::Error::custom)
    }
}

/// Why a submitted ordering is not a permutation of the ten priorities.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("priorities must rank all {} labels exactly once (got {len}; duplicates: {duplicates:?}; missing: {missing:?})", Priority::COUNT)]
pub struct RankingError {
    pub duplicates: Vec<Priority>,
    pub missing: Vec<Priority>,
    pub len: usize,
}

/// Appetite for income volatility, reported in the wizard as options A-C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskTolerance {
    /// Steady, predictable income.
    #[serde(rename = "A")]
    Steady,
    /// Variable income with high upside.
    #[serde(rename = "B")]
    Variable,
    /// Willing to trade money for impact.
    #[serde(rename = "C")]
    ImpactOverIncome,
}

impl RiskTolerance {
    pub const fn code(self) -> &'static str {
        match self {
            Self::Steady => "A",
            Self::Variable => "B",
            Self::ImpactOverIncome => "C",
        }
    }

    pub fn from_code(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "A" => Some(Self::Steady),
            "B" => Some(Self::Variable),
            "C" => Some(Self::ImpactOverIncome),
            _ => None,
        }
    }
}

/// Self-reported motivation for choosing the degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReasonForCourse {
    #[serde(rename = "A")]
    GenuineInterest,
    #[serde(rename = "B")]
    FamilyFarming,
    #[serde(rename = "C")]
    FasterEmployment,
    #[serde(rename = "D")]
    FallbackChoice,
}

impl ReasonForCourse {
    pub const fn description(self) -> &'static str {
        match self {
            Self::GenuineInterest => "a genuine interest in agriculture",
            Self::FamilyFarming => "your family's background in farming",
            Self::FasterEmployment => "the promise of faster employment",
            Self::FallbackChoice => "it being available when your first choice was not",
        }
    }

    pub fn from_code(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "A" => Some(Self::GenuineInterest),
            "B" => Some(Self::FamilyFarming),
            "C" => Some(Self::FasterEmployment),
            "D" => Some(Self::FallbackChoice),
            _ => None,
        }
    }
}

/// Preferred day-to-day work style (wizard options 1-5).
///
/// Never contributes to path scores; it only feeds contradiction checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum WorkType {
    LabAndFieldResearch,
    TeachingAndMentoring,
    StrategizingAndGrowth,
    NumbersAndFinancialPlanning,
    AdministrationAndPublicService,
}

impl WorkType {
    pub const fn option(self) -> u8 {
        match self {
            Self::LabAndFieldResearch => 1,
            Self::TeachingAndMentoring => 2,
            Self::StrategizingAndGrowth => 3,
            Self::NumbersAndFinancialPlanning => 4,
            Self::AdministrationAndPublicService => 5,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::LabAndFieldResearch => "Lab & field research",
            Self::TeachingAndMentoring => "Teaching & mentoring",
            Self::StrategizingAndGrowth => "Strategizing & growth",
            Self::NumbersAndFinancialPlanning => "Numbers & financial planning",
            Self::AdministrationAndPublicService => "Administration & public service",
        }
    }

    pub const fn is_business_oriented(self) -> bool {
        matches!(
            self,
            Self::StrategizingAndGrowth | Self::NumbersAndFinancialPlanning
        )
    }

    pub const fn is_scholarly(self) -> bool {
        matches!(self, Self::LabAndFieldResearch | Self::TeachingAndMentoring)
    }
}

impl TryFrom<u8> for WorkType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::LabAndFieldResearch),
            2 => Ok(Self::TeachingAndMentoring),
            3 => Ok(Self::StrategizingAndGrowth),
            4 => Ok(Self::NumbersAndFinancialPlanning),
            5 => Ok(Self::AdministrationAndPublicService),
            other => Err(format!("work type must be between 1 and 5, got {other}")),
        }
    }
}

impl From<WorkType> for u8 {
    fn from(value: WorkType) -> Self {
        value.option()
    }
}

/// Degree programmes offered on the intake form. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Course {
    BscAgriculture,
    BscHorticulture,
    BscForestry,
    BtechAgriculturalEngineering,
    BscCommunityScience,
    BtechFoodTechnology,
    BscSericulture,
    BfscFisheries,
    BvscAnimalHusbandry,
}

impl Course {
    pub const fn label(self) -> &'static str {
        match self {
            Self::BscAgriculture => "B.Sc. Agriculture",
            Self::BscHorticulture => "B.Sc. Horticulture",
            Self::BscForestry => "B.Sc. Forestry",
            Self::BtechAgriculturalEngineering => "B.Tech Agricultural Engineering",
            Self::BscCommunityScience => "B.Sc. Community Science",
            Self::BtechFoodTechnology => "B.Tech Food Technology",
            Self::BscSericulture => "B.Sc. Sericulture",
            Self::BfscFisheries => "B.F.Sc. Fisheries",
            Self::BvscAnimalHusbandry => "B.V.Sc. Animal Husbandry",
        }
    }
}

/// Subjects rated on the interest step; `Others` is a catch-all that never scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Agronomy,
    Horticulture,
    SoilScience,
    PlantPathology,
    Entomology,
    GeneticsPlantBreeding,
    AgriculturalEconomics,
    AgriculturalEngineering,
    AnimalScience,
    Others,
}

impl Subject {
    pub const fn technical() -> [Self; 9] {
        [
            Self::Agronomy,
            Self::Horticulture,
            Self::SoilScience,
            Self::PlantPathology,
            Self::Entomology,
            Self::GeneticsPlantBreeding,
            Self::AgriculturalEconomics,
            Self::AgriculturalEngineering,
            Self::AnimalScience,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Agronomy => "agronomy",
            Self::Horticulture => "horticulture",
            Self::SoilScience => "soil_science",
            Self::PlantPathology => "plant_pathology",
            Self::Entomology => "entomology",
            Self::GeneticsPlantBreeding => "genetics_plant_breeding",
            Self::AgriculturalEconomics => "agricultural_economics",
            Self::AgriculturalEngineering => "agricultural_engineering",
            Self::AnimalScience => "animal_science",
            Self::Others => "others",
        }
    }

    pub fn from_key(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        Self::technical()
            .into_iter()
            .chain(std::iter::once(Self::Others))
            .find(|subject| subject.key() == trimmed)
    }
}

/// Interest ratings (1-10) keyed by subject.
pub type SubjectRatings = BTreeMap<Subject, u8>;

/// Validated questionnaire, produced by [`super::QuizDraft::finalize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAnswers {
    pub(crate) course: Course,
    pub(crate) year_of_study: u8,
    pub(crate) reason_for_course: ReasonForCourse,
    pub(crate) preferred_work_type: WorkType,
    pub(crate) priorities_ranked: PriorityRanking,
    pub(crate) risk_tolerance: RiskTolerance,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) subject_liking: Option<SubjectRatings>,
}

impl QuizAnswers {
    pub fn course(&self) -> Course {
        self.course
    }

    pub fn year_of_study(&self) -> u8 {
        self.year_of_study
    }

    pub fn reason_for_course(&self) -> ReasonForCourse {
        self.reason_for_course
    }

    pub fn preferred_work_type(&self) -> WorkType {
        self.preferred_work_type
    }

    pub fn priorities_ranked(&self) -> &PriorityRanking {
        &self.priorities_ranked
    }

    pub fn risk_tolerance(&self) -> RiskTolerance {
        self.risk_tolerance
    }

    pub fn subject_liking(&self) -> Option<&SubjectRatings> {
        self.subject_liking.as_ref()
    }

    /// Subject ratings that count towards scoring: absent for first-year students.
    pub fn scored_subjects(&self) -> Option<&SubjectRatings> {
        if self.year_of_study == 1 {
            None
        } else {
            self.subject_liking.as_ref()
        }
    }
}

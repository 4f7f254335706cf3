use serde::{Deserialize, Serialize};

use super::domain::{CareerPath, Subject, SubjectRatings};
use super::scoring::{bucket_interests, HIGH_INTEREST_MIN, MODERATE_INTEREST_MIN};

/// Static guidance shown alongside a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathAdvice {
    pub time_horizon: &'static str,
    pub next_steps: &'static [&'static str],
}

pub fn advice_for(path: CareerPath) -> PathAdvice {
    match path {
        CareerPath::Research => PathAdvice {
            time_horizon: "Long term: 4-6 years through M.Sc. and Ph.D. before a permanent scientist role.",
            next_steps: &[
                "Shortlist M.Sc. programmes and prepare for ICAR AIEEA (PG).",
                "Join a faculty member's ongoing project as a summer research intern.",
                "Start reading recent papers in your strongest subject cluster.",
                "Plan for ASRB NET and ARS eligibility after your Master's.",
            ],
        },
        CareerPath::Academics => PathAdvice {
            time_horizon: "Long term: 4-6 years including postgraduate study and NET qualification.",
            next_steps: &[
                "Prepare for ICAR AIEEA (PG) to secure a funded Master's seat.",
                "Take up peer tutoring or teaching-assistant duties to build classroom experience.",
                "Target ASRB NET once you are in your Master's programme.",
            ],
        },
        CareerPath::AgribusinessManagement => PathAdvice {
            time_horizon: "Medium term: 2-3 years through an MBA (ABM) or direct industry entry.",
            next_steps: &[
                "Prepare for CAT/MAT and ICAR AIEEA (PG) for agribusiness MBA seats.",
                "Intern with an agri-input, food processing, or agritech company.",
                "Build spreadsheet and market-analysis skills with the Excel trainer.",
            ],
        },
        CareerPath::GovtBankingAndFinance => PathAdvice {
            time_horizon: "Short to medium term: 1-2 years of focused exam preparation.",
            next_steps: &[
                "Track IBPS AFO, NABARD Grade A, and RBI Grade B notifications.",
                "Build a daily routine for quantitative aptitude and reasoning.",
                "Revise agricultural economics and rural banking schemes.",
            ],
        },
        CareerPath::OtherGovtJobs => PathAdvice {
            time_horizon: "Short to medium term: 1-2 years depending on state recruitment cycles.",
            next_steps: &[
                "Follow state PSC notifications for agriculture officer posts.",
                "Prepare for FCI, seed corporation, and extension officer exams.",
                "Strengthen general studies alongside your core agriculture subjects.",
            ],
        },
    }
}

/// Named grouping of related subjects, surfaced for Research and Academics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectCluster {
    CropSciences,
    PlantProtection,
    SoilAndResourceEngineering,
    AgriculturalEconomics,
    AnimalSciences,
}

impl SubjectCluster {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::CropSciences,
            Self::PlantProtection,
            Self::SoilAndResourceEngineering,
            Self::AgriculturalEconomics,
            Self::AnimalSciences,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::CropSciences => "Crop Sciences",
            Self::PlantProtection => "Plant Protection",
            Self::SoilAndResourceEngineering => "Soil & Resource Engineering",
            Self::AgriculturalEconomics => "Agricultural Economics",
            Self::AnimalSciences => "Animal Sciences",
        }
    }

    pub const fn members(self) -> &'static [Subject] {
        match self {
            Self::CropSciences => &[
                Subject::Agronomy,
                Subject::Horticulture,
                Subject::GeneticsPlantBreeding,
            ],
            Self::PlantProtection => &[Subject::PlantPathology, Subject::Entomology],
            Self::SoilAndResourceEngineering => {
                &[Subject::SoilScience, Subject::AgriculturalEngineering]
            }
            Self::AgriculturalEconomics => &[Subject::AgriculturalEconomics],
            Self::AnimalSciences => &[Subject::AnimalScience],
        }
    }
}

/// Clusters with a high-interest member, or failing that a moderate one.
pub fn clusters_for(ratings: &SubjectRatings) -> Vec<SubjectCluster> {
    let buckets = bucket_interests(ratings);
    let threshold = if buckets.high > 0 {
        HIGH_INTEREST_MIN
    } else if buckets.moderate > 0 {
        MODERATE_INTEREST_MIN
    } else {
        return Vec::new();
    };

    SubjectCluster::ordered()
        .into_iter()
        .filter(|cluster| {
            cluster
                .members()
                .iter()
                .any(|subject| ratings.get(subject).is_some_and(|rating| *rating >= threshold))
        })
        .collect()
}

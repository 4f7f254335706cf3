use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::domain::{Course, Priority, ReasonForCourse, RiskTolerance, Subject, SubjectRatings};
use super::draft::{QuizAnswer, QuizDraft, QuizValidationError};
use super::{recommend, QuizResult};

#[derive(Debug, thiserror::Error)]
pub enum QuizImportError {
    #[error("failed to read questionnaire export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid questionnaire CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Per-respondent outcome of a bulk import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredResponse {
    pub respondent: String,
    pub outcome: Result<QuizResult, RowError>,
}

/// Why a single row could not be scored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowError {
    #[error("unknown {field} value '{value}'")]
    Unrecognized { field: &'static str, value: String },
    #[error(transparent)]
    Invalid(#[from] QuizValidationError),
}

/// Scores a counsellor's CSV export of questionnaire responses.
pub struct QuizResponseImporter;

impl QuizResponseImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ScoredResponse>, QuizImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ScoredResponse>, QuizImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut responses = Vec::new();

        for record in csv_reader.deserialize::<ResponseRow>() {
            let row = record?;
            let respondent = row.respondent.clone();
            let outcome = row
                .into_draft()
                .and_then(|draft| draft.finalize().map_err(RowError::from))
                .map(|answers| recommend(&answers));

            responses.push(ScoredResponse {
                respondent,
                outcome,
            });
        }

        Ok(responses)
    }
}

#[derive(Debug, Deserialize)]
struct ResponseRow {
    respondent: String,
    course: Course,
    year_of_study: u8,
    reason_for_course: String,
    preferred_work_type: u8,
    priorities_ranked: String,
    risk_tolerance: String,
    #[serde(default, deserialize_with = "optional_rating")]
    agronomy: Option<u8>,
    #[serde(default, deserialize_with = "optional_rating")]
    horticulture: Option<u8>,
    #[serde(default, deserialize_with = "optional_rating")]
    soil_science: Option<u8>,
    #[serde(default, deserialize_with = "optional_rating")]
    plant_pathology: Option<u8>,
    #[serde(default, deserialize_with = "optional_rating")]
    entomology: Option<u8>,
    #[serde(default, deserialize_with = "optional_rating")]
    genetics_plant_breeding: Option<u8>,
    #[serde(default, deserialize_with = "optional_rating")]
    agricultural_economics: Option<u8>,
    #[serde(default, deserialize_with = "optional_rating")]
    agricultural_engineering: Option<u8>,
    #[serde(default, deserialize_with = "optional_rating")]
    animal_science: Option<u8>,
    #[serde(default, deserialize_with = "optional_rating")]
    others: Option<u8>,
}

impl ResponseRow {
    fn into_draft(self) -> Result<QuizDraft, RowError> {
        let reason = ReasonForCourse::from_code(&self.reason_for_course).ok_or_else(|| {
            RowError::Unrecognized {
                field: "reason_for_course",
                value: self.reason_for_course.clone(),
            }
        })?;
        let risk = RiskTolerance::from_code(&self.risk_tolerance).ok_or_else(|| {
            RowError::Unrecognized {
                field: "risk_tolerance",
                value: self.risk_tolerance.clone(),
            }
        })?;

        let mut order = Vec::new();
        for label in self
            .priorities_ranked
            .split('|')
            .filter(|label| !label.trim().is_empty())
        {
            let priority = Priority::from_label(label).ok_or_else(|| RowError::Unrecognized {
                field: "priorities_ranked",
                value: label.trim().to_string(),
            })?;
            order.push(priority);
        }

        let mut draft = QuizDraft::new()
            .apply(QuizAnswer::Course(self.course))
            .apply(QuizAnswer::YearOfStudy(self.year_of_study))
            .apply(QuizAnswer::ReasonForCourse(reason))
            .apply(QuizAnswer::PreferredWorkType(self.preferred_work_type))
            .apply(QuizAnswer::PrioritiesRanked(order))
            .apply(QuizAnswer::RiskTolerance(risk));

        for (subject, rating) in self.ratings() {
            draft = draft.apply(QuizAnswer::SubjectRating { subject, rating });
        }

        Ok(draft)
    }

    fn ratings(&self) -> SubjectRatings {
        [
            (Subject::Agronomy, self.agronomy),
            (Subject::Horticulture, self.horticulture),
            (Subject::SoilScience, self.soil_science),
            (Subject::PlantPathology, self.plant_pathology),
            (Subject::Entomology, self.entomology),
            (Subject::GeneticsPlantBreeding, self.genetics_plant_breeding),
            (Subject::AgriculturalEconomics, self.agricultural_economics),
            (Subject::AgriculturalEngineering, self.agricultural_engineering),
            (Subject::AnimalScience, self.animal_science),
            (Subject::Others, self.others),
        ]
        .into_iter()
        .filter_map(|(subject, rating)| rating.map(|rating| (subject, rating)))
        .collect()
    }
}

fn optional_rating<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<u8>()
            .map(Some)
            .map_err(|err| serde::de::Error::custom(format!("invalid rating '{value}': {err}"))),
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One medication line on a prescription
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medication {
    pub name: String,
    /// e.g. "500mg"
    pub dosage: String,
    /// e.g. "twice daily"
    pub frequency: String,
    pub duration_days: u32,
    pub notes: Option<String>,
}

/// Prescription issued at the end of a consultation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    pub id: String,
    pub consultation_id: String,
    pub professional_id: String,
    pub patient_id: String,
    pub medications: Vec<Medication>,
    pub instructions: Option<String>,
    pub issued_at: DateTime<Utc>,
    pub valid_until: Option<DateTime<Utc>>,
}

impl Prescription {
    /// A prescription without `valid_until` never expires
    pub fn is_valid_at(&self, at: DateTime<Utc>) -> bool {
        at >= self.issued_at && self.valid_until.map_or(true, |until| at <= until)
    }

    /// Longest medication course in days
    pub fn course_days(&self) -> u32 {
        self.medications
            .iter()
            .map(|m| m.duration_days)
            .max()
            .unwrap_or(0)
    }
}

use crate::domain::a001_health_professional::HealthProfessional;
use crate::enums::{ConsultationMode, ConsultationStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A consultation between a patient and a health professional
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consultation {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub professional_id: String,
    /// Embedded by the provider on detail endpoints, absent on lists
    #[serde(default)]
    pub professional: Option<HealthProfessional>,
    pub mode: ConsultationMode,
    pub status: ConsultationStatus,
    pub scheduled_at: DateTime<Utc>,
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
    pub duration_minutes: Option<u32>,
    pub fee: f64,
    pub symptoms: Option<String>,
    pub notes: Option<String>,
    pub prescription_id: Option<String>,
}

impl Consultation {
    /// Reported duration, or the span between start and end when both are known
    pub fn effective_duration_minutes(&self) -> Option<i64> {
        if let Some(minutes) = self.duration_minutes {
            return Some(minutes as i64);
        }
        match (self.started_at, self.ended_at) {
            (Some(start), Some(end)) if end >= start => Some((end - start).num_minutes()),
            _ => None,
        }
    }

    pub fn has_prescription(&self) -> bool {
        self.prescription_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Consultation {
        Consultation {
            id: "c-1".into(),
            patient_id: "u-1".into(),
            patient_name: "Tolu".into(),
            professional_id: "p-1".into(),
            professional: None,
            mode: ConsultationMode::Chat,
            status: ConsultationStatus::Completed,
            scheduled_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap(),
            started_at: Some(Utc.with_ymd_and_hms(2024, 5, 1, 9, 5, 0).unwrap()),
            ended_at: Some(Utc.with_ymd_and_hms(2024, 5, 1, 9, 35, 0).unwrap()),
            duration_minutes: None,
            fee: 5000.0,
            symptoms: None,
            notes: None,
            prescription_id: None,
        }
    }

    #[test]
    fn test_effective_duration() {
        let mut c = sample();
        assert_eq!(c.effective_duration_minutes(), Some(30));
        c.duration_minutes = Some(25);
        assert_eq!(c.effective_duration_minutes(), Some(25));
        c.duration_minutes = None;
        c.ended_at = None;
        assert_eq!(c.effective_duration_minutes(), None);
    }

    #[test]
    fn test_missing_professional_defaults_to_none() {
        let json = r#"{
            "id": "c-2", "patientId": "u-2", "patientName": "Kemi",
            "professionalId": "p-9", "mode": "VIDEO", "status": "BOOKED",
            "scheduledAt": "2024-05-02T10:00:00Z", "startedAt": null,
            "endedAt": null, "durationMinutes": null, "fee": 7500.0,
            "symptoms": "rash", "notes": null, "prescriptionId": null
        }"#;
        let c: Consultation = serde_json::from_str(json).unwrap();
        assert!(c.professional.is_none());
        assert_eq!(c.mode, ConsultationMode::Video);
        assert_eq!(c.status, ConsultationStatus::Booked);
    }
}

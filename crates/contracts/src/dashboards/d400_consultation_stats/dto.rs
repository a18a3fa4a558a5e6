use crate::enums::{ConsultationMode, DoctorSpecialty};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeCount {
    pub mode: ConsultationMode,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialtyCount {
    pub specialty: DoctorSpecialty,
    pub count: u64,
}

/// Aggregate consultation statistics for the overview dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationStats {
    pub total_consultations: u64,
    pub completed_consultations: u64,
    pub ongoing_consultations: u64,
    pub cancelled_consultations: u64,
    pub disputed_consultations: u64,
    pub total_professionals: u64,
    pub active_professionals: u64,
    pub total_revenue: f64,
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub consultations_by_mode: Vec<ModeCount>,
    #[serde(default)]
    pub consultations_by_specialty: Vec<SpecialtyCount>,
}

impl ConsultationStats {
    /// Completed share of all consultations, in percent
    pub fn completion_rate(&self) -> Option<f64> {
        if self.total_consultations == 0 {
            return None;
        }
        Some(self.completed_consultations as f64 * 100.0 / self.total_consultations as f64)
    }

    pub fn count_for_mode(&self, mode: ConsultationMode) -> u64 {
        self.consultations_by_mode
            .iter()
            .filter(|m| m.mode == mode)
            .map(|m| m.count)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_rate_and_mode_lookup() {
        let json = r#"{
            "totalConsultations": 200,
            "completedConsultations": 150,
            "ongoingConsultations": 4,
            "cancelledConsultations": 30,
            "disputedConsultations": 2,
            "totalProfessionals": 18,
            "activeProfessionals": 12,
            "totalRevenue": 1250000.0,
            "averageRating": 4.6,
            "consultationsByMode": [
                {"mode": "CHAT", "count": 120},
                {"mode": "VIDEO", "count": 80}
            ]
        }"#;
        let stats: ConsultationStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.completion_rate(), Some(75.0));
        assert_eq!(stats.count_for_mode(ConsultationMode::Chat), 120);
        assert_eq!(stats.count_for_mode(ConsultationMode::Voice), 0);
        assert!(stats.consultations_by_specialty.is_empty());
    }

    #[test]
    fn test_completion_rate_empty() {
        let stats = ConsultationStats {
            total_consultations: 0,
            completed_consultations: 0,
            ongoing_consultations: 0,
            cancelled_consultations: 0,
            disputed_consultations: 0,
            total_professionals: 0,
            active_professionals: 0,
            total_revenue: 0.0,
            average_rating: None,
            consultations_by_mode: vec![],
            consultations_by_specialty: vec![],
        };
        assert_eq!(stats.completion_rate(), None);
    }
}

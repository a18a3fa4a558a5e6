use serde::{Deserialize, Serialize};

/// Lifecycle status of a consultation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConsultationStatus {
    Booked,
    Awaiting,
    Ongoing,
    Completed,
    Cancelled,
    Disputed,
    Refunded,
}

impl ConsultationStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ConsultationStatus::Booked => "BOOKED",
            ConsultationStatus::Awaiting => "AWAITING",
            ConsultationStatus::Ongoing => "ONGOING",
            ConsultationStatus::Completed => "COMPLETED",
            ConsultationStatus::Cancelled => "CANCELLED",
            ConsultationStatus::Disputed => "DISPUTED",
            ConsultationStatus::Refunded => "REFUNDED",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ConsultationStatus::Booked => "Booked",
            ConsultationStatus::Awaiting => "Awaiting",
            ConsultationStatus::Ongoing => "Ongoing",
            ConsultationStatus::Completed => "Completed",
            ConsultationStatus::Cancelled => "Cancelled",
            ConsultationStatus::Disputed => "Disputed",
            ConsultationStatus::Refunded => "Refunded",
        }
    }

    pub fn all() -> Vec<ConsultationStatus> {
        vec![
            ConsultationStatus::Booked,
            ConsultationStatus::Awaiting,
            ConsultationStatus::Ongoing,
            ConsultationStatus::Completed,
            ConsultationStatus::Cancelled,
            ConsultationStatus::Disputed,
            ConsultationStatus::Refunded,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }

    /// Booked, awaiting or in progress
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            ConsultationStatus::Booked | ConsultationStatus::Awaiting | ConsultationStatus::Ongoing
        )
    }

    /// No further transitions are expected from the provider
    pub fn is_final(&self) -> bool {
        matches!(
            self,
            ConsultationStatus::Completed
                | ConsultationStatus::Cancelled
                | ConsultationStatus::Refunded
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_matches_serde() {
        for status in ConsultationStatus::all() {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.code()));
            assert_eq!(ConsultationStatus::from_code(status.code()), Some(status));
        }
    }

    #[test]
    fn test_disputed_is_neither_active_nor_final() {
        assert!(!ConsultationStatus::Disputed.is_active());
        assert!(!ConsultationStatus::Disputed.is_final());
        assert!(ConsultationStatus::Ongoing.is_active());
        assert!(ConsultationStatus::Refunded.is_final());
    }
}

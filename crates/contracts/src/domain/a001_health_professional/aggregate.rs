use crate::enums::DoctorSpecialty;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Health professional registered with the consultation service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthProfessional {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub specialty: DoctorSpecialty,
    /// Registration number issued by the medical board
    pub license_number: String,
    pub years_of_experience: u32,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    /// Average patient rating, 0..=5
    pub rating: Option<f64>,
    /// Fee per consultation in the provider's currency
    pub consultation_fee: f64,
    pub is_verified: bool,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
}

impl HealthProfessional {
    /// "Dr. Jane Doe" style name used across the dashboard
    pub fn display_name(&self) -> String {
        format!("Dr. {}", self.full_name)
    }

    /// Available and verified, i.e. can be booked
    pub fn is_bookable(&self) -> bool {
        self.is_verified && self.is_available
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "id": "p-1",
            "fullName": "Ada Obi",
            "email": "ada@example.com",
            "phone": null,
            "specialty": "NUTRITIONIST",
            "licenseNumber": "MDCN-77",
            "yearsOfExperience": 6,
            "bio": null,
            "avatarUrl": null,
            "rating": 4.5,
            "consultationFee": 15000.0,
            "isVerified": true,
            "isAvailable": false,
            "createdAt": "2024-03-15T14:02:26Z"
        }"#;
        let professional: HealthProfessional = serde_json::from_str(json).unwrap();
        assert_eq!(professional.specialty, DoctorSpecialty::Nutritionist);
        assert_eq!(professional.display_name(), "Dr. Ada Obi");
        assert!(!professional.is_bookable());

        let back = serde_json::to_value(&professional).unwrap();
        assert!(back.get("licenseNumber").is_some());
        assert!(back.get("license_number").is_none());
    }
}

use serde::{Deserialize, Serialize};

/// Specialty of a health professional
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DoctorSpecialty {
    GeneralPractitioner,
    Therapist,
    Nutritionist,
    Dermatologist,
}

impl DoctorSpecialty {
    /// Wire code, identical to the serialized form
    pub fn code(&self) -> &'static str {
        match self {
            DoctorSpecialty::GeneralPractitioner => "GENERAL_PRACTITIONER",
            DoctorSpecialty::Therapist => "THERAPIST",
            DoctorSpecialty::Nutritionist => "NUTRITIONIST",
            DoctorSpecialty::Dermatologist => "DERMATOLOGIST",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            DoctorSpecialty::GeneralPractitioner => "General practitioner",
            DoctorSpecialty::Therapist => "Therapist",
            DoctorSpecialty::Nutritionist => "Nutritionist",
            DoctorSpecialty::Dermatologist => "Dermatologist",
        }
    }

    pub fn all() -> Vec<DoctorSpecialty> {
        vec![
            DoctorSpecialty::GeneralPractitioner,
            DoctorSpecialty::Therapist,
            DoctorSpecialty::Nutritionist,
            DoctorSpecialty::Dermatologist,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_string(&DoctorSpecialty::GeneralPractitioner).unwrap(),
            "\"GENERAL_PRACTITIONER\""
        );
        let parsed: DoctorSpecialty = serde_json::from_str("\"DERMATOLOGIST\"").unwrap();
        assert_eq!(parsed, DoctorSpecialty::Dermatologist);
    }

    #[test]
    fn test_code_matches_serde() {
        for specialty in DoctorSpecialty::all() {
            let json = serde_json::to_string(&specialty).unwrap();
            assert_eq!(json, format!("\"{}\"", specialty.code()));
            assert_eq!(DoctorSpecialty::from_code(specialty.code()), Some(specialty));
        }
        assert_eq!(DoctorSpecialty::from_code("SURGEON"), None);
    }
}

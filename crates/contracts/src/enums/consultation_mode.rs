use serde::{Deserialize, Serialize};

/// Channel used for a consultation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConsultationMode {
    Chat,
    Voice,
    Video,
}

impl ConsultationMode {
    pub fn code(&self) -> &'static str {
        match self {
            ConsultationMode::Chat => "CHAT",
            ConsultationMode::Voice => "VOICE",
            ConsultationMode::Video => "VIDEO",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ConsultationMode::Chat => "Chat",
            ConsultationMode::Voice => "Voice call",
            ConsultationMode::Video => "Video call",
        }
    }

    /// Icon name for `shared::icons::icon` on the frontend
    pub fn icon_name(&self) -> &'static str {
        match self {
            ConsultationMode::Chat => "message-square",
            ConsultationMode::Voice => "phone",
            ConsultationMode::Video => "video",
        }
    }

    pub fn all() -> Vec<ConsultationMode> {
        vec![
            ConsultationMode::Chat,
            ConsultationMode::Voice,
            ConsultationMode::Video,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "CHAT" => Some(ConsultationMode::Chat),
            "VOICE" => Some(ConsultationMode::Voice),
            "VIDEO" => Some(ConsultationMode::Video),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(serde_json::to_string(&ConsultationMode::Video).unwrap(), "\"VIDEO\"");
        assert_eq!(ConsultationMode::from_code("VOICE"), Some(ConsultationMode::Voice));
        assert_eq!(ConsultationMode::from_code("voice"), None);
    }
}

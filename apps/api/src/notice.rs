use serde::{Deserialize, Serialize};

pub const SAVED: &str = "Resume saved successfully!";
pub const EXPORT_PENDING: &str = "Export functionality coming soon!";
pub const SUMMARY_SUGGESTED: &str = "AI suggestion applied!";
pub const DESCRIPTION_SUGGESTED: &str = "AI suggestions applied!";
pub const SKILLS_SUGGESTED: &str = "AI skill suggestions added!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Info,
}

/// Transient confirmation shown to the user after an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: &str) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.to_string(),
        }
    }

    pub fn info(message: &str) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.to_string(),
        }
    }
}

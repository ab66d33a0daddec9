//! Portal Models
//!
//! Plain value records shared by the store, the derived views and components.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Nationality group, decides which mandatory tasks a student gets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Nationality {
    #[default]
    #[serde(rename = "eu")]
    Eu,
    #[serde(rename = "non-eu")]
    NonEu,
    #[serde(rename = "usa")]
    Usa,
}

impl Nationality {
    pub const ALL: [Nationality; 3] = [Nationality::Eu, Nationality::NonEu, Nationality::Usa];

    pub fn as_str(&self) -> &'static str {
        match self {
            Nationality::Eu => "eu",
            Nationality::NonEu => "non-eu",
            Nationality::Usa => "usa",
        }
    }

    pub fn from_key(s: &str) -> Option<Self> {
        match s {
            "eu" => Some(Nationality::Eu),
            "non-eu" => Some(Nationality::NonEu),
            "usa" => Some(Nationality::Usa),
            _ => None,
        }
    }

    /// Badge label on the dashboard
    pub fn label(&self) -> &'static str {
        match self {
            Nationality::Eu => "EU / EEA",
            Nationality::NonEu => "Non-EU International",
            Nationality::Usa => "USA",
        }
    }

    /// Option label in the onboarding form
    pub fn onboarding_label(&self) -> &'static str {
        match self {
            Nationality::Eu => "EU / EEA Citizen",
            Nationality::NonEu => "Non-EU International",
            Nationality::Usa => "USA Citizen",
        }
    }
}

/// Task category (closed set, also used to tag comments)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskCategory {
    Irp,
    Registration,
    Fees,
    Accommodation,
    Bank,
    Pps,
    #[default]
    Other,
}

impl TaskCategory {
    pub const ALL: [TaskCategory; 7] = [
        TaskCategory::Irp,
        TaskCategory::Registration,
        TaskCategory::Fees,
        TaskCategory::Accommodation,
        TaskCategory::Bank,
        TaskCategory::Pps,
        TaskCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskCategory::Irp => "irp",
            TaskCategory::Registration => "registration",
            TaskCategory::Fees => "fees",
            TaskCategory::Accommodation => "accommodation",
            TaskCategory::Bank => "bank",
            TaskCategory::Pps => "pps",
            TaskCategory::Other => "other",
        }
    }

    pub fn from_key(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskCategory::Irp => "IRP",
            TaskCategory::Registration => "Registration",
            TaskCategory::Fees => "Fees",
            TaskCategory::Accommodation => "Accommodation",
            TaskCategory::Bank => "Bank",
            TaskCategory::Pps => "PPS",
            TaskCategory::Other => "Other",
        }
    }

    /// Longer label used by the social feed
    pub fn topic_label(&self) -> &'static str {
        match self {
            TaskCategory::Irp => "IRP Registration",
            TaskCategory::Registration => "University Registration",
            TaskCategory::Fees => "Fees & Payment",
            TaskCategory::Accommodation => "Accommodation",
            TaskCategory::Bank => "Banking",
            TaskCategory::Pps => "PPS Number",
            TaskCategory::Other => "General",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            TaskCategory::Irp => "💼",
            TaskCategory::Registration => "📝",
            TaskCategory::Fees => "💳",
            TaskCategory::Accommodation => "🏠",
            TaskCategory::Bank => "🏦",
            TaskCategory::Pps => "🆔",
            TaskCategory::Other => "📋",
        }
    }
}

/// Coarse tone of a comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    #[default]
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Sentiment::Positive => "👍",
            Sentiment::Neutral => "➖",
            Sentiment::Negative => "👎",
        }
    }
}

/// Signed-in student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub nationality: Nationality,
    pub degree: String,
    #[serde(default)]
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Checklist entry, either mandatory (from the nationality templates) or custom
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: TaskCategory,
    pub is_mandatory: bool,
    pub is_completed: bool,
    pub applicable_nationalities: Vec<Nationality>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
}

/// User input for a new custom task
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub category: TaskCategory,
    pub link: Option<String>,
    pub due_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    #[serde(default)]
    pub user_avatar: Option<String>,
    pub content: String,
    pub category: TaskCategory,
    pub sentiment: Sentiment,
    pub created_at: DateTime<Utc>,
    pub likes: u32,
}

/// User input for a new comment (sentiment is classified before dispatch)
#[derive(Debug, Clone, PartialEq)]
pub struct CommentDraft {
    pub content: String,
    pub category: TaskCategory,
    pub sentiment: Sentiment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discussion {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    #[serde(default)]
    pub user_avatar: Option<String>,
    pub title: String,
    pub content: String,
    /// Free-text label, not the closed task category
    pub category: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub replies: Vec<DiscussionReply>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiscussionDraft {
    pub title: String,
    pub content: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscussionReply {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    #[serde(default)]
    pub user_avatar: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// University resource link (static)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuickLink {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
}

/// Point of interest on the campus map (static)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CampusLocation {
    pub name: &'static str,
    /// "lat,lng"
    pub coords: &'static str,
    pub kind: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nationality_serde_keys() {
        let json = serde_json::to_string(&Nationality::ALL).unwrap();
        assert_eq!(json, r#"["eu","non-eu","usa"]"#);
        for n in Nationality::ALL {
            assert_eq!(Nationality::from_key(n.as_str()), Some(n));
        }
        assert_eq!(Nationality::from_key("mars"), None);
    }

    #[test]
    fn test_category_keys_match_serde() {
        for c in TaskCategory::ALL {
            let json = serde_json::to_string(&c).unwrap();
            assert_eq!(json, format!("\"{}\"", c.as_str()));
            assert_eq!(TaskCategory::from_key(c.as_str()), Some(c));
        }
    }
}

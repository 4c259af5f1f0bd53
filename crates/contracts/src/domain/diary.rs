use anyhow::{anyhow, bail};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const TITLE_MAX_LEN: usize = 100;
pub const CONTENT_MAX_LEN: usize = 5000;

/// Mood attached to a diary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Emotion {
    #[default]
    Happy,
    Sad,
    Angry,
    Surprise,
    Etc,
}

impl Emotion {
    pub const ALL: [Emotion; 5] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Surprise,
        Emotion::Etc,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Emotion::Happy => "Happy",
            Emotion::Sad => "Sad",
            Emotion::Angry => "Angry",
            Emotion::Surprise => "Surprised",
            Emotion::Etc => "Other",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Happy => "Happy",
            Emotion::Sad => "Sad",
            Emotion::Angry => "Angry",
            Emotion::Surprise => "Surprise",
            Emotion::Etc => "Etc",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Emotion {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Emotion::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| anyhow!("unknown emotion: {s}"))
    }
}

/// A stored diary entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diary {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub emotion: Emotion,
    pub created_at: DateTime<Utc>,
}

/// Form payload of the diary composer, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DiaryDraft {
    pub title: String,
    pub content: String,
    pub emotion: Emotion,
}

impl DiaryDraft {
    pub fn validate(&self) -> anyhow::Result<()> {
        let title_len = self.title.trim().chars().count();
        if title_len == 0 {
            bail!("Please enter a title.");
        }
        if title_len > TITLE_MAX_LEN {
            bail!("Title must be at most {TITLE_MAX_LEN} characters.");
        }
        let content_len = self.content.trim().chars().count();
        if content_len == 0 {
            bail!("Please enter some content.");
        }
        if content_len > CONTENT_MAX_LEN {
            bail!("Content must be at most {CONTENT_MAX_LEN} characters.");
        }
        Ok(())
    }

    pub fn into_diary(self, id: i64, created_at: DateTime<Utc>) -> Diary {
        Diary {
            id,
            title: self.title.trim().to_string(),
            content: self.content.trim().to_string(),
            emotion: self.emotion,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, content: &str) -> DiaryDraft {
        DiaryDraft {
            title: title.to_string(),
            content: content.to_string(),
            emotion: Emotion::Sad,
        }
    }

    #[test]
    fn test_emotion_parse() {
        assert_eq!("Surprise".parse::<Emotion>().unwrap(), Emotion::Surprise);
        assert!("Bored".parse::<Emotion>().is_err());
    }

    #[test]
    fn test_validate_accepts_regular_draft() {
        assert!(draft("Sunday", "Went hiking").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        assert!(draft("   ", "body").validate().is_err());
        assert!(draft("title", "").validate().is_err());
    }

    #[test]
    fn test_validate_length_limits() {
        let long_title = "x".repeat(TITLE_MAX_LEN + 1);
        assert!(draft(&long_title, "body").validate().is_err());
        let max_title = "x".repeat(TITLE_MAX_LEN);
        assert!(draft(&max_title, "body").validate().is_ok());
    }

    #[test]
    fn test_diary_json_shape() {
        let created_at = "2024-03-15T14:02:26Z".parse().unwrap();
        let diary = draft(" Sunday ", "Went hiking").into_diary(3, created_at);
        let json = serde_json::to_value(&diary).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["title"], "Sunday");
        assert_eq!(json["emotion"], "Sad");
        assert!(json.get("createdAt").is_some());
    }
}

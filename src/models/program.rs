use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// A recommendable program (event, session, workshop)
///
/// Fields are plain text; only `notes` and `category` feed the similarity
/// model, the rest are carried through for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Program {
    /// Display label, not guaranteed unique
    pub name: String,
    /// Tag used for matching against user preferences
    pub category: String,
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub date_time: String,
    /// Free text description, vectorized for similarity scoring
    #[serde(default)]
    pub notes: String,
}

impl Program {
    /// Creates a new program
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        venue: impl Into<String>,
        date_time: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            venue: venue.into(),
            date_time: date_time.into(),
            notes: notes.into(),
        }
    }

    /// Checks the structural requirements a program must meet before it
    /// enters a catalog
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Program name must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether this program's category equals `category`, ignoring case and
    /// surrounding whitespace
    pub fn matches_category(&self, category: &str) -> bool {
        normalize_category(&self.category) == normalize_category(category)
    }

    /// Text used to represent this program in the TF-IDF corpus
    pub fn document_text(&self) -> String {
        format!("{} {}", self.category, self.notes)
    }
}

/// Normalized form used for category comparison
fn normalize_category(category: &str) -> String {
    category.trim().to_lowercase()
}

/// On-disk shape of a program data file: `{"programs": [...]}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramData {
    pub programs: Vec<Program>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ai_basics() -> Program {
        Program::new(
            "AI Basics",
            "AI",
            "Hall A",
            "2024-05-01 10:00",
            "Introduction to Artificial Intelligence",
        )
    }

    #[test]
    fn test_matches_category_case_insensitive() {
        let program = ai_basics();
        assert!(program.matches_category("AI"));
        assert!(program.matches_category("ai"));
        assert!(program.matches_category("  Ai "));
        assert!(!program.matches_category("IoT"));
        assert!(!program.matches_category("A"));
    }

    #[test]
    fn test_document_text_combines_category_and_notes() {
        let program = ai_basics();
        assert_eq!(
            program.document_text(),
            "AI Introduction to Artificial Intelligence"
        );
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let mut program = ai_basics();
        assert!(program.validate().is_ok());

        program.name = "   ".to_string();
        assert!(matches!(program.validate(), Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_deserialize_defaults_optional_text() {
        let json = r#"{"name": "IoT for Smart Homes", "category": "IoT"}"#;
        let program: Program = serde_json::from_str(json).unwrap();
        assert_eq!(program.name, "IoT for Smart Homes");
        assert_eq!(program.venue, "");
        assert_eq!(program.date_time, "");
        assert_eq!(program.notes, "");
    }

    #[test]
    fn test_deserialize_requires_category() {
        let json = r#"{"name": "IoT for Smart Homes"}"#;
        assert!(serde_json::from_str::<Program>(json).is_err());
    }
}

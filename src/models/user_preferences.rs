use serde::{Deserialize, Serialize};

/// Categories a user wants recommendations for
///
/// Order and duplicates are preserved: a category listed twice contributes
/// twice to the query document and so weighs more in scoring.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserPreferences {
    #[serde(default)]
    pub preferred_categories: Vec<String>,
}

impl UserPreferences {
    /// Creates empty user preferences
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a preferred category, keeping any earlier occurrence
    pub fn add_category(&mut self, category: impl Into<String>) {
        self.preferred_categories.push(category.into());
    }

    /// Gets the preferred categories in the order they were given
    pub fn categories(&self) -> &[String] {
        &self.preferred_categories
    }

    pub fn is_empty(&self) -> bool {
        self.preferred_categories.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for UserPreferences {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            preferred_categories: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_preferences() {
        let prefs = UserPreferences::new();
        assert!(prefs.is_empty());
        assert!(prefs.categories().is_empty());
    }

    #[test]
    fn test_add_category_keeps_duplicates() {
        let mut prefs = UserPreferences::new();
        prefs.add_category("AI");
        prefs.add_category("IoT");
        prefs.add_category("AI");
        assert_eq!(prefs.categories(), ["AI", "IoT", "AI"]);
    }

    #[test]
    fn test_deserialize_preferences_file_shape() {
        let json = r#"{"preferred_categories": ["AI", "IoT"]}"#;
        let prefs: UserPreferences = serde_json::from_str(json).unwrap();
        assert_eq!(prefs, UserPreferences::from_iter(["AI", "IoT"]));
    }
}

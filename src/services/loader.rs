use std::path::Path;

use crate::{
    error::{AppError, AppResult},
    models::{Program, ProgramData, UserPreferences},
};

/// Loads program data from a JSON file shaped `{"programs": [...]}`
pub fn load_program_data(path: impl AsRef<Path>) -> AppResult<Vec<Program>> {
    let path = path.as_ref();
    let contents = read_file(path)?;
    let programs = parse_program_data(&contents)?;

    tracing::info!(path = %path.display(), count = programs.len(), "Program data loaded");
    Ok(programs)
}

/// Loads user preferences from a JSON file shaped
/// `{"preferred_categories": [...]}`
pub fn load_user_preferences(path: impl AsRef<Path>) -> AppResult<UserPreferences> {
    let path = path.as_ref();
    let contents = read_file(path)?;
    let preferences = parse_user_preferences(&contents)?;

    tracing::info!(
        path = %path.display(),
        categories = ?preferences.categories(),
        "User preferences loaded"
    );
    Ok(preferences)
}

/// Parses and validates program data
pub fn parse_program_data(json: &str) -> AppResult<Vec<Program>> {
    let data: ProgramData = serde_json::from_str(json)?;

    for (index, program) in data.programs.iter().enumerate() {
        program.validate().map_err(|e| match e {
            AppError::InvalidInput(reason) => {
                AppError::InvalidInput(format!("program at index {}: {}", index, reason))
            }
            other => other,
        })?;
    }

    Ok(data.programs)
}

pub fn parse_user_preferences(json: &str) -> AppResult<UserPreferences> {
    Ok(serde_json::from_str(json)?)
}

fn read_file(path: &Path) -> AppResult<String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => AppError::NotFound(path.display().to_string()),
        _ => AppError::Io(e),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const PROGRAMS_JSON: &str = r#"{
        "programs": [
            {
                "name": "AI Basics",
                "category": "AI",
                "venue": "Hall A",
                "date_time": "2024-05-01 10:00",
                "notes": "Introduction to Artificial Intelligence"
            },
            {
                "name": "IoT for Smart Homes",
                "category": "IoT",
                "venue": "Hall B"
            }
        ]
    }"#;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_program_data() {
        let programs = parse_program_data(PROGRAMS_JSON).unwrap();
        assert_eq!(programs.len(), 2);
        assert_eq!(programs[0].name, "AI Basics");
        assert_eq!(programs[1].venue, "Hall B");
        assert_eq!(programs[1].notes, "");
    }

    #[test]
    fn test_parse_program_data_rejects_blank_name() {
        let json = r#"{"programs": [{"name": "ok", "category": "AI"}, {"name": " ", "category": "AI"}]}"#;
        let err = parse_program_data(json).unwrap_err();
        match err {
            AppError::InvalidInput(msg) => assert!(msg.contains("index 1")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_program_data_requires_programs_key() {
        let err = parse_program_data(r#"{"events": []}"#).unwrap_err();
        assert!(matches!(err, AppError::Json(_)));
    }

    #[test]
    fn test_load_program_data_from_file() {
        let file = write_temp(PROGRAMS_JSON);
        let programs = load_program_data(file.path()).unwrap();
        assert_eq!(programs.len(), 2);
        assert_eq!(programs[1].category, "IoT");
    }

    #[test]
    fn test_load_user_preferences_from_file() {
        let file = write_temp(r#"{"preferred_categories": ["AI", "IoT", "AI"]}"#);
        let prefs = load_user_preferences(file.path()).unwrap();
        assert_eq!(prefs.categories(), ["AI", "IoT", "AI"]);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_program_data(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}

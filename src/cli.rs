use std::fmt::Write;
use std::path::PathBuf;

use clap::Parser;

use crate::error::AppResult;
use crate::services::{
    loader, top_n_from_signed, CatalogStore, Recommendation, RecommendationStatus, Recommender,
    TfIdfVectorizer, ENGLISH_STOP_WORDS,
};

/// Command-line arguments for the `recommend` binary
#[derive(Parser, Debug)]
#[command(name = "recommend")]
#[command(about = "Generate program recommendations.")]
#[command(version)]
pub struct Cli {
    /// Path to program data JSON file
    #[arg(long)]
    pub programs: PathBuf,

    /// Path to user preferences JSON file
    #[arg(long)]
    pub preferences: PathBuf,

    /// Number of recommended programs to return
    #[arg(
        long = "top-n",
        visible_alias = "top_n",
        default_value_t = 5,
        allow_negative_numbers = true
    )]
    pub top_n: i64,

    /// Drop common English words before vectorizing
    #[arg(long)]
    pub english_stop_words: bool,
}

/// Loads both input files, runs the recommender and returns the report text
pub fn run(cli: &Cli) -> AppResult<String> {
    let programs = loader::load_program_data(&cli.programs)?;
    let preferences = loader::load_user_preferences(&cli.preferences)?;

    let catalog = CatalogStore::with_programs(programs);
    let vectorizer = if cli.english_stop_words {
        TfIdfVectorizer::with_stop_words(ENGLISH_STOP_WORDS)
    } else {
        TfIdfVectorizer::new()
    };

    let recommendation = Recommender::new(&catalog)
        .with_vectorizer(vectorizer)
        .generate_recommendations(preferences.categories(), top_n_from_signed(cli.top_n));

    Ok(render(&recommendation))
}

/// Formats a recommendation as one line per program
pub fn render(recommendation: &Recommendation<'_>) -> String {
    let mut out = String::new();

    if recommendation.is_empty() {
        if recommendation.status != RecommendationStatus::Ok {
            let _ = writeln!(out, "{}", recommendation.status);
        }
        out.push_str("No recommendations available.\n");
        return out;
    }

    for program in recommendation.iter_programs() {
        let _ = writeln!(
            out,
            "Program Name: {}, Category: {}, Venue: {}",
            program.name, program.category, program.venue
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn programs_file() -> tempfile::NamedTempFile {
        write_temp(
            r#"{"programs": [
                {"name": "AI Basics", "category": "AI", "venue": "Hall A",
                 "date_time": "2024-05-01 10:00", "notes": "Introduction to Artificial Intelligence"},
                {"name": "IoT for Smart Homes", "category": "IoT", "venue": "Hall B",
                 "date_time": "2024-05-02 14:00", "notes": "Learn to build IoT-based smart home systems"}
            ]}"#,
        )
    }

    fn cli_for(
        programs: &tempfile::NamedTempFile,
        preferences: &tempfile::NamedTempFile,
        extra: &[&str],
    ) -> Cli {
        let mut args = vec![
            "recommend".to_string(),
            "--programs".to_string(),
            programs.path().display().to_string(),
            "--preferences".to_string(),
            preferences.path().display().to_string(),
        ];
        args.extend(extra.iter().map(|s| s.to_string()));
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_parse_defaults() {
        let cli =
            Cli::try_parse_from(["recommend", "--programs", "p.json", "--preferences", "u.json"])
                .unwrap();
        assert_eq!(cli.top_n, 5);
        assert!(!cli.english_stop_words);
    }

    #[test]
    fn test_parse_top_n_alias_and_negative() {
        let cli = Cli::try_parse_from([
            "recommend", "--programs", "p.json", "--preferences", "u.json", "--top_n", "-2",
        ])
        .unwrap();
        assert_eq!(cli.top_n, -2);
    }

    #[test]
    fn test_parse_requires_input_paths() {
        assert!(Cli::try_parse_from(["recommend", "--programs", "p.json"]).is_err());
    }

    #[test]
    fn test_run_prints_matches() {
        let programs = programs_file();
        let preferences = write_temp(r#"{"preferred_categories": ["AI", "IoT"]}"#);

        let output = run(&cli_for(&programs, &preferences, &[])).unwrap();

        assert_eq!(
            output,
            "Program Name: IoT for Smart Homes, Category: IoT, Venue: Hall B\n\
             Program Name: AI Basics, Category: AI, Venue: Hall A\n"
        );
    }

    #[test]
    fn test_run_without_matches() {
        let programs = programs_file();
        let preferences = write_temp(r#"{"preferred_categories": ["Robotics"]}"#);

        let output = run(&cli_for(&programs, &preferences, &[])).unwrap();

        assert_eq!(
            output,
            "No programs found for the selected categories.\nNo recommendations available.\n"
        );
    }

    #[test]
    fn test_run_with_empty_catalog() {
        let programs = write_temp(r#"{"programs": []}"#);
        let preferences = write_temp(r#"{"preferred_categories": ["AI"]}"#);

        let output = run(&cli_for(&programs, &preferences, &[])).unwrap();

        assert_eq!(output, "No programs available.\nNo recommendations available.\n");
    }

    #[test]
    fn test_run_with_non_positive_top_n() {
        let programs = programs_file();
        let preferences = write_temp(r#"{"preferred_categories": ["AI"]}"#);

        let output = run(&cli_for(&programs, &preferences, &["--top-n", "0"])).unwrap();

        assert_eq!(output, "No recommendations available.\n");
    }

    #[test]
    fn test_run_reports_load_errors() {
        let programs = write_temp("not json");
        let preferences = write_temp(r#"{"preferred_categories": ["AI"]}"#);

        assert!(run(&cli_for(&programs, &preferences, &[])).is_err());
    }
}

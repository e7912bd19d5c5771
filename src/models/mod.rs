pub mod program;
pub mod user_preferences;

pub use program::{Program, ProgramData};
pub use user_preferences::UserPreferences;

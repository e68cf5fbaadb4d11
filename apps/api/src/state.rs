use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::Config;
use crate::errors::AppError;
use crate::planner::generator::TextGenerator;

/// Shown wherever the generation features are unavailable.
pub const AI_DISABLED_NOTICE: &str =
    "GROQ_API_KEY not found. AI features are disabled; calorie tracking and premium activation still work.";

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    /// `None` when no API key is configured.
    pub generator: Option<Arc<dyn TextGenerator>>,
    pub config: Config,
}

impl AppState {
    /// The configured text generator, or `AiDisabled` so callers get a visible notice.
    pub fn generator(&self) -> Result<&dyn TextGenerator, AppError> {
        self.generator.as_deref().ok_or(AppError::AiDisabled)
    }

    pub fn ai_enabled(&self) -> bool {
        self.generator.is_some()
    }
}

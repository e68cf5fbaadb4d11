// Shared prompt fragments.
// Each feature that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting fragments.

/// Appended to every plan prompt so the front end can render the reply directly.
pub const MARKDOWN_ONLY_INSTRUCTION: &str = "Return only the plan in markdown.";

/// Sampling temperature for workout and diet plans.
pub const PLAN_TEMPERATURE: f32 = 0.5;

/// Sampling temperature for chatbot answers.
pub const CHAT_TEMPERATURE: f32 = 0.4;

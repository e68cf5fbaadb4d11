// Plan Generator
// Turns structured fitness profiles into prompts and relays them to the text generator.
// All LLM calls go through llm_client — nothing here talks to Groq directly.

pub mod generator;
pub mod handlers;
pub mod profile;
pub mod prompts;

// Writing API: prompt templates, model call, output sanitizing.
// All model calls go through llm_client — no direct HTTP calls here.

pub mod generator;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod sanitizer;
pub mod tone;

//! The two editorial flows: typed inputs and outputs, prompt templates, and
//! the service traits the rest of the system consumes them through.

pub mod suggest_tags;
pub mod summarize_article;

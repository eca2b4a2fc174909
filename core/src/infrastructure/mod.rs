pub mod journal;
pub mod llm;

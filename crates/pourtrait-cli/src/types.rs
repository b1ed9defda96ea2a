use std::path::PathBuf;

use pourtrait_model::{Category, Confidence};

#[derive(Debug)]
pub struct ResolveResult {
    pub lines: Vec<LineOutcome>,
    pub resolved_count: usize,
    pub unknown_count: usize,
    pub saved_to: Option<PathBuf>,
}

#[derive(Debug)]
pub struct LineOutcome {
    pub raw_text: String,
    pub category: Option<Category>,
    pub matched_name: Option<String>,
    pub confidence: Option<Confidence>,
}

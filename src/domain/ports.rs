use crate::core::combine::BuildMatrix;
use crate::domain::model::{RenderResult, SlotMap};
use crate::utils::error::Result;

/// Source of candidate snippet directory names. Implementations only ever
/// expose names of immediate subdirectories, never file contents.
pub trait SnippetSource {
    fn list_dirs(&self) -> Result<Vec<String>>;

    /// Path shown in diagnostics for this source.
    fn location(&self) -> &str;
}

pub trait ConfigProvider {
    fn snippets_dir(&self) -> &str;
    fn board(&self) -> &str;
    fn shield(&self) -> &str;
    fn artifact_prefix(&self) -> &str;
    fn base_snippets(&self) -> &[String];
    fn settings_reset(&self) -> bool;
    fn limit(&self) -> Option<usize>;
}

/// The three pipeline stages: discovery, combination, rendering.
pub trait Pipeline {
    fn discover(&self) -> Result<SlotMap>;
    fn combine(&self, slots: SlotMap) -> Result<BuildMatrix>;
    fn render(&self, matrix: BuildMatrix) -> Result<RenderResult>;
}

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Shield value of the sentinel entry appended after the combination matrix.
pub const SETTINGS_RESET_SHIELD: &str = "settings_reset";

/// One `Slot<N>_<Module>` snippet directory, parsed from its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSnippet {
    pub slot: u32,
    pub module: String,
}

impl SlotSnippet {
    pub fn new(slot: u32, module: impl Into<String>) -> Self {
        Self {
            slot,
            module: module.into(),
        }
    }

    /// The directory name this snippet was discovered under.
    pub fn snippet_name(&self) -> String {
        format!("Slot{}_{}", self.slot, self.module)
    }
}

/// Discovered snippets grouped by slot index. BTreeMap keeps slots in
/// ascending order; each value list is sorted by module name.
pub type SlotMap = BTreeMap<u32, Vec<SlotSnippet>>;

/// One build.yaml entry for a single combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixEntry {
    pub board: String,
    pub shield: String,
    pub snippet: Vec<String>,
    pub artifact_name: String,
}

impl MatrixEntry {
    /// Space-joined snippet field as it appears in build.yaml.
    pub fn snippet_field(&self) -> String {
        self.snippet.join(" ")
    }
}

/// Output of the render stage.
#[derive(Debug, Clone)]
pub struct RenderResult {
    pub entries: Vec<MatrixEntry>,
    pub yaml: String,
    pub emitted: usize,
}

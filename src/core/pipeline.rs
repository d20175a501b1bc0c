use crate::core::combine::BuildMatrix;
use crate::core::{ConfigProvider, MatrixEntry, Pipeline, RenderResult, SlotMap, SnippetSource};
use crate::domain::model::{SlotSnippet, SETTINGS_RESET_SHIELD};
use crate::utils::error::{MatrixError, Result};
use regex::Regex;
use std::collections::BTreeMap;

pub struct MatrixPipeline<S: SnippetSource, C: ConfigProvider> {
    source: S,
    config: C,
    slot_pattern: Regex,
}

impl<S: SnippetSource, C: ConfigProvider> MatrixPipeline<S, C> {
    pub fn new(source: S, config: C) -> Self {
        Self {
            source,
            config,
            // Anchored: the whole directory name must match. The module part
            // is greedy, so names like A_1_B stay one module.
            slot_pattern: Regex::new(r"^Slot(\d+)_(.+)$").expect("valid slot pattern"),
        }
    }
}

impl<S: SnippetSource, C: ConfigProvider> Pipeline for MatrixPipeline<S, C> {
    fn discover(&self) -> Result<SlotMap> {
        let mut slots: SlotMap = BTreeMap::new();

        for name in self.source.list_dirs()? {
            let Some(caps) = self.slot_pattern.captures(&name) else {
                tracing::debug!("Skipping non-slot directory: {}", name);
                continue;
            };
            // A digit run too large for u32 is treated like any other
            // non-matching name.
            let Ok(slot) = caps[1].parse::<u32>() else {
                tracing::debug!("Skipping oversized slot index: {}", name);
                continue;
            };
            slots
                .entry(slot)
                .or_default()
                .push(SlotSnippet::new(slot, &caps[2]));
        }

        if slots.is_empty() {
            return Err(MatrixError::NoSlotsDiscovered {
                path: self.source.location().to_string(),
            });
        }

        for entries in slots.values_mut() {
            entries.sort_by(|a, b| a.module.cmp(&b.module));
        }

        Ok(slots)
    }

    fn combine(&self, slots: SlotMap) -> Result<BuildMatrix> {
        Ok(BuildMatrix::from_slots(slots))
    }

    fn render(&self, matrix: BuildMatrix) -> Result<RenderResult> {
        let limit = self.config.limit();
        let mut entries = Vec::new();

        for combo in matrix.combinations() {
            if limit.is_some_and(|max| entries.len() >= max) {
                break;
            }

            let mut snippet: Vec<String> = self.config.base_snippets().to_vec();
            snippet.extend(combo.iter().map(|s| s.snippet_name()));

            let modules: Vec<&str> = combo.iter().map(|s| s.module.as_str()).collect();
            let artifact_name =
                format!("{}_{}", self.config.artifact_prefix(), modules.join("_"));

            entries.push(MatrixEntry {
                board: self.config.board().to_string(),
                shield: self.config.shield().to_string(),
                snippet,
                artifact_name,
            });
        }

        let emitted = entries.len();
        let yaml = render_yaml(&entries, self.config.board(), self.config.settings_reset());

        Ok(RenderResult {
            entries,
            yaml,
            emitted,
        })
    }
}

/// Render build.yaml text: a header, one indented list item per entry, a
/// blank line between entries and no trailing blank line.
fn render_yaml(entries: &[MatrixEntry], board: &str, settings_reset: bool) -> String {
    let mut lines: Vec<String> = vec!["---".to_string(), "include:".to_string()];

    for entry in entries {
        lines.push(format!("  - board: {}", entry.board));
        lines.push(format!("    shield: {}", entry.shield));
        lines.push(format!("    snippet: {}", entry.snippet_field()));
        lines.push(format!("    artifact-name: {}", entry.artifact_name));
        lines.push(String::new());
    }

    if settings_reset {
        lines.push(format!("  - board: {}", board));
        lines.push(format!("    shield: {}", SETTINGS_RESET_SHIELD));
        lines.push(String::new());
    }

    if lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }

    lines.join("\n")
}

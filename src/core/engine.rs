use crate::core::Pipeline;
use crate::domain::model::{RenderResult, SlotMap};
use crate::utils::error::Result;

pub struct MatrixEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> MatrixEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<RenderResult> {
        tracing::info!("Discovering slot snippets...");
        let slots = self.pipeline.discover()?;
        tracing::info!("Discovered {} slots", slots.len());

        let matrix = self.pipeline.combine(slots)?;
        tracing::info!("Matrix holds {} combinations", matrix.total());

        let result = self.pipeline.render(matrix)?;
        tracing::info!("Emitted {} build entries", result.emitted);

        Ok(result)
    }

    /// Dry-run report: per-slot module counts and the total combination
    /// count. Never touches the render stage.
    pub fn summarize(&self) -> Result<String> {
        let slots = self.pipeline.discover()?;
        Ok(summary_text(&slots))
    }
}

fn summary_text(slots: &SlotMap) -> String {
    let mut lines = vec!["Discovered slot snippets:".to_string()];
    let mut total: usize = 1;

    for (slot, entries) in slots {
        let names: Vec<&str> = entries.iter().map(|s| s.module.as_str()).collect();
        lines.push(format!(
            "  Slot{}: {} modules -> {}",
            slot,
            entries.len(),
            names.join(", ")
        ));
        total *= entries.len();
    }

    lines.push(format!("Total combinations: {}", total));
    lines.join("\n")
}

use crate::config::AppConfig;
use crate::scanner;
use crate::selection::{self, SelectionPlan};
use std::path::Path;
use tracing::info;

pub struct SelectionSummary {
    pub delayed_selected: usize,
    pub delayed_target: usize,
    pub category_selected: usize,
    pub category_target: usize,
}

/// Scan both pools and build the selection plan. Copying the chosen files
/// is the caller's job.
pub fn run_selection(cfg: &AppConfig) -> anyhow::Result<(SelectionPlan, SelectionSummary)> {
    info!("Starting scan phase...");
    let delayed = scanner::scan_delayed_recall(
        Path::new(&cfg.selection.delayed_recall_dir),
        &cfg.categories,
    )?;
    let category =
        scanner::scan_category(Path::new(&cfg.selection.category_dir), &cfg.categories)?;
    info!(
        "Scan complete. Matched {} delayed recall and {} category drawings.",
        delayed.len(),
        category.len()
    );

    info!("Starting selection phase...");
    let plan = selection::build_plan(&delayed, &category, &cfg.categories, cfg.selection.seed);
    info!("Selection complete.");

    // Targets are informational only; actual counts may fall short.
    let target = 2 * cfg.categories.len();
    let summary = SelectionSummary {
        delayed_selected: plan.delayed_recall.len(),
        delayed_target: target,
        category_selected: plan.category.len(),
        category_target: target,
    };
    Ok((plan, summary))
}

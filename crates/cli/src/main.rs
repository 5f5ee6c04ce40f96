use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::Path;
use stimuli_core::config;
use stimuli_core::config::AppConfig;
use stimuli_core::{codegen, pipeline, scanner};
use tracing::{info, warn};

mod materialize;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Select { dry_run, json } => run_select(cfg, dry_run, json),
        Commands::Generate => run_generate(cfg),
    }
}

#[derive(Parser)]
#[command(name = "stimuli-prep")]
#[command(about = "Drawing stimulus preparation for the replication study", long_about = None)]
struct Cli {
    /// Path to config TOML
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Randomly select drawings per category and copy them into the output tree
    Select {
        /// Do not copy anything, only print what would be selected
        #[arg(long, default_value_t = false)]
        dry_run: bool,
        /// Output JSON summary
        #[arg(long)]
        json: bool,
    },
    /// Emit the stimulus-loading code for an already-curated drawing set
    Generate,
}

fn run_select(cfg: AppConfig, dry_run: bool, json: bool) -> Result<()> {
    let (plan, summary) = pipeline::run_selection(&cfg)?;

    if !dry_run {
        let output_root = Path::new(&cfg.selection.output_root);
        info!("Copying selected drawings to {}", output_root.display());
        materialize::copy_into(
            &plan.delayed_recall,
            Path::new(&cfg.selection.delayed_recall_dir),
            &output_root.join("delayed_recall"),
        )?;
        materialize::copy_into(
            &plan.category,
            Path::new(&cfg.selection.category_dir),
            &output_root.join("category"),
        )?;
    }

    if json {
        let summary_json = serde_json::json!({
            "status": "ok",
            "dry_run": dry_run,
            "delayed_recall": {
                "selected": summary.delayed_selected,
                "target": summary.delayed_target,
                "files": sorted(&plan.delayed_recall),
            },
            "category": {
                "selected": summary.category_selected,
                "target": summary.category_target,
                "files": sorted(&plan.category),
            },
        });
        println!("{}", serde_json::to_string_pretty(&summary_json)?);
    } else {
        println!(
            "selected {} delayed recall drawings (target: {})",
            summary.delayed_selected, summary.delayed_target
        );
        println!(
            "selected {} category drawings (target: {})",
            summary.category_selected, summary.category_target
        );
        println!();
        println!("Selected delayed recall drawings:");
        for f in sorted(&plan.delayed_recall) {
            println!("   {}", f);
        }
        println!();
        println!("Selected category drawings:");
        for f in sorted(&plan.category) {
            println!("   {}", f);
        }
    }
    Ok(())
}

fn run_generate(cfg: AppConfig) -> Result<()> {
    let delayed_dir = Path::new(&cfg.generator.delayed_recall_dir);
    if !delayed_dir.is_dir() {
        warn!(
            "curated drawing root {} not found; run from the project root",
            delayed_dir.display()
        );
        return Ok(());
    }

    let delayed = scanner::scan_delayed_recall(delayed_dir, &cfg.categories)?;
    let category_dir = Path::new(&cfg.generator.category_dir);
    let category = if category_dir.is_dir() {
        scanner::scan_category(category_dir, &cfg.categories)?
    } else {
        Vec::new()
    };

    let code = codegen::generate(&cfg.generator, &delayed, &category, &cfg.categories);
    print!("{}", code);
    Ok(())
}

/// Printed file lists are sorted; selection order stays category-driven.
fn sorted(files: &[String]) -> Vec<String> {
    let mut v = files.to_vec();
    v.sort();
    v
}

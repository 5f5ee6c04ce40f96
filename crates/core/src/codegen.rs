//! Emits the presentation-layer stimulus array for a curated drawing set.
//!
//! The output is a JavaScript function literal consumed by the experiment
//! runner; it goes to stdout and is never persisted by this tool.

use crate::config::GeneratorConfig;
use crate::models::{CategoryDrawing, DelayedRecallDrawing, Memorability};
use std::collections::HashMap;

/// One trial block in the generated code.
#[derive(Debug, Clone)]
pub struct StimulusDescriptor {
    pub drawing: String,
    pub condition: &'static str,
    pub category: String,
    pub target_image: Option<String>,
    pub memorability: Option<Memorability>,
    pub high_image: String,
    pub low_image: String,
    pub foil_image: String,
}

impl StimulusDescriptor {
    fn delayed_recall(cfg: &GeneratorConfig, category: &str, filename: &str, memorability: Memorability) -> Self {
        Self {
            drawing: format!("{}/delayed_recall/{}", cfg.drawing_base, filename),
            condition: "delayed_recall",
            category: category.to_string(),
            target_image: Some(stim_path(cfg, category, memorability.as_str())),
            memorability: Some(memorability),
            high_image: stim_path(cfg, category, "high"),
            low_image: stim_path(cfg, category, "low"),
            foil_image: stim_path(cfg, category, "foil"),
        }
    }

    fn category(cfg: &GeneratorConfig, category: &str, filename: &str) -> Self {
        Self {
            drawing: format!("{}/category/{}", cfg.drawing_base, filename),
            condition: "category",
            category: category.to_string(),
            target_image: None,
            memorability: None,
            high_image: stim_path(cfg, category, "high"),
            low_image: stim_path(cfg, category, "low"),
            foil_image: stim_path(cfg, category, "foil"),
        }
    }

    fn write_block(&self, out: &mut String) {
        out.push_str("    stimuli.push({\n");
        out.push_str(&format!("        drawing: '{}',\n", self.drawing));
        out.push_str(&format!("        condition: '{}',\n", self.condition));
        out.push_str(&format!("        category: '{}',\n", self.category));
        out.push_str(&format!("        target_image: {},\n", js_str(self.target_image.as_deref())));
        out.push_str(&format!(
            "        memorability: {},\n",
            js_str(self.memorability.map(|m| m.as_str()))
        ));
        out.push_str(&format!("        high_image: '{}',\n", self.high_image));
        out.push_str(&format!("        low_image: '{}',\n", self.low_image));
        out.push_str(&format!("        foil_image: '{}'\n", self.foil_image));
        out.push_str("    });\n");
    }
}

fn stim_path(cfg: &GeneratorConfig, category: &str, suffix: &str) -> String {
    format!("{}/{}_{}.jpg", cfg.stim_base, category, suffix)
}

fn js_str(value: Option<&str>) -> String {
    match value {
        Some(v) => format!("'{}'", v),
        None => "null".to_string(),
    }
}

/// Generate the stimulus-loading function for an already-curated set.
///
/// No sampling happens here: every matching file is considered final. Per
/// category the emitted slots are the high file, the low file, and the
/// first two category files when at least two exist; a missing slot emits
/// a marker comment instead of a block.
pub fn generate(
    cfg: &GeneratorConfig,
    delayed: &[DelayedRecallDrawing],
    category: &[CategoryDrawing],
    categories: &[String],
) -> String {
    // Later files overwrite earlier ones within a slot, so with sorted
    // scanning the lexicographically last file wins.
    let mut slots: HashMap<&str, (Option<&str>, Option<&str>)> = HashMap::new();
    for r in delayed {
        let entry = slots.entry(r.scene.as_str()).or_default();
        match r.memorability {
            Memorability::High => entry.0 = Some(r.filename.as_str()),
            Memorability::Low => entry.1 = Some(r.filename.as_str()),
        }
    }
    let mut by_category: HashMap<&str, Vec<&str>> = HashMap::new();
    for r in category {
        by_category
            .entry(r.scene.as_str())
            .or_default()
            .push(r.filename.as_str());
    }

    let mut out = String::new();
    out.push_str("function generateDrawingStimuli() {\n");
    out.push_str("    const stimuli = [];\n\n");

    for cat in categories {
        out.push_str(&format!("    // {}\n", cat.to_uppercase()));

        let (high, low) = slots.get(cat.as_str()).copied().unwrap_or((None, None));
        match high {
            Some(file) => {
                StimulusDescriptor::delayed_recall(cfg, cat, file, Memorability::High)
                    .write_block(&mut out);
            }
            None => out.push_str("    // !! no high-memorable delayed recall drawing found\n"),
        }
        match low {
            Some(file) => {
                StimulusDescriptor::delayed_recall(cfg, cat, file, Memorability::Low)
                    .write_block(&mut out);
            }
            None => out.push_str("    // !! no low-memorable delayed recall drawing found\n"),
        }

        let files = by_category
            .get(cat.as_str())
            .map(|v| v.as_slice())
            .unwrap_or(&[]);
        if files.len() >= 2 {
            for file in &files[..2] {
                StimulusDescriptor::category(cfg, cat, file).write_block(&mut out);
            }
        } else {
            out.push_str(&format!(
                "    // !! less than 2 category drawings found ({} available)\n",
                files.len()
            ));
        }
        out.push('\n');
    }

    out.push_str("    return stimuli;\n");
    out.push_str("}\n\n");

    // The count tracks complete high/low pairs and available category
    // files: a lone high or low slot contributes 0 even though it emits
    // one block, and a lone category file contributes 1 though it emits
    // none. The downstream eyeball check expects these exact numbers.
    let delayed_total: usize = categories
        .iter()
        .map(|c| match slots.get(c.as_str()) {
            Some((Some(_), Some(_))) => 2,
            _ => 0,
        })
        .sum();
    let category_total: usize = categories
        .iter()
        .map(|c| by_category.get(c.as_str()).map_or(0, |v| v.len().min(2)))
        .sum();
    out.push_str(&format!("// total: {}\n", delayed_total + category_total));
    out.push_str(&format!(
        "// Expected: {} ({} delayed recall + {} category)\n",
        4 * categories.len(),
        2 * categories.len(),
        2 * categories.len()
    ));

    out
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
    #[serde(default)]
    pub selection: SelectionConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Pool of delayed-recall candidates.
    #[serde(default = "default_delayed_pool")]
    pub delayed_recall_dir: String,
    /// Pool of category-drawing candidates.
    #[serde(default = "default_category_pool")]
    pub category_dir: String,
    /// Root of the copied selection; `delayed_recall/` and `category/` go under it.
    #[serde(default = "default_output_root")]
    pub output_root: String,
    #[serde(default = "default_seed")]
    pub seed: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Curated delayed-recall set, relative to the invoking working directory.
    #[serde(default = "default_curated_delayed")]
    pub delayed_recall_dir: String,
    /// Curated category set, relative to the invoking working directory.
    #[serde(default = "default_curated_category")]
    pub category_dir: String,
    /// Base of the drawing paths written into the generated code.
    #[serde(default = "default_drawing_base")]
    pub drawing_base: String,
    /// Base of the target/foil stim paths written into the generated code.
    #[serde(default = "default_stim_base")]
    pub stim_base: String,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            delayed_recall_dir: default_delayed_pool(),
            category_dir: default_category_pool(),
            output_root: default_output_root(),
            seed: default_seed(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            delayed_recall_dir: default_curated_delayed(),
            category_dir: default_curated_category(),
            drawing_base: default_drawing_base(),
            stim_base: default_stim_base(),
        }
    }
}

fn default_categories() -> Vec<String> {
    [
        "amusementpark",
        "badlands",
        "bathroom",
        "bedroom",
        "diningroom",
        "farm",
        "fountain",
        "garden",
        "house",
        "kitchen",
        "lighthouse",
        "livingroom",
        "mountain",
        "playground",
        "pool",
        "street",
        "tower",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_delayed_pool() -> String {
    "data/delayed-recall".to_string()
}

fn default_category_pool() -> String {
    "data/category-drawings".to_string()
}

fn default_output_root() -> String {
    "selected-drawings".to_string()
}

fn default_seed() -> u64 {
    42
}

fn default_curated_delayed() -> String {
    "data/drawings/delayed_recall".to_string()
}

fn default_curated_category() -> String {
    "data/drawings/category".to_string()
}

fn default_drawing_base() -> String {
    "../data/drawings".to_string()
}

fn default_stim_base() -> String {
    "../data/stim".to_string()
}

pub fn load(path: Option<&str>) -> anyhow::Result<AppConfig> {
    let mut settings = config::Config::builder();
    if let Some(p) = path {
        settings = settings.add_source(config::File::with_name(p));
    } else {
        settings = settings.add_source(config::File::with_name("config/default").required(false));
    }
    let cfg = settings.build()?;
    Ok(cfg.try_deserialize()?)
}

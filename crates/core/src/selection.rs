//! Per-category random selection of drawings for the study set.

use crate::models::{CategoryDrawing, DelayedRecallDrawing, Memorability};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;
use std::collections::HashMap;
use tracing::warn;

/// Ordered filename sequences chosen by the selector, in category
/// enumeration order. Copying them is a separate step.
#[derive(Debug, Clone, Serialize)]
pub struct SelectionPlan {
    pub delayed_recall: Vec<String>,
    pub category: Vec<String>,
}

/// Run both selections off one seeded generator. A fixed seed and fixed
/// pool contents give an identical plan on every run.
pub fn build_plan(
    delayed: &[DelayedRecallDrawing],
    category: &[CategoryDrawing],
    categories: &[String],
    seed: u64,
) -> SelectionPlan {
    let mut rng = SmallRng::seed_from_u64(seed);
    SelectionPlan {
        delayed_recall: select_delayed_recall(delayed, categories, &mut rng),
        category: select_category(category, categories, &mut rng),
    }
}

/// One high-memorable and one low-memorable drawing per category, chosen
/// uniformly at random. An empty bucket skips the slot with a diagnostic.
pub fn select_delayed_recall(
    records: &[DelayedRecallDrawing],
    categories: &[String],
    rng: &mut SmallRng,
) -> Vec<String> {
    let mut buckets: HashMap<(&str, Memorability), Vec<&str>> = HashMap::new();
    for r in records {
        buckets
            .entry((r.scene.as_str(), r.memorability))
            .or_default()
            .push(r.filename.as_str());
    }

    let mut selected = Vec::new();
    for category in categories {
        for memorability in [Memorability::High, Memorability::Low] {
            let bucket = buckets
                .get(&(category.as_str(), memorability))
                .map(|v| v.as_slice())
                .unwrap_or(&[]);
            match bucket.choose(rng) {
                Some(choice) => selected.push((*choice).to_string()),
                None => warn!(
                    "no {}-memorable drawings found for {}",
                    memorability.as_str(),
                    category
                ),
            }
        }
    }
    selected
}

/// Up to 2 category drawings per category, sampled without replacement.
pub fn select_category(
    records: &[CategoryDrawing],
    categories: &[String],
    rng: &mut SmallRng,
) -> Vec<String> {
    let mut buckets: HashMap<&str, Vec<&str>> = HashMap::new();
    for r in records {
        buckets
            .entry(r.scene.as_str())
            .or_default()
            .push(r.filename.as_str());
    }

    let mut selected = Vec::new();
    for category in categories {
        let available = buckets
            .get(category.as_str())
            .map(|v| v.as_slice())
            .unwrap_or(&[]);
        if available.len() >= 2 {
            selected.extend(available.choose_multiple(rng, 2).map(|f| (*f).to_string()));
        } else if available.len() == 1 {
            selected.push(available[0].to_string());
            warn!("only 1 category drawing found for {}", category);
        } else {
            warn!("no category drawings found for {}", category);
        }
    }
    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delayed(subject: &str, memorability: Memorability, scene: &str) -> DelayedRecallDrawing {
        let filename = format!("{}_i1_{}_{}.jpg", subject, memorability.as_str(), scene);
        DelayedRecallDrawing {
            subject: subject.to_string(),
            image: "i1".to_string(),
            memorability,
            scene: scene.to_string(),
            filename,
        }
    }

    fn category(subject: &str, scene: &str) -> CategoryDrawing {
        CategoryDrawing {
            subject: subject.to_string(),
            image: "i1".to_string(),
            scene: scene.to_string(),
            filename: format!("{}_i1_{}.jpg", subject, scene),
        }
    }

    fn cats(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn same_seed_gives_identical_plan() {
        let categories = cats(&["kitchen", "tower"]);
        let delayed_pool = vec![
            delayed("s01", Memorability::High, "kitchen"),
            delayed("s02", Memorability::High, "kitchen"),
            delayed("s03", Memorability::Low, "kitchen"),
            delayed("s04", Memorability::High, "tower"),
            delayed("s05", Memorability::Low, "tower"),
            delayed("s06", Memorability::Low, "tower"),
        ];
        let category_pool = vec![
            category("c01", "kitchen"),
            category("c02", "kitchen"),
            category("c03", "kitchen"),
            category("c04", "tower"),
            category("c05", "tower"),
        ];

        let a = build_plan(&delayed_pool, &category_pool, &categories, 42);
        let b = build_plan(&delayed_pool, &category_pool, &categories, 42);
        assert_eq!(a.delayed_recall, b.delayed_recall);
        assert_eq!(a.category, b.category);
        assert_eq!(a.delayed_recall.len(), 4);
        assert_eq!(a.category.len(), 4);
    }

    #[test]
    fn missing_high_bucket_still_selects_the_low_file() {
        let categories = cats(&["kitchen"]);
        let delayed_pool = vec![delayed("s02", Memorability::Low, "kitchen")];
        let mut rng = SmallRng::seed_from_u64(42);

        let selected = select_delayed_recall(&delayed_pool, &categories, &mut rng);
        assert_eq!(selected, ["s02_i1_low_kitchen.jpg"]);
    }

    #[test]
    fn single_category_drawing_is_taken_as_is() {
        let categories = cats(&["tower"]);
        let pool = vec![category("c01", "tower")];
        let mut rng = SmallRng::seed_from_u64(42);

        let selected = select_category(&pool, &categories, &mut rng);
        assert_eq!(selected, ["c01_i1_tower.jpg"]);
    }

    #[test]
    fn empty_category_bucket_selects_nothing() {
        let categories = cats(&["tower"]);
        let mut rng = SmallRng::seed_from_u64(42);

        let selected = select_category(&[], &categories, &mut rng);
        assert!(selected.is_empty());
    }

    #[test]
    fn category_sample_is_without_replacement() {
        let categories = cats(&["pool"]);
        let pool = vec![category("c01", "pool"), category("c02", "pool")];
        let mut rng = SmallRng::seed_from_u64(7);

        let mut selected = select_category(&pool, &categories, &mut rng);
        selected.sort();
        assert_eq!(selected, ["c01_i1_pool.jpg", "c02_i1_pool.jpg"]);
    }
}

//! Filename grammars for the two drawing pools. A non-matching name is a
//! filter signal, never an error.

use crate::models::{CategoryDrawing, DelayedRecallDrawing, Memorability};

/// Decode `{subject}_{image}_{memorability}_{scene}.jpg`.
pub fn parse_delayed_recall(name: &str, categories: &[String]) -> Option<DelayedRecallDrawing> {
    let stem = name.strip_suffix(".jpg")?;
    let parts: Vec<&str> = stem.split('_').collect();
    if parts.len() != 4 {
        return None;
    }
    let memorability = Memorability::parse(parts[2])?;
    if !categories.iter().any(|c| c == parts[3]) {
        return None;
    }
    Some(DelayedRecallDrawing {
        subject: parts[0].to_string(),
        image: parts[1].to_string(),
        memorability,
        scene: parts[3].to_string(),
        filename: name.to_string(),
    })
}

/// Decode `c{subject}_{image}_{scene}.jpg`.
pub fn parse_category(name: &str, categories: &[String]) -> Option<CategoryDrawing> {
    let stem = name.strip_suffix(".jpg")?;
    let parts: Vec<&str> = stem.split('_').collect();
    if parts.len() != 3 || !parts[0].starts_with('c') {
        return None;
    }
    if !categories.iter().any(|c| c == parts[2]) {
        return None;
    }
    Some(CategoryDrawing {
        subject: parts[0].to_string(),
        image: parts[1].to_string(),
        scene: parts[2].to_string(),
        filename: name.to_string(),
    })
}

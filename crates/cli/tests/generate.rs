use std::fs;
use std::path::Path;
use stimuli_core::codegen;
use stimuli_core::config::GeneratorConfig;
use stimuli_core::scanner;
use tempfile::tempdir;

fn write_jpgs(dir: &Path, names: &[&str]) {
    fs::create_dir_all(dir).unwrap();
    for name in names {
        fs::write(dir.join(name), *name).unwrap();
    }
}

fn cats(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn curated_set_round_trips_into_generated_code() {
    let temp = tempdir().unwrap();
    let delayed_dir = temp.path().join("delayed_recall");
    let category_dir = temp.path().join("category");
    write_jpgs(
        &delayed_dir,
        &["s01_i1_high_kitchen.jpg", "s02_i2_low_kitchen.jpg"],
    );
    write_jpgs(&category_dir, &["c01_i1_kitchen.jpg", "c02_i2_kitchen.jpg"]);

    let categories = cats(&["kitchen"]);
    let delayed = scanner::scan_delayed_recall(&delayed_dir, &categories).unwrap();
    let category = scanner::scan_category(&category_dir, &categories).unwrap();
    let code = codegen::generate(&GeneratorConfig::default(), &delayed, &category, &categories);

    assert!(code.starts_with("function generateDrawingStimuli() {\n"));
    assert!(code.contains("    const stimuli = [];\n"));
    assert!(code.contains("    return stimuli;\n"));
    assert_eq!(code.matches("stimuli.push({").count(), 4);
    assert!(code.contains("drawing: '../data/drawings/delayed_recall/s01_i1_high_kitchen.jpg',"));
    assert!(code.contains("drawing: '../data/drawings/category/c01_i1_kitchen.jpg',"));
    assert!(code.contains("// total: 4\n"));
    assert!(code.contains("// Expected: 4 (2 delayed recall + 2 category)\n"));
}

#[test]
fn three_curated_category_files_emit_exactly_two_blocks() {
    let temp = tempdir().unwrap();
    let delayed_dir = temp.path().join("delayed_recall");
    let category_dir = temp.path().join("category");
    write_jpgs(&delayed_dir, &[]);
    write_jpgs(
        &category_dir,
        &[
            "c01_i1_bathroom.jpg",
            "c02_i2_bathroom.jpg",
            "c03_i3_bathroom.jpg",
        ],
    );

    let categories = cats(&["bathroom"]);
    let delayed = scanner::scan_delayed_recall(&delayed_dir, &categories).unwrap();
    let category = scanner::scan_category(&category_dir, &categories).unwrap();
    let code = codegen::generate(&GeneratorConfig::default(), &delayed, &category, &categories);

    // First two files in sorted scan order, never the third.
    assert_eq!(code.matches("condition: 'category'").count(), 2);
    assert!(code.contains("c01_i1_bathroom.jpg"));
    assert!(code.contains("c02_i2_bathroom.jpg"));
    assert!(!code.contains("c03_i3_bathroom.jpg"));
}

#[test]
fn count_comment_tracks_pairs_and_available_files() {
    let temp = tempdir().unwrap();
    let delayed_dir = temp.path().join("delayed_recall");
    let category_dir = temp.path().join("category");
    // kitchen: both slots filled (+2); tower: low only (+0).
    write_jpgs(
        &delayed_dir,
        &[
            "s01_i1_high_kitchen.jpg",
            "s02_i2_low_kitchen.jpg",
            "s03_i3_low_tower.jpg",
        ],
    );
    // kitchen: two files (+2); tower: one file (+1, no block emitted).
    write_jpgs(
        &category_dir,
        &[
            "c01_i1_kitchen.jpg",
            "c02_i2_kitchen.jpg",
            "c03_i3_tower.jpg",
        ],
    );

    let categories = cats(&["kitchen", "tower"]);
    let delayed = scanner::scan_delayed_recall(&delayed_dir, &categories).unwrap();
    let category = scanner::scan_category(&category_dir, &categories).unwrap();
    let code = codegen::generate(&GeneratorConfig::default(), &delayed, &category, &categories);

    assert!(code.contains("// total: 5\n"));
    assert!(code.contains("// !! no high-memorable delayed recall drawing found\n"));
    assert!(code.contains("// !! less than 2 category drawings found (1 available)\n"));
}

use staggered_core::prelude::*;
use staggered_core::{to_json_array, to_json_hash};

fn chips() -> Vec<(&'static str, u32, u32)> {
    vec![
        ("Arts & Crafts", 10, 5),
        ("Beauty", 20, 8),
        ("Books", 5, 5),
        ("Business", 10, 10),
    ]
}

#[test]
fn layout_cells_carry_keys_rows_and_rects() {
    let cfg = PackerConfig::builder()
        .rows(3)
        .with_max_dimensions(100, 100)
        .build();
    let layout = pack_layout(chips(), cfg).expect("layout should succeed");

    assert_eq!((layout.width, layout.height), (20, 23));
    assert_eq!(layout.cells.len(), 4);
    assert_eq!(layout.cells[0].key, "Arts & Crafts");
    assert_eq!(layout.cells[3].row, 0);
    assert_eq!(layout.cells[3].rect, Rect::new(10, 0, 10, 10));
    assert_eq!(layout.cells[2].rect, Rect::new(0, 18, 5, 5));

    let row0: Vec<&str> = layout.row_cells(0).map(|c| c.key.as_str()).collect();
    assert_eq!(row0, vec!["Arts & Crafts", "Business"]);
    assert_eq!(layout.meta.app, "staggered");
    assert_eq!(layout.meta.constraints, Constraints::loose(100, 100));
}

#[test]
fn empty_layout_is_allowed() {
    let cfg = PackerConfig::builder()
        .with_min_dimensions(16, 8)
        .build();
    let layout = pack_layout(Vec::<(String, u32, u32)>::new(), cfg).unwrap();
    assert!(layout.cells.is_empty());
    assert_eq!((layout.width, layout.height), (16, 8));

    let stats = layout.stats();
    assert_eq!(stats.num_cells, 0);
    assert_eq!(stats.occupied_rows, 0);
    assert_eq!(stats.used_area, 0);
    assert_eq!(stats.wasted_area(), 16 * 8);
}

#[test]
fn layout_rejects_invalid_config() {
    let cfg = PackerConfig::builder().rows(0).build();
    let err = pack_layout(chips(), cfg).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn layout_stats_report_occupancy() {
    let cfg = PackerConfig::builder().rows(2).build();
    let layout = pack_layout(vec![("a", 10, 10), ("b", 10, 10), ("c", 10, 10)], cfg).unwrap();
    // row0: a c (20 wide), row1: b (10 wide); 20 x 20 bounding box
    let stats = layout.stats();
    assert_eq!(stats.total_area, 400);
    assert_eq!(stats.used_area, 300);
    assert!((stats.occupancy - 0.75).abs() < 1e-9);
    assert!((stats.waste_percentage() - 25.0).abs() < 1e-9);
    assert_eq!(stats.widest_row, 20);
    assert_eq!(stats.tallest_row, 10);
    assert_eq!(stats.occupied_rows, 2);
    assert!(stats.summary().contains("Occupancy: 75.00%"));
}

#[test]
fn json_array_export_keeps_input_order() {
    let layout = pack_layout(chips(), PackerConfig::default()).unwrap();
    let v = to_json_array(&layout);
    let cells = v["cells"].as_array().expect("cells array");
    assert_eq!(cells.len(), 4);
    assert_eq!(cells[1]["key"], "Beauty");
    assert_eq!(cells[1]["row"], 1);
    assert_eq!(cells[1]["frame"]["y"], 10);
    assert_eq!(v["size"]["w"], 20);
    assert_eq!(v["size"]["h"], 23);
    assert_eq!(v["rows"].as_array().unwrap().len(), 3);
    assert_eq!(v["meta"]["schema_version"], "1");
}

#[test]
fn json_hash_export_is_keyed_by_name() {
    let layout = pack_layout(chips(), PackerConfig::default()).unwrap();
    let v = to_json_hash(&layout);
    let books = &v["cells"]["Books"];
    assert_eq!(books["row"], 2);
    assert_eq!(books["frame"]["x"], 0);
    assert_eq!(books["frame"]["y"], 18);
    assert_eq!(books["frame"]["w"], 5);
}

#[test]
fn layout_serializes_with_serde() {
    let layout = pack_layout(chips(), PackerConfig::default()).unwrap();
    let text = serde_json::to_string(&layout).unwrap();
    let back: Layout = serde_json::from_str(&text).unwrap();
    assert_eq!(back, layout);
}

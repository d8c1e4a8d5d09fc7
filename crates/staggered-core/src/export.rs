use crate::model::Layout;
use serde_json::{Value, json};

/// Serialize a `Layout` as `{ cells: [...], size, rows, meta }` (array-of-cells style).
/// Cells keep input order.
pub fn to_json_array<K: ToString>(layout: &Layout<K>) -> Value {
    let cells: Vec<Value> = layout
        .cells
        .iter()
        .map(|c| {
            json!({
                "key": c.key.to_string(),
                "row": c.row,
                "frame": {"x": c.rect.x, "y": c.rect.y, "w": c.rect.w, "h": c.rect.h},
            })
        })
        .collect();
    json!({
        "cells": cells,
        "size": {"w": layout.width, "h": layout.height},
        "rows": rows_value(layout),
        "meta": &layout.meta,
    })
}

/// Flatten cells keyed by name.
/// Shape: `{ cells: { name: { row, frame } }, size, rows, meta }`.
/// Duplicate keys keep the last cell.
pub fn to_json_hash<K: ToString>(layout: &Layout<K>) -> Value {
    let mut cells = serde_json::Map::new();
    for c in &layout.cells {
        cells.insert(
            c.key.to_string(),
            json!({
                "row": c.row,
                "frame": {"x": c.rect.x, "y": c.rect.y, "w": c.rect.w, "h": c.rect.h},
            }),
        );
    }
    json!({
        "cells": Value::Object(cells),
        "size": {"w": layout.width, "h": layout.height},
        "rows": rows_value(layout),
        "meta": &layout.meta,
    })
}

fn rows_value<K>(layout: &Layout<K>) -> Value {
    Value::Array(
        layout
            .rows
            .iter()
            .map(|r| json!({"width": r.cumulative_width, "height": r.max_height}))
            .collect(),
    )
}

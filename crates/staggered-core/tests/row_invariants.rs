use rand::{Rng, SeedableRng};
use staggered_core::prelude::*;

fn random_boxes(seed: u64, count: usize) -> Vec<BoxSize> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| BoxSize::new(rng.gen_range(0..=96), rng.gen_range(0..=96)))
        .collect()
}

fn disjoint(rects: &[Rect]) -> bool {
    for i in 0..rects.len() {
        for j in (i + 1)..rects.len() {
            if rects[i].intersects(&rects[j]) {
                return false;
            }
        }
    }
    true
}

#[test]
fn placements_follow_row_sums() {
    for seed in 0..20u64 {
        let rows = (seed as usize % 6) + 1;
        let input = random_boxes(seed, 40 + seed as usize);
        let out = pack(rows, &input, 0, u32::MAX, 0, u32::MAX).unwrap();

        assert_eq!(out.placements.len(), input.len());

        let mut row_heights = vec![0u32; rows];
        for (i, b) in input.iter().enumerate() {
            row_heights[i % rows] = row_heights[i % rows].max(b.height);
        }

        for (i, p) in out.placements.iter().enumerate() {
            let row = i % rows;
            assert_eq!(out.row_of(i), row);
            let expected_x: u32 = input
                .iter()
                .enumerate()
                .take(i)
                .filter(|(j, _)| j % rows == row)
                .map(|(_, b)| b.width)
                .sum();
            let expected_y: u32 = row_heights[..row].iter().sum();
            assert_eq!(p.x, expected_x, "seed {seed} box {i}");
            assert_eq!(p.y, expected_y, "seed {seed} box {i}");
        }

        let expected_h: u32 = row_heights.iter().sum();
        assert_eq!(out.height, expected_h);
        assert_eq!(out.width, out.rows.iter().map(|r| r.cumulative_width).max().unwrap());
    }
}

#[test]
fn x_is_non_decreasing_within_each_row() {
    let input = random_boxes(7, 200);
    let rows = 4;
    let out = pack(rows, &input, 0, u32::MAX, 0, u32::MAX).unwrap();
    for row in 0..rows {
        let xs: Vec<u32> = out
            .placements
            .iter()
            .enumerate()
            .filter(|(i, _)| i % rows == row)
            .map(|(_, p)| p.x)
            .collect();
        assert!(xs.windows(2).all(|w| w[0] <= w[1]), "row {row}: {xs:?}");
    }
}

#[test]
fn placed_boxes_never_overlap() {
    let input = random_boxes(42, 120);
    let out = pack(3, &input, 0, u32::MAX, 0, u32::MAX).unwrap();
    assert!(disjoint(&out.rects(&input)));
}

#[test]
fn clamping_matches_interval_clamp() {
    let input = random_boxes(3, 30);
    let unclamped = pack(3, &input, 0, u32::MAX, 0, u32::MAX).unwrap();
    let (w, h) = unclamped.content_size();
    for (min_w, max_w, min_h, max_h) in [(0, 10, 0, 10), (w + 5, w + 10, h + 5, h + 10), (w, w, h, h)] {
        let out = pack(3, &input, min_w, max_w, min_h, max_h).unwrap();
        assert_eq!(out.width, w.clamp(min_w, max_w));
        assert_eq!(out.height, h.clamp(min_h, max_h));
        assert_eq!(out.placements, unclamped.placements);
    }
}

#[test]
fn packing_is_repeatable() {
    let input = random_boxes(99, 150);
    let a = pack(5, &input, 0, 2048, 0, 2048).unwrap();
    let b = pack(5, &input, 0, 2048, 0, 2048).unwrap();
    assert_eq!(a, b);
}

#[test]
fn huge_widths_saturate_instead_of_overflowing() {
    let input = vec![BoxSize::new(u32::MAX, 1), BoxSize::new(u32::MAX, 1)];
    let out = pack(1, &input, 0, u32::MAX, 0, u32::MAX).unwrap();
    assert_eq!(out.width, u32::MAX);
    assert_eq!(out.placements[1].x, u32::MAX);
}

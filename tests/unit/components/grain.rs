use super::*;
use serde_json::json;
use std::collections::HashSet;

fn overlay(v: serde_json::Value) -> GrainOverlay {
    GrainOverlay::from_props(&serde_json::from_value(v).unwrap())
}

#[test]
fn defaults() {
    let g = overlay(json!({}));
    assert_eq!(g.opacity, 0.1);
    assert_eq!(g.size, 2);
    match g.evaluate(TimeCtx::single_scope(0, 30)).unwrap() {
        LayerPaint::Grain {
            opacity,
            blend,
            interactive,
            tile,
        } => {
            assert_eq!(opacity, 0.1);
            assert_eq!(blend, BlendMode::Multiply);
            assert!(!interactive);
            assert_eq!(tile.cell_px(), 2);
            assert_eq!(tile.width(), 128);
        }
        other => panic!("expected grain, got {other:?}"),
    }
}

#[test]
fn ten_distinct_tiles_then_repeat() {
    let g = overlay(json!({}));
    let tiles: Vec<GrainTile> = (0..30)
        .map(|f| g.tile_at(TimeCtx::single_scope(f, 30)))
        .collect();
    let seeds: HashSet<u64> = tiles[..10].iter().map(|t| t.seed()).collect();
    assert_eq!(seeds.len(), 10);
    for f in 0..20 {
        assert_eq!(tiles[f], tiles[f + 10]);
    }
    assert_ne!(tiles[0].luma(), tiles[1].luma());
    assert_eq!(tiles[3].luma(), tiles[13].luma());
}

#[test]
fn luma_is_cell_aligned_and_sized() {
    let tile = GrainTile::for_phase(4, 3);
    // 128 / 3 rounds up to 43 cells.
    assert_eq!(tile.width(), 129);
    let luma = tile.luma();
    assert_eq!(luma.len(), 129 * 129);
    // Pixels inside one cell share a value.
    assert_eq!(luma[0], luma[1]);
    assert_eq!(luma[0], luma[129 + 2]);
    let img = tile.to_image();
    assert_eq!(img.dimensions(), (129, 129));
    assert_eq!(img.get_pixel(1, 1).0[0], luma[0]);
}

#[test]
fn odd_props_fall_back() {
    let g = overlay(json!({"size": 0, "opacity": 7}));
    assert_eq!(g.size, 2);
    assert_eq!(g.opacity, 1.0);
    let g = overlay(json!({"size": "4"}));
    assert_eq!(g.size, 4);
}

#[test]
fn any_cell_size_yields_a_consistent_tile() {
    for cell in [0, 1, 3, 7, 64, 127, 128, 129, 200, u32::MAX] {
        let tile = GrainTile::for_phase(2, cell);
        let edge = tile.cell_px();
        assert!((1..=GRAIN_TILE_PX).contains(&edge), "cell {cell}");
        assert_eq!(tile.width(), tile.height());
        assert!(tile.width() >= GRAIN_TILE_PX);
        assert_eq!(tile.width() % edge, 0);
        assert_eq!(tile.luma().len(), (tile.width() * tile.height()) as usize);
    }
    assert_eq!(GrainTile::for_phase(0, 0), GrainTile::for_phase(0, 1));
    assert_eq!(GrainTile::for_phase(0, 500).width(), GRAIN_TILE_PX);
}

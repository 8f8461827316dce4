use crate::components::VisualComponent;
use crate::components::paint::{BlendMode, LayerPaint};
use crate::components::time::TimeCtx;
use crate::foundation::math::{Fnv1a64, Rng64};
use crate::props::read::prop_f64;
use crate::schema::model::PropMap;
use serde::Serialize;

/// Number of distinct grain tiles before the animation repeats.
pub const GRAIN_CYCLE_FRAMES: u64 = 10;
/// Nominal tile edge in pixels; rounded up to a whole number of cells.
pub const GRAIN_TILE_PX: u32 = 128;

const GRAIN_SEED_SALT: u64 = 0x6772_6169_6e5f_7631;

/// A square, seamlessly repeating noise tile.
///
/// Only the parameters travel in the layer; hosts call [`GrainTile::luma`] or
/// [`GrainTile::to_image`] to materialize pixels. Built only through [`GrainTile::for_phase`],
/// so the edge is always a non-zero whole number of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrainTile {
    seed: u64,
    cell_px: u32,
    width: u32,
    height: u32,
}

impl GrainTile {
    /// Tile for a given cycle phase (`frame % GRAIN_CYCLE_FRAMES`) and cell size.
    ///
    /// The cell size is clamped to `1..=GRAIN_TILE_PX`.
    pub fn for_phase(phase: u64, cell_px: u32) -> Self {
        let cell_px = cell_px.clamp(1, GRAIN_TILE_PX);
        let cells = GRAIN_TILE_PX.div_ceil(cell_px);
        let mut h = Fnv1a64::new_default();
        h.write_u64(GRAIN_SEED_SALT);
        h.write_u64(phase % GRAIN_CYCLE_FRAMES);
        Self {
            seed: h.finish(),
            cell_px,
            width: cells * cell_px,
            height: cells * cell_px,
        }
    }

    /// Noise seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Edge of one noise cell in pixels.
    pub fn cell_px(&self) -> u32 {
        self.cell_px
    }

    /// Tile width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Tile height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major 8-bit luminance, `width * height` bytes.
    ///
    /// Each cell gets one value; the tile is a whole number of cells so it repeats without
    /// seams.
    pub fn luma(&self) -> Vec<u8> {
        let cell = self.cell_px.max(1);
        let cols = self.width.div_ceil(cell);
        let rows = self.height.div_ceil(cell);
        let mut rng = Rng64::new(self.seed);
        let cells: Vec<u8> = (0..cols * rows)
            .map(|_| (rng.next_f64_01() * 256.0).floor().min(255.0) as u8)
            .collect();

        let mut out = Vec::with_capacity((self.width * self.height) as usize);
        for y in 0..self.height {
            let row = (y / cell) * cols;
            for x in 0..self.width {
                out.push(cells[(row + x / cell) as usize]);
            }
        }
        out
    }

    /// Materialize the tile as a grayscale image.
    pub fn to_image(&self) -> ::image::GrayImage {
        ::image::GrayImage::from_fn(self.width, self.height, {
            let luma = self.luma();
            let width = self.width;
            move |x, y| ::image::Luma([luma[(y * width + x) as usize]])
        })
    }
}

/// Animated film grain drawn over everything beneath it with multiply blending.
#[derive(Debug, Clone, PartialEq)]
pub struct GrainOverlay {
    /// Opacity, default 0.1.
    pub opacity: f64,
    /// Grain cell size in pixels, default 2.
    pub size: u32,
}

impl GrainOverlay {
    /// Tile shown at `t`. Changes every frame and repeats every [`GRAIN_CYCLE_FRAMES`].
    pub fn tile_at(&self, t: TimeCtx) -> GrainTile {
        GrainTile::for_phase(t.scene_frame % GRAIN_CYCLE_FRAMES, self.size)
    }
}

impl VisualComponent for GrainOverlay {
    fn from_props(props: &PropMap) -> Self {
        let size = prop_f64(props, "size")
            .filter(|v| *v >= 1.0)
            .map_or(2, |v| v.round().min(f64::from(GRAIN_TILE_PX)) as u32);
        Self {
            opacity: prop_f64(props, "opacity").unwrap_or(0.1).clamp(0.0, 1.0),
            size,
        }
    }

    fn evaluate(&self, t: TimeCtx) -> Option<LayerPaint> {
        Some(LayerPaint::Grain {
            tile: self.tile_at(t),
            opacity: self.opacity,
            blend: BlendMode::Multiply,
            interactive: false,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/components/grain.rs"]
mod tests;

use crate::components::grain::GrainTile;
use crate::components::paint::{BlendMode, LayerPaint, ObjectFit, TextAlign, TextStyle};
use crate::engine::tree::FrameLayers;
use crate::foundation::core::Rgba8Premul;
use serde::Serialize;
use std::fmt;
use xxhash_rust::xxh3::Xxh3;

const XXH3_SEED: u64 = 0x7265_656c_6670_7231;

/// 128-bit digest of what a frame paints.
///
/// The frame index and scene identity are not hashed, so visually static stretches of the
/// timeline share a fingerprint and hosts can skip redrawing them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct FrameFingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

impl fmt::Display for FrameFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Fingerprint one evaluated frame.
pub fn fingerprint_frame(frame: &FrameLayers) -> FrameFingerprint {
    let mut h = StableHasher::new();
    match frame.background {
        Some(c) => {
            h.write_u8(1);
            write_color(&mut h, c);
        }
        None => h.write_u8(0),
    }
    h.write_u64(frame.layers.len() as u64);
    for layer in &frame.layers {
        h.write_u64(i64::from(layer.z_index) as u64);
        h.write_str(&layer.component_id);
        write_paint(&mut h, &layer.paint);
    }
    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_str(&mut self, s: &str) {
        self.write_u64(s.len() as u64);
        self.write_bytes(s.as_bytes());
    }

    fn finish(self) -> FrameFingerprint {
        let v = self.inner.digest128();
        FrameFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

fn write_color(h: &mut StableHasher, c: Rgba8Premul) {
    h.write_bytes(&[c.r, c.g, c.b, c.a]);
}

fn write_style(h: &mut StableHasher, s: &TextStyle) {
    h.write_f64(s.font_size);
    write_color(h, s.color);
    h.write_str(&s.font_weight);
    h.write_u8(match s.text_align {
        TextAlign::Left => 0,
        TextAlign::Center => 1,
        TextAlign::Right => 2,
    });
}

fn write_tile(h: &mut StableHasher, t: &GrainTile) {
    h.write_u64(t.seed());
    h.write_u32(t.cell_px());
    h.write_u32(t.width());
    h.write_u32(t.height());
}

fn write_paint(h: &mut StableHasher, paint: &LayerPaint) {
    match paint {
        LayerPaint::Image {
            src,
            object_fit,
            opacity,
            scale,
        } => {
            h.write_u8(0);
            h.write_str(src);
            h.write_u8(match object_fit {
                ObjectFit::Cover => 0,
                ObjectFit::Contain => 1,
                ObjectFit::Fill => 2,
            });
            h.write_f64(*opacity);
            h.write_f64(*scale);
        }
        LayerPaint::Placeholder {
            fill,
            label,
            label_color,
            opacity,
        } => {
            h.write_u8(1);
            write_color(h, *fill);
            h.write_str(label);
            write_color(h, *label_color);
            h.write_f64(*opacity);
        }
        LayerPaint::Text {
            text,
            style,
            opacity,
            offset_y,
            caret,
        } => {
            h.write_u8(2);
            h.write_str(text);
            write_style(h, style);
            h.write_f64(*opacity);
            h.write_f64(*offset_y);
            h.write_bool(*caret);
        }
        LayerPaint::Grain {
            tile,
            opacity,
            blend,
            interactive,
        } => {
            h.write_u8(3);
            write_tile(h, tile);
            h.write_f64(*opacity);
            h.write_u8(match blend {
                BlendMode::Normal => 0,
                BlendMode::Multiply => 1,
            });
            h.write_bool(*interactive);
        }
        LayerPaint::Fade { opacity, children } => {
            h.write_u8(4);
            h.write_f64(*opacity);
            h.write_u64(children.len() as u64);
            for child in children {
                write_paint(h, child);
            }
        }
    }
}

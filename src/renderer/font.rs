//! HUD text, rasterized from an embedded TrueType font
//!
//! Glyph coverage becomes playfield-space quads so text goes through the same
//! colored-triangle pipeline as everything else. Fully covered pixels in a row
//! merge into one quad; edge pixels get their own quad with coverage as alpha.

use ab_glyph::{Font, FontRef, GlyphId, InvalidFont, PxScale, ScaleFont, point};

use super::vertex::Vertex;
use crate::sim::Rect;

/// DejaVu Sans (see assets/fonts/LICENSE)
const FONT_DATA: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

/// Coverage at or above this is drawn as solid
const SOLID_COVERAGE: f32 = 0.95;
/// Coverage below this is not drawn at all
const MIN_COVERAGE: f32 = 0.05;

/// Lays out and rasterizes strings with the embedded font
#[derive(Debug, Clone)]
pub struct TextRenderer {
    font: FontRef<'static>,
}

impl TextRenderer {
    pub fn new() -> Result<Self, InvalidFont> {
        Ok(Self {
            font: FontRef::try_from_slice(FONT_DATA)?,
        })
    }

    /// Advance width of `s` at `size` px, kerning included
    pub fn text_width(&self, s: &str, size: f32) -> f32 {
        let scaled = self.font.as_scaled(PxScale::from(size));
        let mut width = 0.0;
        let mut prev: Option<GlyphId> = None;
        for c in s.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = prev {
                width += scaled.kern(prev, id);
            }
            width += scaled.h_advance(id);
            prev = Some(id);
        }
        width
    }

    /// Ascent to descent at `size` px
    pub fn line_height(&self, size: f32) -> f32 {
        self.font.as_scaled(PxScale::from(size)).height()
    }

    /// Tessellate `s` with the top-left of its line box at (x, y)
    pub fn text(&self, s: &str, x: f32, y: f32, size: f32, color: [f32; 4]) -> Vec<Vertex> {
        let scale = PxScale::from(size);
        let scaled = self.font.as_scaled(scale);
        // Whole-pixel baseline and pen keep glyph stems crisp
        let baseline = (y + scaled.ascent()).round();
        let mut caret = x.round();
        let mut prev: Option<GlyphId> = None;
        let mut vertices = Vec::new();

        for c in s.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = prev {
                caret += scaled.kern(prev, id);
            }
            let glyph = id.with_scale_and_position(scale, point(caret, baseline));
            caret += scaled.h_advance(id);
            prev = Some(id);

            let Some(outlined) = self.font.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outlined.px_bounds();
            let width = bounds.width() as usize;
            let height = bounds.height() as usize;
            let mut coverage = vec![0.0; width * height];
            outlined.draw(|gx, gy, v| {
                if let Some(slot) = coverage.get_mut(gy as usize * width + gx as usize) {
                    *slot = v.min(1.0);
                }
            });
            emit_coverage(
                &mut vertices,
                &coverage,
                width,
                (bounds.min.x, bounds.min.y),
                color,
            );
        }

        vertices
    }

    /// Tessellate `s` with its line box centered on (cx, cy)
    pub fn text_centered(
        &self,
        s: &str,
        cx: f32,
        cy: f32,
        size: f32,
        color: [f32; 4],
    ) -> Vec<Vertex> {
        let x = cx - self.text_width(s, size) / 2.0;
        let y = cy - self.line_height(size) / 2.0;
        self.text(s, x, y, size, color)
    }
}

/// Turn a row-major coverage grid into quads with its top-left at `origin`
fn emit_coverage(
    vertices: &mut Vec<Vertex>,
    coverage: &[f32],
    width: usize,
    origin: (f32, f32),
    color: [f32; 4],
) {
    if width == 0 {
        return;
    }

    for (row, cells) in coverage.chunks(width).enumerate() {
        let y = origin.1 + row as f32;
        let mut col = 0;
        while col < cells.len() {
            let c = cells[col];
            if c >= SOLID_COVERAGE {
                let start = col;
                while col < cells.len() && cells[col] >= SOLID_COVERAGE {
                    col += 1;
                }
                let run = Rect::new(origin.0 + start as f32, y, (col - start) as f32, 1.0);
                vertices.extend(super::shapes::rect(&run, color));
                continue;
            }
            if c >= MIN_COVERAGE {
                let pixel = Rect::new(origin.0 + col as f32, y, 1.0, 1.0);
                let faded = [color[0], color[1], color[2], color[3] * c];
                vertices.extend(super::shapes::rect(&pixel, faded));
            }
            col += 1;
        }
    }
}

//! Vector drawing model: tools, strokes, the persisted document, and SVG export.

use serde::{Deserialize, Serialize};

use crate::undo::BoundedUndoStack;

/// Pen colors offered in the toolbar.
pub const PALETTE: [&str; 5] = ["#000000", "#ff0000", "#00aa00", "#0000ff", "#ff8800"];
/// Stroke width of the pen.
pub const PEN_WIDTH: u32 = 3;
/// Stroke width of the eraser.
pub const ERASER_WIDTH: u32 = PEN_WIDTH * 4;
/// Color the eraser paints with.
pub const ERASER_COLOR: &str = "#ffffff";
/// Undo snapshots kept before the oldest is dropped.
pub const MAX_UNDO_STATES: usize = 10;
/// Version written into persisted sketch documents.
pub const SKETCH_SCHEMA_VERSION: u32 = 1;
/// MIME type used for downloaded sketches.
pub const SKETCH_MIME_TYPE: &str = "image/svg+xml";

/// Point in surface-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SketchPoint {
    /// Horizontal offset from the surface's left edge.
    pub x: i32,
    /// Vertical offset from the surface's top edge.
    pub y: i32,
}

/// Active drawing tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Draws with one of the [`PALETTE`] colors.
    Pen {
        /// CSS hex color.
        color: &'static str,
    },
    /// Paints white over existing strokes.
    Eraser,
}

impl Default for Tool {
    fn default() -> Self {
        Self::Pen { color: PALETTE[0] }
    }
}

impl Tool {
    /// Color of strokes drawn with this tool.
    pub fn stroke_color(self) -> &'static str {
        match self {
            Self::Pen { color } => color,
            Self::Eraser => ERASER_COLOR,
        }
    }

    /// Width of strokes drawn with this tool.
    pub fn stroke_width(self) -> u32 {
        match self {
            Self::Pen { .. } => PEN_WIDTH,
            Self::Eraser => ERASER_WIDTH,
        }
    }

    /// Whether this is the eraser.
    pub fn is_eraser(self) -> bool {
        self == Self::Eraser
    }
}

/// One continuous pointer path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stroke {
    /// CSS hex color.
    pub color: String,
    /// Line width in pixels.
    pub width: u32,
    /// Points in drawing order.
    pub points: Vec<SketchPoint>,
}

impl Stroke {
    /// `points` attribute for an SVG `<polyline>`.
    pub fn svg_points(&self) -> String {
        self.points
            .iter()
            .map(|p| format!("{},{}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Persisted form of a drawing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchDocument {
    /// Document format version.
    pub schema_version: u32,
    /// Strokes in paint order.
    pub strokes: Vec<Stroke>,
}

impl Default for SketchDocument {
    fn default() -> Self {
        Self {
            schema_version: SKETCH_SCHEMA_VERSION,
            strokes: Vec::new(),
        }
    }
}

/// Editable drawing with bounded undo.
///
/// A snapshot of the stroke list is pushed before every stroke starts and before every clear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SketchSurface {
    strokes: Vec<Stroke>,
    undo: BoundedUndoStack<Vec<Stroke>>,
    drawing: bool,
}

impl Default for SketchSurface {
    fn default() -> Self {
        Self::from_document(SketchDocument::default())
    }
}

impl SketchSurface {
    /// Restores a surface from a persisted document. Unknown versions start blank.
    pub fn from_document(document: SketchDocument) -> Self {
        let strokes = if document.schema_version == SKETCH_SCHEMA_VERSION {
            document.strokes
        } else {
            Vec::new()
        };
        Self {
            strokes,
            undo: BoundedUndoStack::new(MAX_UNDO_STATES),
            drawing: false,
        }
    }

    /// Snapshot for persistence.
    pub fn document(&self) -> SketchDocument {
        SketchDocument {
            schema_version: SKETCH_SCHEMA_VERSION,
            strokes: self.strokes.clone(),
        }
    }

    /// Strokes in paint order.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Whether a stroke is in progress.
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Snapshots available to undo.
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    /// Starts a stroke at `point` with `tool`.
    pub fn begin_stroke(&mut self, tool: Tool, point: SketchPoint) {
        self.undo.push(self.strokes.clone());
        self.strokes.push(Stroke {
            color: tool.stroke_color().to_string(),
            width: tool.stroke_width(),
            points: vec![point],
        });
        self.drawing = true;
    }

    /// Appends `point` to the stroke in progress. Returns `false` when not drawing.
    pub fn extend_stroke(&mut self, point: SketchPoint) -> bool {
        if !self.drawing {
            return false;
        }
        match self.strokes.last_mut() {
            Some(stroke) => {
                stroke.points.push(point);
                true
            }
            None => false,
        }
    }

    /// Finishes the stroke in progress. Returns `true` if one was active.
    pub fn end_stroke(&mut self) -> bool {
        std::mem::replace(&mut self.drawing, false)
    }

    /// Removes every stroke, keeping the previous drawing undoable.
    pub fn clear(&mut self) {
        self.undo.push(std::mem::take(&mut self.strokes));
        self.drawing = false;
    }

    /// Restores the most recent snapshot. Returns `false` when the history is empty.
    pub fn undo(&mut self) -> bool {
        match self.undo.pop() {
            Some(snapshot) => {
                self.strokes = snapshot;
                self.drawing = false;
                true
            }
            None => false,
        }
    }

    /// Smallest size that contains every stroke, used when the surface size is unknown.
    pub fn content_size(&self) -> (u32, u32) {
        self.strokes
            .iter()
            .flat_map(|stroke| {
                let pad = stroke.width.div_ceil(2) as i32;
                stroke.points.iter().map(move |p| (p.x + pad, p.y + pad))
            })
            .fold((1, 1), |(w, h), (x, y)| {
                (w.max(x.max(0) as u32), h.max(y.max(0) as u32))
            })
    }

    /// Standalone SVG document of the drawing on a white `width` x `height` canvas.
    pub fn to_svg_markup(&self, width: u32, height: u32) -> String {
        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
             viewBox=\"0 0 {width} {height}\">\n<rect width=\"100%\" height=\"100%\" fill=\"#ffffff\"/>\n"
        );
        for stroke in &self.strokes {
            svg.push_str(&format!(
                "<polyline points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" \
                 stroke-linecap=\"round\" stroke-linejoin=\"round\"/>\n",
                stroke.svg_points(),
                stroke.color,
                stroke.width
            ));
        }
        svg.push_str("</svg>\n");
        svg
    }
}

/// File name for a sketch download stamped with `date` (`YYYY-MM-DD`).
pub fn download_file_name(date: &str) -> String {
    format!("sketch_{date}.svg")
}

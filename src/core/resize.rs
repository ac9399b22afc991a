use super::error::Error;
use super::geometry::Point;
use super::image::Image;

/// Smallest sketch edge, in CSS pixels.
pub const MIN_SKETCH_PX: i32 = 50;

/// Canvas edges moved by a resizer handle, parsed from its element id
/// (`resizer-south-east`, `resizer-west`, ...).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResizeEdges {
    pub west: bool,
    pub east: bool,
    pub south: bool,
}

impl ResizeEdges {
    pub fn from_id(id: &str) -> Result<Self, Error> {
        let edges = Self {
            west: id.contains("west"),
            east: id.contains("east"),
            south: id.contains("south"),
        };
        if edges == Self::default() {
            return Err(Error::UnknownResizer(id.to_string()));
        }
        Ok(edges)
    }
}

/// Client-space rectangle, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Horizontal placement of the sketch; the other side is left to CSS.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Anchor {
    Left(f64),
    Right(f64),
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SketchUpdate {
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub anchor: Option<Anchor>,
}

/// Where a resize drag grabbed the handle, relative to the canvas edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragOrigin {
    edges: ResizeEdges,
    x_offset: i32,
    y_offset: i32,
}

impl DragOrigin {
    pub fn new(edges: ResizeEdges, canvas: &Rect, pointer: Point) -> Self {
        let x_offset = if edges.west {
            canvas.left as i32 - pointer.x
        } else if edges.east {
            pointer.x - canvas.right() as i32
        } else {
            0
        };
        let y_offset = if edges.south {
            pointer.y - canvas.bottom() as i32
        } else {
            0
        };
        Self {
            edges,
            x_offset,
            y_offset,
        }
    }

    /// Sketch geometry for the pointer at `pointer`.
    ///
    /// Growing sideways mirrors the change on both sides so a centred canvas
    /// stays centred. Shrinking from the west pins the right edge to the
    /// window; shrinking from the east pins the left edge.
    pub fn sketch_update(&self, canvas: &Rect, pointer: Point, window_width: f64) -> SketchUpdate {
        let height = self
            .edges
            .south
            .then(|| pointer.y - self.y_offset - canvas.top as i32);
        let west_diff = self
            .edges
            .west
            .then(|| canvas.left as i32 - pointer.x - self.x_offset);
        let east_diff = (!self.edges.west && self.edges.east)
            .then(|| pointer.x - self.x_offset - canvas.right() as i32);

        let mut update = SketchUpdate {
            height: height.map(|h| h.max(MIN_SKETCH_PX)),
            ..SketchUpdate::default()
        };
        let (width, anchor) = match (west_diff, east_diff) {
            (Some(d), _) | (None, Some(d)) if d >= 0 => {
                let width = canvas.width as i32 + 2 * d;
                let left = canvas.left - (width as f64 - canvas.width) / 2.0;
                (Some(width), Some(Anchor::Left(left)))
            }
            (Some(d), _) => (
                Some(canvas.width as i32 + d),
                Some(Anchor::Right(window_width - canvas.right())),
            ),
            (None, Some(d)) => (Some(canvas.width as i32 + d), Some(Anchor::Left(canvas.left))),
            (None, None) => (None, None),
        };
        update.width = width.map(|w| w.max(MIN_SKETCH_PX));
        update.anchor = anchor;
        update
    }
}

/// Canvas size for a sketch measuring `width` x `height` when the drag ends.
/// `None` when either edge is under one pixel.
pub fn committed_size(width: f64, height: f64) -> Option<(u32, u32)> {
    (width >= 1.0 && height >= 1.0).then(|| (width as u32, height as u32))
}

/// Rebuild `image` at `width` x `height` after a drag on `edges`.
///
/// New area is white. A west drag keeps the right edge of the old pixels
/// in place; any other drag keeps the top-left corner.
pub fn resize_image(image: &Image, edges: ResizeEdges, width: u32, height: u32) -> Image {
    let mut resized = Image::blank(width, height);
    let (old_w, old_h) = (image.width() as i32, image.height() as i32);
    if old_w == 0 || old_h == 0 {
        return resized;
    }
    let x_diff = width as i32 - old_w;
    let (src_x, dest_x) = if edges.west && x_diff < 0 {
        (-x_diff, 0)
    } else if edges.west {
        (0, x_diff)
    } else {
        (0, 0)
    };
    let last_x = (old_w - 1).min(src_x + width as i32 - 1);
    let last_y = (old_h - 1).min(height as i32 - 1);
    image.copy_region(
        Point::new(src_x, 0),
        Point::new(last_x, last_y),
        &mut resized,
        Point::new(dest_x, 0),
    );
    resized
}

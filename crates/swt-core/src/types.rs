//! Geometry and label types shared by the pipeline stages.

/// A pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Flattened row-major index for an image of the given width.
    #[inline]
    pub fn index(&self, width: u32) -> usize {
        self.y as usize * width as usize + self.x as usize
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point) -> f32 {
        let dx = self.x as f32 - other.x as f32;
        let dy = self.y as f32 - other.y as f32;
        (dx * dx + dy * dy).sqrt()
    }
}

/// An accepted stroke-width ray.
///
/// `points` runs from `origin` to `terminus`, both included, and never holds
/// the same pixel twice in a row.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray {
    pub origin: Point,
    pub terminus: Point,
    pub points: Vec<Point>,
    /// Distance from origin to terminus; the stroke width this ray reports.
    pub width: f32,
}

impl Ray {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Whether text is darker or lighter than its background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Polarity {
    /// Dark strokes on a light background. Rays walk against the gradient.
    #[default]
    DarkOnLight,
    /// Light strokes on a dark background. Rays walk along the gradient.
    LightOnDark,
}

impl Polarity {
    /// Multiplier applied to a Sobel-convention gradient (pointing toward
    /// brighter pixels) to obtain the walk direction.
    pub fn sign(&self) -> f32 {
        match self {
            Polarity::DarkOnLight => -1.0,
            Polarity::LightOnDark => 1.0,
        }
    }

    pub fn reverse(&self) -> Polarity {
        match self {
            Polarity::DarkOnLight => Polarity::LightOnDark,
            Polarity::LightOnDark => Polarity::DarkOnLight,
        }
    }
}

/// Axis-aligned box in pixel coordinates, both corners inclusive.
///
/// Always satisfies `minx <= maxx` and `miny <= maxy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub minx: u32,
    pub miny: u32,
    pub maxx: u32,
    pub maxy: u32,
}

impl BoundingBox {
    /// Box from explicit corners. Corners are swapped into order if needed.
    pub fn new(minx: u32, miny: u32, maxx: u32, maxy: u32) -> Self {
        Self {
            minx: minx.min(maxx),
            miny: miny.min(maxy),
            maxx: minx.max(maxx),
            maxy: miny.max(maxy),
        }
    }

    /// Degenerate box covering a single pixel.
    pub fn from_point(x: u32, y: u32) -> Self {
        Self { minx: x, miny: y, maxx: x, maxy: y }
    }

    /// Grow the box to include a pixel.
    pub fn expand_to(&mut self, x: u32, y: u32) {
        self.minx = self.minx.min(x);
        self.miny = self.miny.min(y);
        self.maxx = self.maxx.max(x);
        self.maxy = self.maxy.max(y);
    }

    /// `maxx - minx`; zero for a one-column box.
    pub fn width(&self) -> u32 {
        self.maxx - self.minx
    }

    /// `maxy - miny`; zero for a one-row box.
    pub fn height(&self) -> u32 {
        self.maxy - self.miny
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.minx && x <= self.maxx && y >= self.miny && y <= self.maxy
    }

    /// Twice the horizontal centroid. Integral, so ties compare exactly.
    pub fn centroid_x2(&self) -> u64 {
        self.minx as u64 + self.maxx as u64
    }

    pub fn centroid(&self) -> (f32, f32) {
        (
            (self.minx + self.maxx) as f32 / 2.0,
            (self.miny + self.maxy) as f32 / 2.0,
        )
    }
}

/// Shape class assigned to a component's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClassLabel {
    /// Too small to be a glyph.
    Reject,
    /// Plausibly one glyph.
    Single,
    /// Plausibly several glyphs merged side by side.
    Wide,
}

impl ClassLabel {
    pub fn is_accepted(&self) -> bool {
        !matches!(self, ClassLabel::Reject)
    }
}

//! Axis-aligned rectangles in canvas space.
//!
//! Coordinates are integer world units with `y` growing downward, the same
//! orientation a drawing canvas uses.  Every collision test in both games goes
//! through [`overlaps`].

/// An axis-aligned bounding box: `left <= right`, `top <= bottom`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Rect { left, top, right, bottom }
    }

    /// Build a rectangle from its top-left corner and size.
    pub const fn from_origin(x: i32, y: i32, width: i32, height: i32) -> Self {
        Rect {
            left: x,
            top: y,
            right: x + width,
            bottom: y + height,
        }
    }

    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub const fn center_x(&self) -> i32 {
        (self.left + self.right) / 2
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.left += dx;
        self.right += dx;
        self.top += dy;
        self.bottom += dy;
    }

    pub fn translated(self, dx: i32, dy: i32) -> Self {
        let mut moved = self;
        moved.translate(dx, dy);
        moved
    }

    /// Move vertically so the bottom edge sits exactly on `y`.
    pub fn set_bottom(&mut self, y: i32) {
        let height = self.height();
        self.bottom = y;
        self.top = y - height;
    }

    /// Keep the rectangle inside `[min, max]` horizontally without resizing it.
    pub fn clamp_x(&mut self, min: i32, max: i32) {
        let width = self.width();
        if self.left < min {
            self.left = min;
            self.right = min + width;
        } else if self.right > max {
            self.right = max;
            self.left = max - width;
        }
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        overlaps(self, other)
    }
}

/// Strict AABB intersection.  Rectangles that only share an edge do not overlap.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.left < b.right && a.right > b.left && a.top < b.bottom && a.bottom > b.top
}

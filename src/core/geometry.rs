use glam::IVec2;
use smallvec::SmallVec;

/// Integer pixel coordinate, origin at the canvas top-left.
pub type Point = IVec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn min(&self) -> Point {
        self.a.min(self.b)
    }

    #[inline]
    pub fn max(&self) -> Point {
        self.a.max(self.b)
    }

    /// Whether `point` falls inside the segment's bounding box.
    pub fn bounds_contain(&self, point: Point) -> bool {
        let (min, max) = (self.min(), self.max());
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}

// y = slope * x + intercept; only built for segments that are neither
// vertical nor horizontal.
struct Line {
    slope: f64,
    intercept: f64,
}

impl Line {
    fn through(segment: &Segment) -> Self {
        let (a, b) = (segment.a.as_dvec2(), segment.b.as_dvec2());
        let slope = (b.y - a.y) / (b.x - a.x);
        Self {
            slope,
            intercept: a.y - slope * a.x,
        }
    }

    fn x_at(&self, y: i32) -> i32 {
        ((y as f64 - self.intercept) / self.slope) as i32
    }

    fn y_at(&self, x: i32) -> i32 {
        (self.slope * x as f64 + self.intercept) as i32
    }
}

#[inline]
pub fn is_on_canvas(point: Point, width: u32, height: u32) -> bool {
    point.x >= 0 && point.y >= 0 && (point.x as i64) < width as i64 && (point.y as i64) < height as i64
}

/// Part of `segment` inside `[0, width) x [0, height)`, if any.
pub fn clip_segment(segment: Segment, width: u32, height: u32) -> Option<Segment> {
    if is_on_canvas(segment.a, width, height) && is_on_canvas(segment.b, width, height) {
        return Some(segment);
    }
    let (w, h) = (width as i32, height as i32);
    let (min, max) = (segment.min(), segment.max());
    if max.x < 0 || min.x >= w || max.y < 0 || min.y >= h {
        return None;
    }
    if segment.a.x == segment.b.x {
        return Some(Segment::new(
            Point::new(segment.a.x, min.y.max(0)),
            Point::new(segment.a.x, max.y.min(h - 1)),
        ));
    }
    if segment.a.y == segment.b.y {
        return Some(Segment::new(
            Point::new(min.x.max(0), segment.a.y),
            Point::new(max.x.min(w - 1), segment.a.y),
        ));
    }

    let line = Line::through(&segment);
    let candidates = [
        segment.a,
        segment.b,
        Point::new(line.x_at(h - 1), h - 1),
        Point::new(w - 1, line.y_at(w - 1)),
        Point::new(line.x_at(0), 0),
        Point::new(0, line.y_at(0)),
    ];
    let mut ends: SmallVec<[Point; 2]> = SmallVec::new();
    for p in candidates {
        if ends.len() == 2 {
            break;
        }
        // a line through a corner meets two edges at the same pixel
        if is_on_canvas(p, width, height) && segment.bounds_contain(p) && !ends.contains(&p) {
            ends.push(p);
        }
    }
    match ends.as_slice() {
        [a, b] => Some(Segment::new(*a, *b)),
        [a] => Some(Segment::new(*a, *a)),
        _ => None,
    }
}

/// Bresenham walk from `a` to `b`, both ends included.
pub fn rasterize(segment: &Segment) -> Vec<Point> {
    let Segment { a, b } = *segment;
    let step = Point::new(
        if a.x <= b.x { 1 } else { -1 },
        if a.y <= b.y { 1 } else { -1 },
    );
    let dx = (a.x - b.x).abs();
    let dy = -(a.y - b.y).abs();
    let mut err = dx + dy;
    let mut point = a;
    let mut points = Vec::with_capacity(dx.max(-dy) as usize + 1);
    loop {
        points.push(point);
        if point == b {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            point.x += step.x;
        }
        if e2 <= dx {
            err += dx;
            point.y += step.y;
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_through_diagonal_is_identity() {
        let line = Line::through(&Segment::new(Point::new(0, 0), Point::new(10, 10)));
        assert_eq!(line.y_at(7), 7);
        assert_eq!(line.x_at(3), 3);
    }
}

//! SVG path construction
//!
//! Paths use a fixed command grammar (`M`, `L`, `C`, `A`, `Z`) with
//! space-delimited tokens. Numbers are written the way a JavaScript renderer
//! stringifies them, so whole numbers carry no `.0` suffix.

use crate::geometry::ChartPoint;
use std::f64::consts::PI;

/// Incremental writer for SVG path data
pub struct PathBuilder {
    d: String,
    buf: ryu_js::Buffer,
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PathBuilder {
    /// Create an empty path
    pub fn new() -> Self {
        Self {
            d: String::new(),
            buf: ryu_js::Buffer::new(),
        }
    }

    /// Continue an existing path
    pub fn from_path(d: impl Into<String>) -> Self {
        Self {
            d: d.into(),
            buf: ryu_js::Buffer::new(),
        }
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.command("M");
        self.pair(x, y);
        self
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.command("L");
        self.pair(x, y);
        self
    }

    /// Cubic Bézier segment, written as `C x1 y1, x2 y2, x y`
    pub fn cubic_to(&mut self, c1: (f64, f64), c2: (f64, f64), end: (f64, f64)) -> &mut Self {
        self.command("C");
        self.pair(c1.0, c1.1);
        self.d.push(',');
        self.pair(c2.0, c2.1);
        self.d.push(',');
        self.pair(end.0, end.1);
        self
    }

    /// Elliptical arc with a circular radius and no x-axis rotation
    pub fn arc_to(
        &mut self,
        radius: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    ) -> &mut Self {
        self.command("A");
        self.number(radius);
        self.number(radius);
        self.d.push_str(" 0");
        self.d.push_str(if large_arc { " 1" } else { " 0" });
        self.d.push_str(if sweep { " 1" } else { " 0" });
        self.pair(x, y);
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.command("Z");
        self
    }

    /// Finish and return the path data
    pub fn build(self) -> String {
        self.d
    }

    fn command(&mut self, cmd: &str) {
        if !self.d.is_empty() {
            self.d.push(' ');
        }
        self.d.push_str(cmd);
    }

    fn pair(&mut self, x: f64, y: f64) {
        self.number(x);
        self.number(y);
    }

    fn number(&mut self, mut v: f64) {
        self.d.push(' ');
        if v == 0.0 {
            // -0 prints as "0"
            v = 0.0;
        }
        self.d.push_str(self.buf.format(v));
    }
}

/// Smoothed curve through the points.
///
/// Each segment's control points sit halfway between the pair horizontally and
/// at each endpoint's own height. Tangents are not continuous at interior
/// points; the rule is kept as-is so existing renderers produce the same curve.
pub fn build_smooth_path(points: &[ChartPoint]) -> String {
    let Some(first) = points.first() else {
        return String::new();
    };

    let mut path = PathBuilder::new();
    path.move_to(first.x, first.y);
    for pair in points.windows(2) {
        let (prev, curr) = (&pair[0], &pair[1]);
        let cp_x = (prev.x + curr.x) / 2.0;
        path.cubic_to((cp_x, prev.y), (cp_x, curr.y), (curr.x, curr.y));
    }
    path.build()
}

/// Closed region between the smoothed curve and the baseline
pub fn build_area_path(points: &[ChartPoint], baseline_y: f64) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };

    let mut path = PathBuilder::from_path(build_smooth_path(points));
    path.line_to(last.x, baseline_y)
        .line_to(first.x, baseline_y)
        .close();
    path.build()
}

/// Straight-segment alternative to the smoothed curve, as `x,y x,y ...`
pub fn build_polyline_points(points: &[ChartPoint]) -> String {
    let mut buf = ryu_js::Buffer::new();
    let mut out = String::new();
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(buf.format(p.x));
        out.push(',');
        out.push_str(buf.format(p.y));
    }
    out
}

/// Pie wedge or, with a positive inner radius, an annular donut segment.
///
/// Angles are in radians, measured clockwise from the positive X axis in
/// screen coordinates.
pub fn build_arc_path(
    cx: f64,
    cy: f64,
    outer_radius: f64,
    inner_radius: f64,
    start_angle: f64,
    end_angle: f64,
) -> String {
    let large_arc = end_angle - start_angle > PI;
    let (x1, y1) = polar(cx, cy, outer_radius, start_angle);
    let (x2, y2) = polar(cx, cy, outer_radius, end_angle);

    let mut path = PathBuilder::new();
    if inner_radius <= 0.0 {
        path.move_to(cx, cy)
            .line_to(x1, y1)
            .arc_to(outer_radius, large_arc, true, x2, y2)
            .close();
        return path.build();
    }

    let (ix1, iy1) = polar(cx, cy, inner_radius, end_angle);
    let (ix2, iy2) = polar(cx, cy, inner_radius, start_angle);
    path.move_to(x1, y1)
        .arc_to(outer_radius, large_arc, true, x2, y2)
        .line_to(ix1, iy1)
        .arc_to(inner_radius, large_arc, false, ix2, iy2)
        .close();
    path.build()
}

/// Point at `radius` along `angle` from the center
pub(crate) fn polar(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}

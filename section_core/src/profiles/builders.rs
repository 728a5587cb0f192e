//! Per-family vertex builders.
//!
//! Polygon families are laid out counter-clockwise (seen from +x) with the
//! bottom-left corner of their bounding box at the origin. Round bar, CHS and
//! HSS are laid out centred on the origin. The vertex order documented on
//! each builder is a contract shared with the boundary tables in
//! [`super`]; change them together.

use std::f64::consts::PI;

use crate::geometry::Point3;
use crate::parameters::Dimensions;

fn at(x: f64) -> impl Fn(f64, f64) -> Point3 {
    move |y, z| Point3::new(x, y, z)
}

/// I/H-section, 12 vertices.
///
/// ```text
///   7 ─────────────── 6
///   8 ───── 9   4 ─── 5
///           │   │
///  11 ──── 10   3 ─── 2
///   0 ─────────────── 1
/// ```
pub fn i_shape(dims: &Dimensions, x: f64, _segments: usize) -> Vec<Point3> {
    let p = at(x);
    let b = dims.width;
    let h = dims.height;
    let tf = dims.flange_thickness;
    let web_left = (b - dims.web_thickness) / 2.0;
    let web_right = (b + dims.web_thickness) / 2.0;

    vec![
        p(0.0, 0.0),
        p(b, 0.0),
        p(b, tf),
        p(web_right, tf),
        p(web_right, h - tf),
        p(b, h - tf),
        p(b, h),
        p(0.0, h),
        p(0.0, h - tf),
        p(web_left, h - tf),
        p(web_left, tf),
        p(0.0, tf),
    ]
}

/// I-section with independent flanges, 12 vertices in the same order as
/// [`i_shape`]. Flanges and web share a vertical centreline at half the
/// wider flange.
pub fn asymmetric_i_shape(dims: &Dimensions, x: f64, _segments: usize) -> Vec<Point3> {
    let p = at(x);
    let h = dims.height;
    let c = dims.top_flange_width.max(dims.bottom_flange_width) / 2.0;
    let half_top = dims.top_flange_width / 2.0;
    let half_bottom = dims.bottom_flange_width / 2.0;
    let half_web = dims.web_thickness / 2.0;
    let tft = dims.top_flange_thickness;
    let tfb = dims.bottom_flange_thickness;

    vec![
        p(c - half_bottom, 0.0),
        p(c + half_bottom, 0.0),
        p(c + half_bottom, tfb),
        p(c + half_web, tfb),
        p(c + half_web, h - tft),
        p(c + half_top, h - tft),
        p(c + half_top, h),
        p(c - half_top, h),
        p(c - half_top, h - tft),
        p(c - half_web, h - tft),
        p(c - half_web, tfb),
        p(c - half_bottom, tfb),
    ]
}

/// Rectangle, 4 vertices: bottom-left, bottom-right, top-right, top-left.
pub fn rectangle(dims: &Dimensions, x: f64, _segments: usize) -> Vec<Point3> {
    let p = at(x);
    let b = dims.width;
    let h = dims.height;

    vec![p(0.0, 0.0), p(b, 0.0), p(b, h), p(0.0, h)]
}

/// Angle with the vertical leg on the left, 6 vertices.
///
/// ```text
///   5 ─ 4
///   │   │
///   │   3 ───── 2
///   0 ───────── 1
/// ```
pub fn l_shape(dims: &Dimensions, x: f64, _segments: usize) -> Vec<Point3> {
    let p = at(x);
    let b = dims.width;
    let h = dims.height;
    let t = dims.thickness;

    vec![p(0.0, 0.0), p(b, 0.0), p(b, t), p(t, t), p(t, h), p(0.0, h)]
}

/// Channel with the web on the left and flanges pointing +y, 8 vertices.
///
/// ```text
///   7 ───────── 6
///   │   4 ───── 5
///   │   │
///   │   3 ───── 2
///   0 ───────── 1
/// ```
pub fn channel(dims: &Dimensions, x: f64, _segments: usize) -> Vec<Point3> {
    let p = at(x);
    let b = dims.width;
    let h = dims.height;
    let tw = dims.web_thickness;
    let tf = dims.flange_thickness;

    vec![
        p(0.0, 0.0),
        p(b, 0.0),
        p(b, tf),
        p(tw, tf),
        p(tw, h - tf),
        p(b, h - tf),
        p(b, h),
        p(0.0, h),
    ]
}

/// Tee with the flange on top and a centred stem, 8 vertices.
///
/// ```text
///   5 ─────────── 4
///   6 ─── 7   2 ─ 3
///         │   │
///         0 ─ 1
/// ```
pub fn t_shape(dims: &Dimensions, x: f64, _segments: usize) -> Vec<Point3> {
    let p = at(x);
    let b = dims.width;
    let h = dims.height;
    let tf = dims.flange_thickness;
    let stem_left = (b - dims.web_thickness) / 2.0;
    let stem_right = (b + dims.web_thickness) / 2.0;

    vec![
        p(stem_left, 0.0),
        p(stem_right, 0.0),
        p(stem_right, h - tf),
        p(b, h - tf),
        p(b, h),
        p(0.0, h),
        p(0.0, h - tf),
        p(stem_left, h - tf),
    ]
}

fn ring(x: f64, radius: f64, segments: usize, reversed: bool) -> impl Iterator<Item = Point3> {
    let step = 2.0 * PI / segments as f64;
    let direction = if reversed { -1.0 } else { 1.0 };
    (0..segments).map(move |k| {
        let angle = direction * step * k as f64;
        Point3::new(x, radius * angle.cos(), radius * angle.sin())
    })
}

/// Round bar: `segments` vertices counter-clockwise from angle 0.
pub fn round_bar(dims: &Dimensions, x: f64, segments: usize) -> Vec<Point3> {
    ring(x, dims.diameter / 2.0, segments, false).collect()
}

/// CHS: `segments` outer vertices counter-clockwise, then `segments` inner
/// vertices clockwise, both starting at angle 0.
pub fn chs(dims: &Dimensions, x: f64, segments: usize) -> Vec<Point3> {
    let outer = dims.diameter / 2.0;
    let inner = outer - dims.thickness;

    ring(x, outer, segments, false)
        .chain(ring(x, inner, segments, true))
        .collect()
}

/// HSS: outer corners counter-clockwise from bottom-left (0..4), inner
/// corners clockwise from bottom-left (4..8).
pub fn hss(dims: &Dimensions, x: f64, _segments: usize) -> Vec<Point3> {
    let p = at(x);
    let hb = dims.width / 2.0;
    let hh = dims.height / 2.0;
    let ib = hb - dims.thickness;
    let ih = hh - dims.thickness;

    vec![
        p(-hb, -hh),
        p(hb, -hh),
        p(hb, hh),
        p(-hb, hh),
        p(-ib, -ih),
        p(-ib, ih),
        p(ib, ih),
        p(ib, -ih),
    ]
}

//! Rasterization primitives shared by pattern generators, the tile editor
//! and the map editor
//!
//! Primitives emit integer coordinates through a plotting callback and never
//! clip; the callback owner decides what lies inside its grid. Stroke widths
//! above one are drawn by stamping a square brush on every point of the ideal
//! shape.

use bitvec::prelude::*;

/// Integer grid coordinate `(x, y)`
pub type Point = (i32, i32);

/// Brush radius for a stroke width
///
/// Integer division means even widths round down: width 2 stamps a single
/// cell, exactly like width 1.
pub const fn stroke_radius(width: u32) -> i32 {
    (width.saturating_sub(1) / 2) as i32
}

/// Plot a `(2r + 1)`-sided square centered on `(x, y)`
pub fn stamp(x: i32, y: i32, radius: i32, mut plot: impl FnMut(i32, i32)) {
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            plot(x + dx, y + dy);
        }
    }
}

/// Visit every cell of a Bresenham line, endpoints included
pub fn line(from: Point, to: Point, mut plot: impl FnMut(i32, i32)) {
    let (mut x, mut y) = from;
    let (end_x, end_y) = to;

    let dx = (end_x - x).abs();
    let dy = (end_y - y).abs();
    let step_x = if end_x > x { 1 } else { -1 };
    let step_y = if end_y > y { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        plot(x, y);
        if x == end_x && y == end_y {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += step_x;
        }
        if e2 < dx {
            err += dx;
            y += step_y;
        }
    }
}

/// Bresenham line drawn with a square brush of the given stroke width
pub fn thick_line(from: Point, to: Point, width: u32, mut plot: impl FnMut(i32, i32)) {
    let radius = stroke_radius(width);
    line(from, to, |x, y| stamp(x, y, radius, &mut plot));
}

/// Outline of the axis-aligned box spanned by two corner cells
///
/// Only the perimeter is drawn; the interior is left untouched.
pub fn rect_outline(corner_a: Point, corner_b: Point, width: u32, mut plot: impl FnMut(i32, i32)) {
    let radius = stroke_radius(width);
    let (left, right) = (corner_a.0.min(corner_b.0), corner_a.0.max(corner_b.0));
    let (top, bottom) = (corner_a.1.min(corner_b.1), corner_a.1.max(corner_b.1));

    for x in left..=right {
        stamp(x, top, radius, &mut plot);
        stamp(x, bottom, radius, &mut plot);
    }
    for y in top..=bottom {
        stamp(left, y, radius, &mut plot);
        stamp(right, y, radius, &mut plot);
    }
}

/// Round half to even, matching the reference rounding of sampled angles
fn round_to_cell(value: f64) -> i32 {
    value.round_ties_even() as i32
}

/// Circle of `radius` around `center` sampled at each whole degree
///
/// Small radii map many angles onto the same cell; radius zero draws
/// nothing.
pub fn ring(center: Point, radius: i32, mut plot: impl FnMut(i32, i32)) {
    if radius <= 0 {
        return;
    }

    let r = f64::from(radius);
    for degree in 0..360_u16 {
        let angle = f64::from(degree).to_radians();
        let x = round_to_cell(r.mul_add(angle.cos(), f64::from(center.0)));
        let y = round_to_cell(r.mul_add(angle.sin(), f64::from(center.1)));
        plot(x, y);
    }
}

/// Ellipse inscribed in the box spanned by two corner cells
///
/// The outline is sampled `360 × max(w, h)` times around the full turn and
/// every sample is stamped with the stroke brush. A degenerate box with zero
/// width and height draws nothing.
pub fn ellipse_outline(
    corner_a: Point,
    corner_b: Point,
    width: u32,
    mut plot: impl FnMut(i32, i32),
) {
    let radius = stroke_radius(width);
    let (left, right) = (corner_a.0.min(corner_b.0), corner_a.0.max(corner_b.0));
    let (top, bottom) = (corner_a.1.min(corner_b.1), corner_a.1.max(corner_b.1));

    let w = right - left;
    let h = bottom - top;
    let steps = 360 * w.max(h);
    if steps == 0 {
        return;
    }

    let center_x = f64::from(left + right) / 2.0;
    let center_y = f64::from(top + bottom) / 2.0;
    let radius_x = f64::from(w) / 2.0;
    let radius_y = f64::from(h) / 2.0;

    for step in 0..=steps {
        let theta = std::f64::consts::TAU * f64::from(step) / f64::from(steps);
        let x = round_to_cell(radius_x.mul_add(theta.cos(), center_x));
        let y = round_to_cell(radius_y.mul_add(theta.sin(), center_y));
        stamp(x, y, radius, &mut plot);
    }
}

/// Collect the 4-connected region of cells matching the start cell
///
/// `matches(x, y)` decides membership and is evaluated at most once per
/// cell; a visited bitset guarantees termination. Returns an empty region
/// when `start` lies outside the `width × height` grid.
pub fn flood_region(
    width: usize,
    height: usize,
    start: (usize, usize),
    matches: impl Fn(usize, usize) -> bool,
) -> Vec<(usize, usize)> {
    let mut region = Vec::new();
    if start.0 >= width || start.1 >= height {
        return region;
    }

    let mut visited = bitvec![0; width * height];
    let mut stack = vec![start];

    while let Some((x, y)) = stack.pop() {
        let index = y * width + x;
        if visited.get(index).as_deref() != Some(&false) {
            continue;
        }
        visited.set(index, true);

        if !matches(x, y) {
            continue;
        }
        region.push((x, y));

        if x > 0 {
            stack.push((x - 1, y));
        }
        if x + 1 < width {
            stack.push((x + 1, y));
        }
        if y > 0 {
            stack.push((x, y - 1));
        }
        if y + 1 < height {
            stack.push((x, y + 1));
        }
    }

    region
}

use std::f64::consts::PI;

use crate::interpreter::{core::EvalResult, primitives::expect_args};

pub fn square_area(args: &[f64], step: usize) -> EvalResult<f64> {
    let [a] = expect_args(args, "square_area", step)?;
    Ok(a * a)
}

pub fn square_perimeter(args: &[f64], step: usize) -> EvalResult<f64> {
    let [a] = expect_args(args, "square_perimeter", step)?;
    Ok(4.0 * a)
}

pub fn square_edge_by_perimeter(args: &[f64], step: usize) -> EvalResult<f64> {
    let [p] = expect_args(args, "square_edge_by_perimeter", step)?;
    Ok(p / 4.0)
}

pub fn square_edge_by_area(args: &[f64], step: usize) -> EvalResult<f64> {
    let [area] = expect_args(args, "square_edge_by_area", step)?;
    Ok(area.powf(0.5))
}

pub fn rhombus_perimeter(args: &[f64], step: usize) -> EvalResult<f64> {
    let [a] = expect_args(args, "rhombus_perimeter", step)?;
    Ok(4.0 * a)
}

/// `pi * r^2`, with full-precision pi. Only the `const_pi` token uses the
/// short value.
pub fn circle_area(args: &[f64], step: usize) -> EvalResult<f64> {
    let [r] = expect_args(args, "circle_area", step)?;
    Ok(PI * r * r)
}

/// `2 * pi * r`. Registered under the dataset's spelling, `circumface`.
pub fn circumference(args: &[f64], step: usize) -> EvalResult<f64> {
    let [r] = expect_args(args, "circumface", step)?;
    Ok(2.0 * PI * r)
}

pub fn surface_sphere(args: &[f64], step: usize) -> EvalResult<f64> {
    let [r] = expect_args(args, "surface_sphere", step)?;
    Ok(4.0 * PI * r * r)
}

pub fn volume_sphere(args: &[f64], step: usize) -> EvalResult<f64> {
    let [r] = expect_args(args, "volume_sphere", step)?;
    Ok(4.0 / 3.0 * PI * r.powi(3))
}

pub fn surface_cube(args: &[f64], step: usize) -> EvalResult<f64> {
    let [a] = expect_args(args, "surface_cube", step)?;
    Ok(6.0 * a * a)
}

pub fn volume_cube(args: &[f64], step: usize) -> EvalResult<f64> {
    let [a] = expect_args(args, "volume_cube", step)?;
    Ok(a.powi(3))
}

/// `v^(1/3)` computed as a power, not `cbrt`, so a perfect cube may come back
/// a hair off its root.
pub fn cube_edge_by_volume(args: &[f64], step: usize) -> EvalResult<f64> {
    let [v] = expect_args(args, "cube_edge_by_volume", step)?;
    Ok(v.powf(1.0 / 3.0))
}

pub fn rectangle_area(args: &[f64], step: usize) -> EvalResult<f64> {
    let [a, b] = expect_args(args, "rectangle_area", step)?;
    Ok(a * b)
}

pub fn rectangle_perimeter(args: &[f64], step: usize) -> EvalResult<f64> {
    let [a, b] = expect_args(args, "rectangle_perimeter", step)?;
    Ok(2.0 * (a + b))
}

/// Area from the two diagonals.
pub fn rhombus_area(args: &[f64], step: usize) -> EvalResult<f64> {
    let [d1, d2] = expect_args(args, "rhombus_area", step)?;
    Ok(d1 * d2 / 2.0)
}

/// Area from base and height.
pub fn triangle_area(args: &[f64], step: usize) -> EvalResult<f64> {
    let [base, height] = expect_args(args, "triangle_area", step)?;
    Ok(base * height / 2.0)
}

/// Diagonal of an `a` by `b` rectangle.
pub fn diagonal(args: &[f64], step: usize) -> EvalResult<f64> {
    let [a, b] = expect_args(args, "diagonal", step)?;
    Ok((a * a + b * b).powf(0.5))
}

/// Total surface of a cylinder of radius `r` and height `h`.
pub fn surface_cylinder(args: &[f64], step: usize) -> EvalResult<f64> {
    let [r, h] = expect_args(args, "surface_cylinder", step)?;
    Ok(2.0 * PI * r * (r + h))
}

pub fn volume_cylinder(args: &[f64], step: usize) -> EvalResult<f64> {
    let [r, h] = expect_args(args, "volume_cylinder", step)?;
    Ok(PI * r * r * h)
}

pub fn volume_cone(args: &[f64], step: usize) -> EvalResult<f64> {
    let [r, h] = expect_args(args, "volume_cone", step)?;
    Ok(PI / 3.0 * r * r * h)
}

/// Heron's formula.
///
/// Side lengths that cannot form a triangle give a NaN, which the interpreter
/// reports as a domain error.
///
/// # Example
/// ```
/// use mathqa::interpreter::primitives::geometry::triangle_area_three_edges;
///
/// assert_eq!(triangle_area_three_edges(&[3.0, 4.0, 5.0], 0).unwrap(), 6.0);
/// ```
pub fn triangle_area_three_edges(args: &[f64], step: usize) -> EvalResult<f64> {
    let [a, b, c] = expect_args(args, "triangle_area_three_edges", step)?;
    let s = (a + b + c) / 2.0;
    Ok((s * (s - a) * (s - b) * (s - c)).powf(0.5))
}

pub fn triangle_perimeter(args: &[f64], step: usize) -> EvalResult<f64> {
    let [a, b, c] = expect_args(args, "triangle_perimeter", step)?;
    Ok(a + b + c)
}

/// Trapezium area: height `h` times the mean of the parallel sides `a` and
/// `b`.
pub fn quadrilateral_area(args: &[f64], step: usize) -> EvalResult<f64> {
    let [h, a, b] = expect_args(args, "quadrilateral_area", step)?;
    Ok(h * (a + b) / 2.0)
}

pub fn volume_rectangular_prism(args: &[f64], step: usize) -> EvalResult<f64> {
    let [l, w, h] = expect_args(args, "volume_rectangular_prism", step)?;
    Ok(l * w * h)
}

pub fn surface_rectangular_prism(args: &[f64], step: usize) -> EvalResult<f64> {
    let [l, w, h] = expect_args(args, "surface_rectangular_prism", step)?;
    Ok(2.0 * (l * w + w * h + l * h))
}

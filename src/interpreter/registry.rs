use std::{collections::HashMap, sync::LazyLock};

use crate::interpreter::{
    core::EvalResult,
    primitives::{arithmetic, combinatorics, geometry, rates},
};

/// Type alias for primitive function handlers.
///
/// A primitive receives a slice holding exactly its arity of resolved
/// arguments and the index of the operation being executed. It returns the
/// result, or the reason the input is outside its domain.
pub type PrimitiveFn = fn(&[f64], usize) -> EvalResult<f64>;

/// One entry of the primitive registry.
pub struct PrimitiveDef {
    /// Operator name, exactly as programs spell it.
    pub name:  &'static str,
    /// Number of arguments the primitive takes.
    pub arity: usize,
    /// The implementation.
    pub func:  PrimitiveFn,
}

/// Defines the primitive registry by generating a static table and a name
/// list.
///
/// Each entry provides:
/// - a string name,
/// - the exact arity,
/// - a function pointer implementing the primitive.
///
/// The macro produces:
/// - `PRIMITIVE_TABLE` (static table, in declaration order),
/// - `PRIMITIVE_NAMES` (public list of operator names).
macro_rules! primitive_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// Every primitive, in declaration order.
        pub static PRIMITIVE_TABLE: &[PrimitiveDef] = &[
            $(
                PrimitiveDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Every operator name the interpreter can execute.
        pub const PRIMITIVE_NAMES: &[&str] = &[
            $($name,)*
        ];
    };
}

primitive_functions! {
    "add"                        => { arity: 2, func: arithmetic::add },
    "subtract"                   => { arity: 2, func: arithmetic::subtract },
    "multiply"                   => { arity: 2, func: arithmetic::multiply },
    "divide"                     => { arity: 2, func: arithmetic::divide },
    "power"                      => { arity: 2, func: arithmetic::power },
    "max"                        => { arity: 2, func: arithmetic::max },
    "min"                        => { arity: 2, func: arithmetic::min },
    // Misspelled in the dataset; programs use this key.
    "reminder"                   => { arity: 2, func: arithmetic::remainder },
    "sqrt"                       => { arity: 1, func: arithmetic::sqrt },
    "floor"                      => { arity: 1, func: arithmetic::floor },
    "log"                        => { arity: 1, func: arithmetic::log },
    "inverse"                    => { arity: 1, func: arithmetic::inverse },
    "negate"                     => { arity: 1, func: arithmetic::negate },
    "sine"                       => { arity: 1, func: arithmetic::sine },
    "cosine"                     => { arity: 1, func: arithmetic::cosine },
    "tangent"                    => { arity: 1, func: arithmetic::tangent },
    "factorial"                  => { arity: 1, func: combinatorics::factorial },
    "choose"                     => { arity: 2, func: combinatorics::choose },
    "permutation"                => { arity: 2, func: combinatorics::permutation },
    "gcd"                        => { arity: 2, func: combinatorics::gcd },
    "lcm"                        => { arity: 2, func: combinatorics::lcm },
    "negate_prob"                => { arity: 1, func: combinatorics::negate_prob },
    "speed"                      => { arity: 2, func: rates::speed },
    "stream_speed"               => { arity: 2, func: rates::stream_speed },
    "speed_in_still_water"       => { arity: 2, func: rates::speed_in_still_water },
    "original_price_before_loss" => { arity: 2, func: rates::original_price_before_loss },
    "original_price_before_gain" => { arity: 2, func: rates::original_price_before_gain },
    "p_after_gain"               => { arity: 2, func: rates::p_after_gain },
    "square_area"                => { arity: 1, func: geometry::square_area },
    "square_perimeter"           => { arity: 1, func: geometry::square_perimeter },
    "square_edge_by_perimeter"   => { arity: 1, func: geometry::square_edge_by_perimeter },
    "square_edge_by_area"        => { arity: 1, func: geometry::square_edge_by_area },
    "rhombus_perimeter"          => { arity: 1, func: geometry::rhombus_perimeter },
    "circle_area"                => { arity: 1, func: geometry::circle_area },
    // Misspelled in the dataset; programs use this key.
    "circumface"                 => { arity: 1, func: geometry::circumference },
    "surface_sphere"             => { arity: 1, func: geometry::surface_sphere },
    "volume_sphere"              => { arity: 1, func: geometry::volume_sphere },
    "surface_cube"               => { arity: 1, func: geometry::surface_cube },
    "volume_cube"                => { arity: 1, func: geometry::volume_cube },
    "cube_edge_by_volume"        => { arity: 1, func: geometry::cube_edge_by_volume },
    "rectangle_area"             => { arity: 2, func: geometry::rectangle_area },
    "rectangle_perimeter"        => { arity: 2, func: geometry::rectangle_perimeter },
    "rhombus_area"               => { arity: 2, func: geometry::rhombus_area },
    "triangle_area"              => { arity: 2, func: geometry::triangle_area },
    "diagonal"                   => { arity: 2, func: geometry::diagonal },
    "surface_cylinder"           => { arity: 2, func: geometry::surface_cylinder },
    "volume_cylinder"            => { arity: 2, func: geometry::volume_cylinder },
    "volume_cone"                => { arity: 2, func: geometry::volume_cone },
    "triangle_area_three_edges"  => { arity: 3, func: geometry::triangle_area_three_edges },
    "triangle_perimeter"         => { arity: 3, func: geometry::triangle_perimeter },
    "quadrilateral_area"         => { arity: 3, func: geometry::quadrilateral_area },
    "volume_rectangular_prism"   => { arity: 3, func: geometry::volume_rectangular_prism },
    "surface_rectangular_prism"  => { arity: 3, func: geometry::surface_rectangular_prism },
}

/// Name index over [`PRIMITIVE_TABLE`], built on first use.
static PRIMITIVE_INDEX: LazyLock<HashMap<&'static str, &'static PrimitiveDef>> =
    LazyLock::new(|| PRIMITIVE_TABLE.iter().map(|p| (p.name, p)).collect());

/// Looks up the primitive registered under `name`.
///
/// # Example
/// ```
/// use mathqa::interpreter::registry::lookup;
///
/// let add = lookup("add").unwrap();
/// assert_eq!(add.arity, 2);
/// assert_eq!((add.func)(&[2.0, 3.0], 0).unwrap(), 5.0);
/// assert!(lookup("remainder").is_none());
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<&'static PrimitiveDef> {
    PRIMITIVE_INDEX.get(name).copied()
}

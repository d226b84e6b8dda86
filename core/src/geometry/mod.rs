//! Geometry

// Define macros for property based testing.
#[cfg(test)]
#[macro_export]
macro_rules! prop_range {
    ($name: ident, $t: ty, $r: expr) => {
        prop_compose! {
            fn $name()(f in $r) -> $t {
                f
            }
        }
    };
}

#[cfg(test)]
#[macro_export]
macro_rules! prop_vector2 {
    ($name: ident, $t: ty, $xr: expr, $yr: expr) => {
        prop_compose! {
            fn $name()(x in $xr, y in $yr) -> Vector2<$t> {
                Vector2 { x, y }
            }
        }
    };
}

#[cfg(test)]
#[macro_export]
macro_rules! prop_vector3 {
    ($name: ident, $t: ty, $xr: expr, $yr: expr, $zr: expr) => {
        prop_compose! {
            fn $name()(x in $xr, y in $yr, z in $zr) -> Vector3<$t> {
                Vector3 { x, y, z }
            }
        }
    };
}

#[cfg(test)]
#[macro_export]
macro_rules! prop_point3 {
    ($name: ident, $t: ty, $xr: expr, $yr: expr, $zr: expr) => {
        prop_compose! {
            fn $name()(x in $xr, y in $yr, z in $zr) -> Point3<$t> {
                Point3 { x, y, z }
            }
        }
    };
}

mod common;
mod point3;
mod quaternion;
mod vector2;
mod vector3;

// Re-export
pub use common::*;
pub use point3::*;
pub use quaternion::*;
pub use vector2::*;
pub use vector3::*;

//! A bounded, ordered box of geometric shapes with perimeter/area totals and
//! index-based list management.

pub mod config;
pub mod error;
pub mod logging;
pub mod shape;
pub mod shape_box;

pub use config::BoxConfig;
pub use error::{BoxError, ConfigError, Result};
pub use shape::{Circle, Geometry, Rectangle, Shape, ShapeKind, Square, Triangle};
pub use shape_box::ShapeBox;

pub mod points;
pub mod write;

pub use points::geometry_points;
pub use write::GeometryFormat;

pub mod point;
pub mod vec3;

pub use point::Point;
pub use vec3::Vec3;

pub mod aabb;
pub mod transform;
pub mod vec2;

pub use aabb::Aabb;
pub use transform::{transform_local_to_world, Transform};
pub use vec2::Vec2;

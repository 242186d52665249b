mod point;
mod circle;

pub use point::Point;
pub use circle::{
    Circle,
    CircleGroup,
    BoundingBox,
};

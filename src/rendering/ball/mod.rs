pub mod ball;
pub mod mesh;

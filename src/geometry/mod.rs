mod edge;
mod shape;

pub use edge::Edge;
pub use shape::{Square, Triangle};

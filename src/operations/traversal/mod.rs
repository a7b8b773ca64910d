mod grow_tree;
mod level_set;

pub use grow_tree::{GrowTree, GrowthStats};
pub use level_set::LevelSet;

/// Deepest traversal accepted. The frontier at this depth holds 2^20 edges.
pub const MAX_DEPTH: u32 = 20;

/// Depths above this are accepted but logged as expensive.
pub const PRACTICAL_DEPTH: u32 = 15;

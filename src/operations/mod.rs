pub mod construction;
pub mod traversal;

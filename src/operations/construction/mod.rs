mod apex_rule;
mod build_apex;
mod build_square;

pub use apex_rule::{ApexRule, BaseAngles};
pub use build_apex::BuildApex;
pub use build_square::BuildSquare;

pub mod assessment;
pub mod field;
pub mod recommendation;

pub use assessment::*;
pub use field::*;
pub use recommendation::*;

// Functions are organized by categories
pub mod advanced;
pub mod arithmetic;
pub mod comparison;
pub mod exp_log;
pub mod geometry;
pub mod number_theory;
pub mod roots;
pub mod rounding;

// Re-export all function implementations
pub use advanced::*;
pub use arithmetic::*;
pub use comparison::*;
pub use exp_log::*;
pub use geometry::*;
pub use number_theory::*;
pub use roots::*;
pub use rounding::*;

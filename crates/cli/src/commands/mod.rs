pub mod check;
pub mod normalize;
pub mod summary;

pub use check::*;
pub use normalize::*;
pub use summary::*;

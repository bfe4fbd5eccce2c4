pub mod analysis;
pub mod enums;
pub mod translation;

pub use analysis::*;
pub use enums::*;
pub use translation::*;

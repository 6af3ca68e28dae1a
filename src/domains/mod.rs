pub mod arena;
pub mod logger;

pub use arena::*;
pub use logger::*;

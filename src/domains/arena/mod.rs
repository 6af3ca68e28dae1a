pub mod batch;
pub mod ports;
pub mod random;
pub mod sampler;
pub mod types;

pub use batch::*;
pub use ports::*;
pub use random::*;
pub use sampler::*;
pub use types::*;

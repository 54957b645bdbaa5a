pub mod pool;
pub mod registry;

pub use pool::*;
pub use registry::*;

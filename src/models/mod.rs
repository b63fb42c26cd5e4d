pub mod badge;
pub mod error;
pub mod evaluation;
pub mod stats;

pub use badge::*;
pub use error::*;
pub use evaluation::*;
pub use stats::*;

pub mod par;
pub mod score;
pub mod types;

pub use par::*;
pub use score::*;
pub use types::*;

pub mod errors;
pub mod ids;
pub mod pathguard;
pub mod report;

pub use errors::*;
pub use ids::*;
pub use pathguard::*;
pub use report::*;

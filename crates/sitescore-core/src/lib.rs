pub mod error;
pub mod metrics;
pub mod normalize;
pub mod score;
pub mod stats;
pub mod weights;

pub use error::*;
pub use metrics::*;
pub use normalize::*;
pub use score::*;
pub use stats::*;
pub use weights::*;

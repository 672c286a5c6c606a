pub mod asset;
pub mod derivation;
pub mod events;
pub mod params;

pub use asset::*;
pub use derivation::*;
pub use events::*;
pub use params::*;

/// Maximum number of intents addressed by one batch fill or reclaim
pub const MAX_BATCH_SIZE: usize = 10;

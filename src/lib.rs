//! Standing Intents: reusable, deterministically addressed fill/reclaim intents.
//!
//! The contracts live in their own crates and are re-exported here together with the shared
//! types and the off-chain filler.

pub use standing_intents_factory as factory;
pub use standing_intents_filler as filler;
pub use standing_intents_intent as intent;
pub use standing_intents_notifier as notifier;
pub use standing_intents_types as types;

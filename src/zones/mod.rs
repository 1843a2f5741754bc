//! Court zones.
//!
//! ## Key Types
//!
//! - `CourtZone`: the seven floor labels (service boxes, kitchens,
//!   backcourts, out of bounds)
//! - `ZoneLabel`: a zone tagged with the player whose half it is in
//! - `classify`: bounce position to `ZoneLabel`
//! - `ColliderRegistry`: collider id to paddle or floor zone, for hosts
//!   that report trigger volumes instead of positions

pub mod classifier;
pub mod colliders;
pub mod zone;

pub use classifier::classify;
pub use colliders::{ColliderConfig, ColliderId, ColliderRegistry, PaddleBinding, ZoneBinding};
pub use zone::{CourtZone, Position, ZoneLabel};

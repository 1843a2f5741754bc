//! Event and notification contracts of the rule engine.
//!
//! - [`RallyEvent`]: inputs from the collision layer (paddle hit, bounce)
//! - [`HitRecord`]: a paddle hit with its physical details
//! - [`Notification`]: outputs to collaborators (serve ready, fault,
//!   point awarded, score changed, game won)
//! - [`PointReason`]: why a point ended

mod event;
mod notification;

pub use event::{HitRecord, RallyEvent};
pub use notification::{Notification, Notifications, PointReason};

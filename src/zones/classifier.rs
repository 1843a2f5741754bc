//! Bounce position to court zone classification.
//!
//! ## Coordinates
//!
//! A position is translated into court-local coordinates (position minus
//! court center). Local x is lateral, local z is depth; height is ignored.
//! Player1 owns local z < 0 and faces +z, Player2 owns local z >= 0 and
//! faces -z. Left and right are taken from the owner's point of view, so
//! Player2's lateral coordinate is -x.
//!
//! ## Lines
//!
//! Every comparison is strict. A point exactly on a line resolves as:
//!
//! | Line | Zone |
//! |---|---|
//! | sideline, baseline | in bounds |
//! | kitchen line | service box |
//! | service line (length / 4) | backcourt |
//! | center line | right |
//! | net | Player2's half |
//!
//! Non-finite positions are out of bounds.

use crate::core::{Court, Player, ServeSide};

use super::zone::{CourtZone, Position, ZoneLabel};

/// Classify a bounce position on `court`.
///
/// Pure and total: every position maps to exactly one label.
///
/// ```
/// use pickleball_rules::core::{Court, Player};
/// use pickleball_rules::zones::{classify, CourtZone, Position};
///
/// let court = Court::default();
/// let label = classify(Position::new(1.0, 0.0, 1.0), &court);
/// assert_eq!(label.owner(), Some(Player::Player2));
/// assert_eq!(label.zone(), CourtZone::LeftKitchen);
/// ```
#[must_use]
pub fn classify(position: Position, court: &Court) -> ZoneLabel {
    if !position.is_finite() {
        return ZoneLabel::out_of_bounds();
    }

    let local = position - court.center;
    if local.x.abs() > court.width / 2.0 || local.z.abs() > court.length / 2.0 {
        return ZoneLabel::out_of_bounds();
    }

    let owner = if local.z < 0.0 {
        Player::Player1
    } else {
        Player::Player2
    };
    let lateral = match owner {
        Player::Player1 => local.x,
        Player::Player2 => -local.x,
    };
    let side = if lateral < 0.0 {
        ServeSide::Left
    } else {
        ServeSide::Right
    };

    let depth = local.z.abs();
    let zone = if depth < court.kitchen_depth {
        CourtZone::kitchen(side)
    } else if depth < court.service_line() {
        CourtZone::service_box(side)
    } else {
        CourtZone::backcourt(side)
    };

    ZoneLabel::on_side(owner, zone)
}

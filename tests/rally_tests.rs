//! Rally rule integration tests.
//!
//! Full rallies fed through `RallyEngine`, checking rule priority,
//! scoring and serve rotation together.

use pickleball_rules::core::{MatchConfig, Player, ServeSide};
use pickleball_rules::events::{Notification, Notifications, PointReason, RallyEvent};
use pickleball_rules::rules::{RallyEngine, RallyPhase};
use pickleball_rules::zones::{CourtZone, Position, ZoneLabel};

use Player::{Player1 as P1, Player2 as P2};

fn engine() -> RallyEngine {
    RallyEngine::new(MatchConfig::default()).unwrap()
}

fn on(owner: Player, zone: CourtZone) -> RallyEvent {
    RallyEvent::bounce(ZoneLabel::on_side(owner, zone))
}

fn out() -> RallyEvent {
    RallyEvent::bounce(ZoneLabel::out_of_bounds())
}

fn hit(player: Player) -> RallyEvent {
    RallyEvent::hit(player)
}

/// Feed events, collecting every notification.
fn play(engine: &mut RallyEngine, events: &[RallyEvent]) -> Notifications {
    let mut notes = Notifications::new();
    for event in events {
        notes.extend(engine.apply(*event));
    }
    notes
}

fn point(notes: &Notifications) -> Option<(Player, PointReason)> {
    notes.iter().find_map(|n| match n {
        Notification::PointAwarded { winner, reason } => Some((*winner, *reason)),
        _ => None,
    })
}

// =============================================================================
// Scenarios
// =============================================================================

/// Serve from the right into the receiver's left box is a side-out.
#[test]
fn test_wrong_box_serve_is_side_out() {
    let mut engine = engine();
    engine.start_serve(P1);

    let notes = play(&mut engine, &[hit(P1), on(P2, CourtZone::LeftServiceBox)]);

    assert_eq!(point(&notes), Some((P2, PointReason::WrongServiceBox)));
    assert!(notes.contains(&Notification::Fault {
        reason: PointReason::WrongServiceBox,
        faulting: P1,
    }));
    assert_eq!((engine.score().player1(), engine.score().player2()), (0, 1));
    assert_eq!(engine.next_serve(), Some((P2, ServeSide::Right)));
}

/// Good serve, two returns, then a double bounce on the receiver's side.
#[test]
fn test_double_bounce_keeps_serve_and_flips_side() {
    let mut engine = engine();
    engine.start_serve(P1);

    let notes = play(
        &mut engine,
        &[
            hit(P1),
            on(P2, CourtZone::RightServiceBox),
            hit(P2),
            on(P1, CourtZone::LeftBackcourt),
            hit(P1),
            on(P2, CourtZone::LeftBackcourt),
            on(P2, CourtZone::RightBackcourt),
        ],
    );

    assert!(notes.contains(&Notification::ServeInPlay { server: P1 }));
    assert_eq!(point(&notes), Some((P1, PointReason::DoubleBounce)));
    assert_eq!(engine.score().player1(), 1);
    assert_eq!(engine.next_serve(), Some((P1, ServeSide::Left)));
}

/// A mid-rally shot out of bounds gives the point and the serve away.
#[test]
fn test_out_of_bounds_after_return() {
    let mut engine = engine();
    engine.start_serve(P1);

    let notes = play(
        &mut engine,
        &[hit(P1), on(P2, CourtZone::RightServiceBox), hit(P2), out()],
    );

    assert_eq!(point(&notes), Some((P1, PointReason::OutOfBounds)));
    assert_eq!(engine.next_serve(), Some((P1, ServeSide::Left)));

    // Now the same thing from the other server's point of view.
    engine.start_serve(P1);
    let notes = play(
        &mut engine,
        &[hit(P1), on(P2, CourtZone::LeftServiceBox), hit(P2), out()],
    );
    assert_eq!(point(&notes), Some((P1, PointReason::OutOfBounds)));
    assert_eq!(engine.next_serve(), Some((P1, ServeSide::Right)));
    assert_eq!(engine.score().player1(), 2);
}

// =============================================================================
// Serve rules
// =============================================================================

#[test]
fn test_kitchen_serve_always_faults() {
    for server in Player::ALL {
        for kitchen in [CourtZone::LeftKitchen, CourtZone::RightKitchen] {
            for owner in Player::ALL {
                let mut engine = engine();
                engine.start_serve(server);
                let notes = play(&mut engine, &[hit(server), on(owner, kitchen)]);
                assert_eq!(
                    point(&notes),
                    Some((server.opponent(), PointReason::ServeInKitchen)),
                    "{server} serving into {owner} {kitchen}"
                );
            }
        }
    }
}

#[test]
fn test_serve_side_sets_target_box() {
    let mut engine = engine();

    // Player2 wins on serve, then serves from the left.
    engine.start_serve(P2);
    engine.award_point(P2, PointReason::Referee);
    let (server, side) = engine.next_serve().unwrap();
    assert_eq!((server, side), (P2, ServeSide::Left));

    engine.start_serve(server);
    let notes = play(&mut engine, &[hit(P2), on(P1, CourtZone::RightServiceBox)]);
    assert_eq!(point(&notes), Some((P1, PointReason::WrongServiceBox)));

    engine.start_serve(P2);
    let notes = play(&mut engine, &[hit(P2), on(P1, CourtZone::LeftServiceBox)]);
    assert_eq!(notes.as_slice(), &[Notification::ServeInPlay { server: P2 }]);
}

#[test]
fn test_serve_without_reported_hit() {
    // Collision layers sometimes miss the serve contact.
    let mut engine = engine();
    engine.start_serve(P1);

    let notes = play(&mut engine, &[on(P2, CourtZone::RightServiceBox)]);
    assert_eq!(notes.as_slice(), &[Notification::ServeInPlay { server: P1 }]);

    let notes = play(&mut engine, &[on(P2, CourtZone::RightBackcourt)]);
    assert_eq!(point(&notes), Some((P1, PointReason::DoubleBounce)));
}

#[test]
fn test_volleyed_serve_skips_box_check() {
    let mut engine = engine();
    engine.start_serve(P1);

    let notes = play(
        &mut engine,
        &[hit(P1), hit(P2), on(P1, CourtZone::RightKitchen), hit(P1), out()],
    );

    assert_eq!(point(&notes), Some((P2, PointReason::OutOfBounds)));
}

// =============================================================================
// Rally rules
// =============================================================================

#[test]
fn test_out_of_bounds_beats_everything() {
    let mut engine = engine();
    engine.start_serve(P2);

    let notes = play(&mut engine, &[hit(P2), out()]);

    assert_eq!(point(&notes), Some((P1, PointReason::OutOfBounds)));
}

#[test]
fn test_own_side_only_on_first_bounce() {
    let mut engine = engine();
    engine.start_serve(P1);

    // P2's return lands on P2's own half: fault on the first bounce.
    let notes = play(
        &mut engine,
        &[hit(P1), on(P2, CourtZone::RightServiceBox), hit(P2), on(P2, CourtZone::LeftKitchen)],
    );
    assert_eq!(point(&notes), Some((P1, PointReason::OwnSideLanding)));
}

#[test]
fn test_second_bounce_on_other_half_is_not_own_side() {
    let mut engine = engine();
    engine.start_serve(P1);

    // P2 returns into P1's half, the ball skips across the net back onto
    // P2's half: the first bounce decided nothing, the second is not an
    // own-side landing either.
    let notes = play(
        &mut engine,
        &[
            hit(P1),
            on(P2, CourtZone::RightServiceBox),
            hit(P2),
            on(P1, CourtZone::RightKitchen),
            on(P2, CourtZone::LeftKitchen),
        ],
    );
    assert_eq!(point(&notes), None);
    assert!(engine.is_point_in_progress());

    let notes = play(&mut engine, &[on(P1, CourtZone::LeftKitchen)]);
    assert_eq!(point(&notes), Some((P2, PointReason::DoubleBounce)));
}

#[test]
fn test_paddle_hit_resets_bounce_counts() {
    let mut engine = engine();
    engine.start_serve(P1);

    play(&mut engine, &[hit(P1), on(P2, CourtZone::RightServiceBox), hit(P2)]);
    assert_eq!(engine.rally().bounces_on(P2), 0);

    let notes = play(&mut engine, &[on(P1, CourtZone::LeftBackcourt), hit(P1)]);
    assert!(notes.is_empty());
    assert_eq!(engine.rally().bounces_on(P1), 0);
    assert_eq!(engine.rally().last_hitter(), Some(P1));
}

// =============================================================================
// Noise and commands
// =============================================================================

#[test]
fn test_duplicate_bounce_after_point_is_dropped() {
    let mut engine = engine();
    engine.start_serve(P1);
    let first = play(&mut engine, &[hit(P1), on(P2, CourtZone::LeftKitchen)]);
    let again = play(&mut engine, &[on(P2, CourtZone::LeftKitchen), hit(P2), out()]);

    assert_eq!(point(&first), Some((P2, PointReason::ServeInKitchen)));
    assert!(again.is_empty());
    assert_eq!(engine.score().total(), 1);
    assert_eq!(
        engine.phase(),
        RallyPhase::PointDecided { winner: P2, reason: PointReason::ServeInKitchen }
    );
}

#[test]
fn test_new_game_mid_rally_is_hard_reset() {
    let mut engine = engine();
    engine.start_serve(P1);
    engine.award_point(P1, PointReason::Referee);
    engine.start_serve(P1);
    play(&mut engine, &[hit(P1), on(P2, CourtZone::LeftServiceBox)]);
    engine.start_serve(P2);
    play(&mut engine, &[hit(P2)]);

    engine.new_game(P1);

    assert_eq!(engine.score().total(), 0);
    assert_eq!(engine.rally().last_hitter(), None);
    assert_eq!(engine.phase(), RallyPhase::AwaitingServe { server: P1, side: ServeSide::Right });
    assert!(play(&mut engine, &[out()]).is_empty());
}

#[test]
fn test_restarting_serve_discards_rally() {
    let mut engine = engine();
    engine.start_serve(P1);
    play(&mut engine, &[hit(P1), on(P2, CourtZone::RightServiceBox)]);

    let notes = engine.start_serve(P1);

    assert_eq!(
        notes.as_slice(),
        &[Notification::ServeReady { server: P1, side: ServeSide::Right }]
    );
    assert!(engine.rally().in_serve_phase());
    assert_eq!(engine.rally().bounces_on(P2), 0);
    assert_eq!(engine.score().total(), 0);
}

#[test]
fn test_raw_positions() {
    let mut engine = engine();
    engine.start_serve(P1);

    // Player1 serves from the right; Player2's right box is at negative x.
    let notes = engine.on_bounce_at(Position::new(-1.2, 0.0, 3.0));
    assert!(notes.contains(&Notification::ServeInPlay { server: P1 }));

    engine.on_paddle_hit(P2);
    let notes = engine.on_bounce_at(Position::new(0.0, 0.0, -9.0));
    assert_eq!(point(&notes), Some((P1, PointReason::OutOfBounds)));
}

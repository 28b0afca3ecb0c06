use canvas_arcade::config::InvadersConfig;
use canvas_arcade::entities::*;
use canvas_arcade::geometry::Rect;
use canvas_arcade::round::{Outcome, RoundStatus};

#[test]
fn entity_clone_and_eq() {
    assert_eq!(Direction::Left, Direction::Left);
    assert_ne!(Direction::Left, Direction::Right);
    assert_eq!(RoundStatus::Idle, RoundStatus::Idle);
    assert_ne!(RoundStatus::Ended(Outcome::Won), RoundStatus::Ended(Outcome::Lost));

    let bullet = Bullet {
        rect: Rect::new(0, 0, 10, 10),
        velocity_y: -10,
    };
    assert_eq!(bullet.clone(), bullet);
}

#[test]
fn direction_sign_and_reversal() {
    assert_eq!(Direction::Left.sign(), -1);
    assert_eq!(Direction::Right.sign(), 1);
    assert_eq!(Direction::Left.reversed(), Direction::Right);
    assert_eq!(Direction::Right.reversed().reversed(), Direction::Right);
}

#[test]
fn round_status_start_rules() {
    assert!(RoundStatus::Idle.accepts_start());
    assert!(!RoundStatus::Running.accepts_start());
    assert!(RoundStatus::Ended(Outcome::Lost).accepts_start());
    assert!(RoundStatus::Running.is_running());
    assert_eq!(RoundStatus::Ended(Outcome::Won).outcome(), Some(Outcome::Won));
    assert_eq!(RoundStatus::Running.outcome(), None);
}

#[test]
fn game_state_clone_is_independent() {
    let original = InvadersState {
        ship: Some(Ship {
            rect: Rect::new(330, 450, 370, 470),
        }),
        formation: Formation {
            enemies: Vec::new(),
            direction: Direction::Right,
        },
        bullets: Vec::new(),
        score: 0,
        lives: 3,
        status: RoundStatus::Running,
        frame: 0,
        ended_frames: 0,
        config: InvadersConfig::default(),
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.score = 999;
    cloned.formation.enemies.push(Rect::new(5, 5, 35, 35));
    if let Some(ship) = cloned.ship.as_mut() {
        ship.rect.translate(10, 0);
    }

    assert_eq!(original.score, 0);
    assert!(original.formation.enemies.is_empty());
    assert_eq!(
        original.ship.as_ref().map(|s| s.rect),
        Some(Rect::new(330, 450, 370, 470))
    );
}

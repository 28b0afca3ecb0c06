use canvas_arcade::compute::{invaders, platformer};
use canvas_arcade::config::{InvadersConfig, PlatformerConfig};
use canvas_arcade::display::{self, Viewport};
use canvas_arcade::geometry::Rect;
use canvas_arcade::round::{Outcome, RoundStatus};

fn viewport() -> Viewport {
    // 100 × 50 play cells inside the border
    Viewport::new(102, 54, 700, 500)
}

fn rendered(render: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> String {
    let mut out = Vec::new();
    render(&mut out).unwrap();
    String::from_utf8_lossy(&out).into_owned()
}

// ── Viewport ──────────────────────────────────────────────────────────────────

#[test]
fn world_edges_map_inside_the_border() {
    let vp = viewport();
    assert_eq!(vp.col(0), 1);
    assert_eq!(vp.col(350), 51);
    assert_eq!(vp.col(700), 100);
    assert_eq!(vp.row(0), 2);
    assert_eq!(vp.row(250), 27);
    assert_eq!(vp.row(500), 51);
}

#[test]
fn rect_covers_at_least_one_cell() {
    let vp = viewport();
    let bullet = Rect::new(345, 440, 346, 441);
    let (c0, r0, c1, r1) = vp.cells(&bullet).unwrap();
    assert_eq!((c0, r0), (c1, r1));
}

#[test]
fn floor_spans_the_play_area() {
    let vp = viewport();
    assert_eq!(vp.cells(&Rect::new(0, 480, 700, 500)), Some((1, 50, 100, 51)));
}

#[test]
fn offscreen_rect_is_skipped() {
    let vp = viewport();
    assert_eq!(vp.cells(&Rect::new(0, -20, 10, -10)), None);
}

#[test]
fn tiny_terminal_does_not_panic() {
    let vp = Viewport::new(0, 0, 700, 500);
    assert_eq!(vp.col(350), 1);
    assert_eq!(vp.row(250), 2);
}

// ── Frames ────────────────────────────────────────────────────────────────────

#[test]
fn idle_platformer_prompts_for_start() {
    let state = platformer::init_state(PlatformerConfig::default());
    let text = rendered(|out| display::platformer::render(out, &state, 102, 54));
    assert!(text.contains("Press ENTER to Start"));
    assert!(text.contains("Time: 0.00s"));
}

#[test]
fn won_platformer_shows_banner() {
    let mut state = platformer::init_state(PlatformerConfig::default());
    state.status = RoundStatus::Ended(Outcome::Won);
    state.player = None;
    let text = rendered(|out| display::platformer::render(out, &state, 102, 54));
    assert!(text.contains("You Win!"));
}

#[test]
fn running_invaders_shows_hud() {
    let state = invaders::start_round(&invaders::init_state(InvadersConfig::default()));
    let text = rendered(|out| display::invaders::render(out, &state, 102, 54));
    assert!(text.contains("Score: 0 | Lives: 3"));
    assert!(!text.contains("Press ENTER"));
}

#[test]
fn ended_invaders_hides_restart_until_delay_passes() {
    let mut state = invaders::init_state(InvadersConfig::default());
    state.status = RoundStatus::Ended(Outcome::Lost);
    state.score = 70;

    let text = rendered(|out| display::invaders::render(out, &state, 102, 54));
    assert!(text.contains("Game Over!"));
    assert!(text.contains("Final Score: 70"));
    assert!(!text.contains("Play Again"));

    state.ended_frames = state.config.restart_delay_frames;
    let text = rendered(|out| display::invaders::render(out, &state, 102, 54));
    assert!(text.contains("Press ENTER to Play Again"));
}

#[test]
fn border_boxes_the_play_area() {
    let vp = viewport();
    let text = rendered(|out| display::draw_border(out, &vp));
    let bar = "─".repeat(100);
    assert!(text.contains(&format!("┌{bar}┐")));
    assert!(text.contains(&format!("└{bar}┘")));
    // rows 2..=51, both sides
    assert_eq!(text.matches('│').count(), 100);
}

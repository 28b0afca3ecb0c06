use canvas_arcade::geometry::*;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn random_rect(rng: &mut StdRng) -> Rect {
    let x = rng.gen_range(-50..50);
    let y = rng.gen_range(-50..50);
    let w = rng.gen_range(0..40);
    let h = rng.gen_range(0..40);
    Rect::from_origin(x, y, w, h)
}

// ── overlaps ──────────────────────────────────────────────────────────────────

#[test]
fn overlapping_rects_intersect() {
    let a = Rect::new(0, 0, 10, 10);
    let b = Rect::new(5, 5, 15, 15);
    assert!(overlaps(&a, &b));
}

#[test]
fn edge_touching_is_not_overlap() {
    let a = Rect::new(0, 0, 10, 10);
    let right = Rect::new(10, 0, 20, 10);
    let below = Rect::new(0, 10, 10, 20);
    assert!(!overlaps(&a, &right));
    assert!(!overlaps(&a, &below));
}

#[test]
fn corner_touching_is_not_overlap() {
    let a = Rect::new(0, 0, 10, 10);
    let b = Rect::new(10, 10, 20, 20);
    assert!(!overlaps(&a, &b));
}

#[test]
fn containment_is_overlap() {
    let outer = Rect::new(0, 0, 100, 100);
    let inner = Rect::new(40, 40, 60, 60);
    assert!(overlaps(&outer, &inner));
    assert!(overlaps(&inner, &outer));
}

#[test]
fn disjoint_rects_do_not_overlap() {
    let a = Rect::new(0, 0, 10, 10);
    let b = Rect::new(30, 30, 40, 40);
    assert!(!a.overlaps(&b));
}

#[test]
fn overlap_is_symmetric() {
    let mut rng = seeded_rng();
    for _ in 0..5_000 {
        let a = random_rect(&mut rng);
        let b = random_rect(&mut rng);
        assert_eq!(overlaps(&a, &b), overlaps(&b, &a), "a={a:?} b={b:?}");
    }
}

#[test]
fn zero_width_rect_inside_a_box_overlaps() {
    let sliver = Rect::new(5, 0, 5, 10);
    let box_ = Rect::new(0, 0, 10, 10);
    assert!(overlaps(&sliver, &box_));
    assert!(overlaps(&box_, &sliver));
}

#[test]
fn zero_width_rect_on_an_edge_does_not_overlap() {
    let sliver = Rect::new(10, 0, 10, 10);
    let box_ = Rect::new(0, 0, 10, 10);
    assert!(!overlaps(&sliver, &box_));
    assert!(!overlaps(&box_, &sliver));
}

// ── Rect helpers ──────────────────────────────────────────────────────────────

#[test]
fn from_origin_sets_size() {
    let r = Rect::from_origin(50, 450, 20, 20);
    assert_eq!(r, Rect::new(50, 450, 70, 470));
    assert_eq!(r.width(), 20);
    assert_eq!(r.height(), 20);
    assert_eq!(r.center_x(), 60);
}

#[test]
fn translate_moves_all_edges() {
    let r = Rect::new(0, 0, 10, 10).translated(3, -4);
    assert_eq!(r, Rect::new(3, -4, 13, 6));
}

#[test]
fn set_bottom_keeps_height() {
    let mut r = Rect::new(0, 470, 20, 490);
    r.set_bottom(480);
    assert_eq!(r, Rect::new(0, 460, 20, 480));
}

#[test]
fn clamp_x_pushes_back_from_left() {
    let mut r = Rect::new(-6, 10, 14, 30);
    r.clamp_x(0, 700);
    assert_eq!(r, Rect::new(0, 10, 20, 30));
}

#[test]
fn clamp_x_pushes_back_from_right() {
    let mut r = Rect::new(690, 10, 710, 30);
    r.clamp_x(0, 700);
    assert_eq!(r, Rect::new(680, 10, 700, 30));
}

#[test]
fn clamp_x_leaves_inside_rect_alone() {
    let mut r = Rect::new(100, 10, 120, 30);
    r.clamp_x(0, 700);
    assert_eq!(r, Rect::new(100, 10, 120, 30));
}

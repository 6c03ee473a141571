//! Toy motion
//!
//! One Euler step per frame tick, no delta-time scaling. Wall reflection is
//! checked after the move, so the toy may overshoot an edge by up to one
//! step before its velocity flips.

use glam::Vec2;

use super::state::Toy;

/// Advance the toy by one tick inside a canvas of size `bounds`
pub fn advance(toy: &mut Toy, bounds: Vec2) {
    toy.pos += toy.vel;

    let max = toy.max_pos(bounds);
    if toy.pos.x < 0.0 || toy.pos.x > max.x {
        toy.vel.x = -toy.vel.x;
    }
    if toy.pos.y < 0.0 || toy.pos.y > max.y {
        toy.vel.y = -toy.vel.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TOY_SIZE;
    use proptest::prelude::*;

    const CANVAS: Vec2 = Vec2::new(400.0, 400.0);

    #[test]
    fn test_moves_by_velocity() {
        let mut toy = Toy::new(Vec2::new(100.0, 100.0), Vec2::new(2.0, -1.5), TOY_SIZE);
        advance(&mut toy, CANVAS);
        assert_eq!(toy.pos, Vec2::new(102.0, 98.5));
        assert_eq!(toy.vel, Vec2::new(2.0, -1.5));
    }

    #[test]
    fn test_reflects_past_right_edge() {
        let x = CANVAS.x - TOY_SIZE + 1.0;
        let mut toy = Toy::new(Vec2::new(x, 100.0), Vec2::new(1.0, 0.0), TOY_SIZE);
        advance(&mut toy, CANVAS);
        assert!(toy.vel.x < 0.0);
        assert_eq!(toy.vel.y, 0.0);
    }

    #[test]
    fn test_reflects_past_top_edge() {
        let mut toy = Toy::new(Vec2::new(100.0, 1.0), Vec2::new(0.0, -2.5), TOY_SIZE);
        advance(&mut toy, CANVAS);
        // Overshoot is kept, only the velocity flips
        assert_eq!(toy.pos.y, -1.5);
        assert_eq!(toy.vel.y, 2.5);
    }

    #[test]
    fn test_no_flip_when_landing_exactly_on_edge() {
        let mut toy = Toy::new(Vec2::new(350.0, 100.0), Vec2::new(2.0, 0.0), TOY_SIZE);
        advance(&mut toy, CANVAS);
        assert_eq!(toy.pos.x, 352.0);
        assert_eq!(toy.vel.x, 2.0);
    }

    #[test]
    fn test_stays_near_canvas_over_many_ticks() {
        let mut toy = Toy::new(Vec2::new(10.0, 300.0), Vec2::new(2.9, -2.7), TOY_SIZE);
        for _ in 0..10_000 {
            advance(&mut toy, CANVAS);
            assert!(toy.pos.x >= -3.0 && toy.pos.x <= CANVAS.x - TOY_SIZE + 3.0);
            assert!(toy.pos.y >= -3.0 && toy.pos.y <= CANVAS.y - TOY_SIZE + 3.0);
        }
    }

    proptest! {
        #[test]
        fn zero_velocity_never_moves(
            x in 0.0f32..352.0,
            y in 0.0f32..352.0,
            steps in 1usize..500,
        ) {
            let start = Vec2::new(x, y);
            let mut toy = Toy::new(start, Vec2::ZERO, TOY_SIZE);
            for _ in 0..steps {
                advance(&mut toy, CANVAS);
            }
            prop_assert_eq!(toy.pos, start);
            prop_assert_eq!(toy.vel, Vec2::ZERO);
        }
    }
}

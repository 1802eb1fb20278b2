//! Axis-aligned collision geometry
//!
//! Collision rectangles are deliberately distinct from sprite art bounds:
//! the simulation works entirely in world units from the tuning boxes.

use super::state::Obstacle;

/// An axis-aligned rectangle in world units, y pointing down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Strict overlap test; rectangles that merely share an edge do not
    /// collide.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Index of the first live obstacle overlapping `character`, in insertion
/// order. Overlap is symmetric, so the outcome is order-independent; the
/// index only determines which obstacle gets credited with the hit.
pub fn first_hit(character: &Rect, obstacles: &[Obstacle]) -> Option<usize> {
    obstacles.iter().position(|o| character.intersects(&o.rect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::BirdLevel;
    use crate::tuning::Tuning;
    use proptest::prelude::*;

    #[test]
    fn overlapping_rects_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        let c = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&c));
    }

    #[test]
    fn containment_intersects() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 5.0, 5.0);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn first_hit_respects_insertion_order() {
        let tuning = Tuning::default();
        let mut near = Obstacle::cactus(0, 50.0, &tuning);
        near.x = 50.0;
        let far = Obstacle::bird(BirdLevel::High, 600.0, &tuning);
        let character = Rect::new(40.0, near.y, 60.0, near.size.y);

        let hit = first_hit(&character, &[far.clone(), near.clone()]);
        assert_eq!(hit, Some(1));
        let hit = first_hit(&character, &[near, far]);
        assert_eq!(hit, Some(0));
    }

    #[test]
    fn no_hit_when_clear() {
        let tuning = Tuning::default();
        let obstacle = Obstacle::cactus(3, 600.0, &tuning);
        let character = Rect::new(60.0, 300.0, 57.0, 61.0);
        assert_eq!(first_hit(&character, &[obstacle]), None);
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(
            ax in -100.0f32..700.0, ay in -50.0f32..500.0,
            aw in 1.0f32..150.0, ah in 1.0f32..150.0,
            bx in -100.0f32..700.0, by in -50.0f32..500.0,
            bw in 1.0f32..150.0, bh in 1.0f32..150.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        }

        #[test]
        fn rect_never_intersects_distant_rect(
            ax in 0.0f32..100.0, ay in 0.0f32..100.0,
            aw in 1.0f32..50.0, ah in 1.0f32..50.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(ax + aw + 1.0, ay, 10.0, 10.0);
            prop_assert!(!a.intersects(&b));
        }
    }
}

use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_half_extent(center: Vec2, half: Vec2) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Strict overlap; boxes that only share an edge do not overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }
}

/// Which wall a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// The rectangular field the ball and paddles live in.
/// Origin is the top-left corner, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(Vec2::ZERO, self.size())
    }

    pub fn center(&self) -> Vec2 {
        self.size() * 0.5
    }

    /// Paddles are centred on their wall
    pub fn paddle_spawn(&self, side: Side) -> Vec2 {
        let x = match side {
            Side::Left => 0.0,
            Side::Right => self.width,
        };
        Vec2::new(x, self.height * 0.5)
    }

    pub fn ball_spawn(&self) -> Vec2 {
        self.center()
    }

    /// Side of the field a point lies on; the centre line counts as left
    pub fn side_of(&self, x: f32) -> Side {
        if x <= self.width * 0.5 {
            Side::Left
        } else {
            Side::Right
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_overlap_is_strict() {
        let a = Aabb::from_center_half_extent(Vec2::new(0.0, 0.0), Vec2::splat(10.0));
        let touching = Aabb::from_center_half_extent(Vec2::new(20.0, 0.0), Vec2::splat(10.0));
        let inside = Aabb::from_center_half_extent(Vec2::new(15.0, 5.0), Vec2::splat(10.0));
        assert!(!a.overlaps(&touching), "Shared edge is not an overlap");
        assert!(a.overlaps(&inside));
        assert!(inside.overlaps(&a), "Overlap should be symmetric");
    }

    #[test]
    fn test_aabb_contains_and_size() {
        let a = Aabb::new(Vec2::ZERO, Vec2::new(20.0, 100.0));
        assert!(a.contains(Vec2::new(20.0, 100.0)), "Edges are inclusive");
        assert!(!a.contains(Vec2::new(21.0, 50.0)));
        assert_eq!(a.size(), Vec2::new(20.0, 100.0));
        assert_eq!(a.center(), Vec2::new(10.0, 50.0));
    }

    #[test]
    fn test_playfield_spawns() {
        let field = Playfield::new(1280.0, 720.0);
        assert_eq!(field.paddle_spawn(Side::Left), Vec2::new(0.0, 360.0));
        assert_eq!(field.paddle_spawn(Side::Right), Vec2::new(1280.0, 360.0));
        assert_eq!(field.ball_spawn(), Vec2::new(640.0, 360.0));
        assert_eq!(field.side_of(0.0), Side::Left);
        assert_eq!(field.side_of(1280.0), Side::Right);
    }
}

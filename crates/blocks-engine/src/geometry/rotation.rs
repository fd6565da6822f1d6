use crate::coords::Vec2;

/// Orientation stored as a unit vector `(cos, sin)`.
///
/// Invariant: `cos² + sin² == 1` (within float tolerance). Constructors never
/// normalize; callers supplying raw components are responsible for the
/// invariant, which is checked in debug builds only.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rotation {
    cos: f32,
    sin: f32,
}

impl Rotation {
    pub const IDENTITY: Rotation = Rotation { cos: 1.0, sin: 0.0 };

    /// Tolerance used by the debug-only unit-length check.
    const UNIT_EPSILON: f32 = 1.0e-3;

    #[inline]
    pub fn from_angle(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self { cos, sin }
    }

    /// Wraps an existing unit vector, e.g. the orientation of a physics body.
    #[inline]
    pub fn from_unit(cos: f32, sin: f32) -> Self {
        debug_assert!(
            ((cos * cos + sin * sin) - 1.0).abs() <= Self::UNIT_EPSILON,
            "Rotation::from_unit: ({cos}, {sin}) is not unit length"
        );
        Self { cos, sin }
    }

    #[inline]
    pub fn cos(self) -> f32 {
        self.cos
    }

    #[inline]
    pub fn sin(self) -> f32 {
        self.sin
    }

    /// Angle in radians, in `(-π, π]`.
    #[inline]
    pub fn angle(self) -> f32 {
        self.sin.atan2(self.cos)
    }

    /// Rotates `v` about the origin.
    #[inline]
    pub fn apply(self, v: Vec2) -> Vec2 {
        Vec2::new(
            v.x * self.cos - v.y * self.sin,
            v.x * self.sin + v.y * self.cos,
        )
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Position + orientation snapshot of a body.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Pose {
    pub position: Vec2,
    pub rotation: Rotation,
}

impl Pose {
    #[inline]
    pub const fn new(position: Vec2, rotation: Rotation) -> Self {
        Self { position, rotation }
    }

    /// Maps a body-space point into world space.
    #[inline]
    pub fn apply(self, local: Vec2) -> Vec2 {
        self.position + self.rotation.apply(local)
    }
}

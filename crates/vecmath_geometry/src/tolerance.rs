//! Numeric tolerances used by the intersection tests

use crate::error::{GeometryError, Result};

/// Tolerances shared by every intersection query
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tolerances {
    /// `|normal . direction|` at or below this counts as parallel.
    ///
    /// Planes and disks compare against it directly. Triangles scale it by
    /// `|normal| * |direction|`, since their normal is left unnormalized.
    pub parallel_epsilon: f32,

    /// Time reported for a miss
    pub miss_time: f32,

    /// Stand-in for a zero ray direction component in the slab test
    pub slab_direction_epsilon: f32,

    /// Slab entry may exceed slab exit by this much before the box is missed
    pub slab_overlap_tolerance: f32,
}

impl Tolerances {
    pub const DEFAULT: Self = Self {
        parallel_epsilon: 1e-6,
        miss_time: 1e6,
        slab_direction_epsilon: 1e-7,
        slab_overlap_tolerance: 1e4,
    };

    /// Exact slab test: no overlap slack
    pub fn strict() -> Self {
        Self {
            slab_overlap_tolerance: 0.0,
            ..Self::DEFAULT
        }
    }

    /// Set the parallel threshold
    pub fn with_parallel_epsilon(mut self, epsilon: f32) -> Self {
        self.parallel_epsilon = epsilon;
        self
    }

    /// Set the miss sentinel
    pub fn with_miss_time(mut self, time: f32) -> Self {
        self.miss_time = time;
        self
    }

    pub fn with_slab_direction_epsilon(mut self, epsilon: f32) -> Self {
        self.slab_direction_epsilon = epsilon;
        self
    }

    pub fn with_slab_overlap_tolerance(mut self, tolerance: f32) -> Self {
        self.slab_overlap_tolerance = tolerance;
        self
    }

    /// Check that every field is finite and non-negative, and that the
    /// slab epsilon is non-zero
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("parallel_epsilon", self.parallel_epsilon),
            ("miss_time", self.miss_time),
            ("slab_direction_epsilon", self.slab_direction_epsilon),
            ("slab_overlap_tolerance", self.slab_overlap_tolerance),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(GeometryError::InvalidTolerance { name, value });
            }
        }
        if self.slab_direction_epsilon == 0.0 {
            return Err(GeometryError::InvalidTolerance {
                name: "slab_direction_epsilon",
                value: 0.0,
            });
        }
        Ok(())
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self::DEFAULT
    }
}

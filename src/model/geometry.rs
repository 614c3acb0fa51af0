//! Geometry payloads for the value model
//!
//! Deliberately small: positions, straight segments, arcs, and circles are
//! all the exchange surface needs. Anything richer belongs to the consuming
//! application, not this crate.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

/// A 3D position or direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vector {
    /// Creates a new vector from its components.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vector { x, y, z }
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Distance to another point.
    #[must_use]
    pub fn distance_to(&self, other: &Vector) -> f64 {
        Vector::new(other.x - self.x, other.y - self.y, other.z - self.z).length()
    }
}

/// A straight segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Start point.
    pub start: Vector,
    /// End point.
    pub end: Vector,
}

impl Line {
    /// Creates a new line between two points.
    #[must_use]
    pub fn new(start: Vector, end: Vector) -> Self {
        Line { start, end }
    }

    /// Segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    /// Midpoint of the segment.
    #[must_use]
    pub fn midpoint(&self) -> Vector {
        Vector::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
            (self.start.z + self.end.z) / 2.0,
        )
    }
}

/// A circular arc in the XY plane, defined by center, radius, start angle
/// and signed sweep (radians).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    /// Center of the underlying circle.
    pub center: Vector,
    /// Radius of the underlying circle.
    pub radius: f64,
    /// Angle of the arc start, measured from the X axis.
    pub start_angle: f64,
    /// Signed angular sweep from the start angle.
    pub sweep: f64,
}

impl Arc {
    /// Creates a new arc.
    #[must_use]
    pub fn new(center: Vector, radius: f64, start_angle: f64, sweep: f64) -> Self {
        Arc { center, radius, start_angle, sweep }
    }

    /// The full-sweep arc covering a circle.
    #[must_use]
    pub fn from_circle(circle: &Circle) -> Self {
        Arc {
            center: circle.center,
            radius: circle.radius,
            start_angle: 0.0,
            sweep: TAU,
        }
    }

    /// Point where the arc starts.
    #[must_use]
    pub fn start_point(&self) -> Vector {
        self.point_at(self.start_angle)
    }

    /// Point where the arc ends.
    #[must_use]
    pub fn end_point(&self) -> Vector {
        self.point_at(self.start_angle + self.sweep)
    }

    /// The straight segment between the arc's endpoints.
    ///
    /// Degenerate (zero length) for a closed arc.
    #[must_use]
    pub fn chord(&self) -> Line {
        Line::new(self.start_point(), self.end_point())
    }

    /// Whether the sweep covers the whole circle.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        (self.sweep.abs() - TAU).abs() < 1e-9
    }

    fn point_at(&self, angle: f64) -> Vector {
        Vector::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
            self.center.z,
        )
    }
}

/// A full circle in the XY plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Center point.
    pub center: Vector,
    /// Radius.
    pub radius: f64,
}

impl Circle {
    /// Creates a new circle.
    #[must_use]
    pub fn new(center: Vector, radius: f64) -> Self {
        Circle { center, radius }
    }

    /// Circumference length.
    #[must_use]
    pub fn circumference(&self) -> f64 {
        TAU * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_line_length_and_midpoint() {
        let line = Line::new(Vector::new(0.0, 0.0, 0.0), Vector::new(3.0, 4.0, 0.0));
        assert!((line.length() - 5.0).abs() < 1e-12);
        assert_eq!(line.midpoint(), Vector::new(1.5, 2.0, 0.0));
    }

    #[test]
    fn test_arc_from_circle_is_closed() {
        let arc = Arc::from_circle(&Circle::new(Vector::new(1.0, 2.0, 3.0), 5.0));
        assert!(arc.is_closed());
        assert_eq!(arc.radius, 5.0);
        assert!(arc.chord().length() < 1e-9);
    }

    #[test]
    fn test_half_arc_chord_is_diameter() {
        let arc = Arc::new(Vector::new(0.0, 0.0, 0.0), 2.0, 0.0, PI);
        let chord = arc.chord();
        assert!((chord.length() - 4.0).abs() < 1e-9);
        assert!((chord.start.x - 2.0).abs() < 1e-9);
        assert!((chord.end.x + 2.0).abs() < 1e-9);
    }
}

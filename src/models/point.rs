use std::ops::{Add, Div, Mul, Sub};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    pub fn from_polar(r: f64, angle: f64) -> Point {
        Point::new(r * angle.cos(), r * angle.sin())
    }

    pub fn zero() -> Point {
        Point::new(0.0, 0.0)
    }

    /// Angle to the positive x-axis; `(0, 0)` maps to 0.
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn dot<Other: HasPoint>(self, other: Other) -> f64 {
        self.x * other.x() + self.y * other.y()
    }

    pub fn rotated(self, angle: f64) -> Point {
        let (sin, cos) = angle.sin_cos();
        Point::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, k: f64) -> Point {
        Point::new(self.x * k, self.y * k)
    }
}

impl Div<f64> for Point {
    type Output = Point;
    fn div(self, k: f64) -> Point {
        Point::new(self.x / k, self.y / k)
    }
}

pub trait HasPoint {
    fn point(&self) -> Point;

    fn x(&self) -> f64 {
        self.point().x
    }

    fn y(&self) -> f64 {
        self.point().y
    }
}

impl HasPoint for Point {
    fn point(&self) -> Point {
        *self
    }
}

impl Point {
    pub fn dist<Other: HasPoint>(self, other: Other) -> f64 {
        (self.x - other.x()).hypot(self.y - other.y())
    }

    pub fn qdist<Other: HasPoint>(self, other: Other) -> f64 {
        (self.x - other.x()).powi(2) + (self.y - other.y()).powi(2)
    }
}

impl<Other: HasPoint> Add<Other> for Point {
    type Output = Point;
    fn add(self, other: Other) -> Point {
        Point::new(self.x + other.x(), self.y + other.y())
    }
}

impl<Other: HasPoint> Sub<Other> for Point {
    type Output = Point;
    fn sub(self, other: Other) -> Point {
        Point::new(self.x - other.x(), self.y - other.y())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn assert_close(a: Point, b: Point) {
        assert!(a.dist(b) < 1e-9, "{:?} != {:?}", a, b);
    }

    #[test]
    fn rotation_round_trips() {
        let p = Point::new(3.0, -4.0);
        assert_close(p.rotated(0.7).rotated(-0.7), p);
        assert_close(Point::new(1.0, 0.0).rotated(PI / 2.0), Point::new(0.0, 1.0));
    }

    #[test]
    fn rotating_by_minus_angle_aligns_with_x_axis() {
        let p = Point::new(-2.0, 2.0);
        let aligned = p.rotated(-p.angle());
        assert_close(aligned, Point::new(p.length(), 0.0));
    }

    #[test]
    fn zero_vector_has_zero_angle() {
        assert_eq!(Point::zero().angle(), 0.0);
    }

    #[test]
    fn distances() {
        let a = Point::new(1.0, 1.0);
        let b = Point::new(4.0, 5.0);
        assert_eq!(a.qdist(b), 25.0);
        assert_eq!(a.dist(b), 5.0);
        assert_eq!((b - a).dot(Point::new(1.0, 0.0)), 3.0);
    }
}

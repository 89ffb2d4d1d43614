//! Minimal 3-D vector maths for the scene (units: millimetres above the
//! tracking device, the same frame the hand tracker reports in).

use std::ops::{Add, Mul, Neg, Sub};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };
    pub const UP:   Vec3 = Vec3 { x: 0.0, y: 1.0, z: 0.0 };
    pub const DOWN: Vec3 = Vec3 { x: 0.0, y: -1.0, z: 0.0 };

    pub const fn new(x: f32, y: f32, z: f32) -> Self { Vec3 { x, y, z } }

    pub fn from_array(a: [f32; 3]) -> Self { Vec3::new(a[0], a[1], a[2]) }

    pub fn dot(self, o: Vec3) -> f32 { self.x * o.x + self.y * o.y + self.z * o.z }

    pub fn cross(self, o: Vec3) -> Vec3 {
        Vec3::new(
            self.y * o.z - self.z * o.y,
            self.z * o.x - self.x * o.z,
            self.x * o.y - self.y * o.x,
        )
    }

    pub fn length(self) -> f32 { self.dot(self).sqrt() }

    /// Unit vector in the same direction; zero stays zero.
    pub fn normalize(self) -> Vec3 {
        let len = self.length();
        if len < 1e-6 { Vec3::ZERO } else { self * (1.0 / len) }
    }

    /// Component-wise absolute value.
    pub fn abs(self) -> Vec3 { Vec3::new(self.x.abs(), self.y.abs(), self.z.abs()) }

    /// Largest component.
    pub fn max_component(self) -> f32 { self.x.max(self.y).max(self.z) }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, o: Vec3) -> Vec3 { Vec3::new(self.x + o.x, self.y + o.y, self.z + o.z) }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, o: Vec3) -> Vec3 { Vec3::new(self.x - o.x, self.y - o.y, self.z - o.z) }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    fn mul(self, k: f32) -> Vec3 { Vec3::new(self.x * k, self.y * k, self.z * k) }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 { Vec3::new(-self.x, -self.y, -self.z) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_of_axes() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::UP;
        assert_eq!(x.cross(y), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn normalize_zero_is_zero() {
        assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
        let n = Vec3::new(3.0, 0.0, 4.0).normalize();
        assert!((n.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn abs_and_max_component() {
        let d = Vec3::new(-80.0, 10.0, -5.0).abs();
        assert_eq!(d, Vec3::new(80.0, 10.0, 5.0));
        assert_eq!(d.max_component(), 80.0);
    }
}

//! Perspective camera shared by the renderer and the mouse picker.
//!
//! Default scene: 45° vertical field of view, eye at
//! (0, 400, 500) looking down at (0, 160, 0), so the cubes float just above
//! the tracker where a hand naturally hovers.

use crate::geometry::Vec3;

/// Nothing nearer than this along the view axis is drawn.
const NEAR: f32 = 1.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye:     Vec3,
    pub target:  Vec3,
    /// Vertical field of view, degrees.
    pub fov_deg: f32,
    /// Viewport size in pixels.
    pub width:   usize,
    pub height:  usize,
}

/// A scene point mapped to the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub x:     f32,
    pub y:     f32,
    /// Distance along the view axis.
    pub depth: f32,
}

impl Camera {
    pub fn new(width: usize, height: usize) -> Self {
        Camera {
            eye:     Vec3::new(0.0, 400.0, 500.0),
            target:  Vec3::new(0.0, 160.0, 0.0),
            fov_deg: 45.0,
            width,
            height,
        }
    }

    fn tan_half(&self) -> f32 { (self.fov_deg.to_radians() * 0.5).tan() }

    fn aspect(&self) -> f32 { self.width as f32 / self.height.max(1) as f32 }

    /// (forward, right, up), all unit length.
    fn basis(&self) -> (Vec3, Vec3, Vec3) {
        let f = (self.target - self.eye).normalize();
        let r = f.cross(Vec3::UP).normalize();
        let u = r.cross(f);
        (f, r, u)
    }

    /// Map a scene point to pixel coordinates, or `None` if it is behind
    /// the camera.
    pub fn project(&self, p: Vec3) -> Option<Projected> {
        let (f, r, u) = self.basis();
        let v = p - self.eye;
        let depth = v.dot(f);
        if depth < NEAR { return None; }

        let th = self.tan_half();
        let ndc_x = v.dot(r) / (depth * th * self.aspect());
        let ndc_y = v.dot(u) / (depth * th);
        Some(Projected {
            x: (ndc_x + 1.0) * 0.5 * self.width as f32,
            y: (1.0 - ndc_y) * 0.5 * self.height as f32,
            depth,
        })
    }

    /// How many pixels one scene unit covers at `depth`.
    pub fn pixels_per_unit(&self, depth: f32) -> f32 {
        (self.height as f32 * 0.5) / (depth.max(NEAR) * self.tan_half())
    }

    /// Unit direction of the ray from the eye through pixel (`px`, `py`).
    pub fn ray_through(&self, px: f32, py: f32) -> Vec3 {
        let (f, r, u) = self.basis();
        let th = self.tan_half();
        let ndc_x = 2.0 * px / self.width as f32 - 1.0;
        let ndc_y = 1.0 - 2.0 * py / self.height as f32;
        (f + r * (ndc_x * th * self.aspect()) + u * (ndc_y * th)).normalize()
    }

    /// Where the ray through pixel (`px`, `py`) crosses the plane `z = plane_z`.
    /// Returns the point and the ray direction.
    pub fn pick_on_plane(&self, px: f32, py: f32, plane_z: f32) -> Option<(Vec3, Vec3)> {
        let dir = self.ray_through(px, py);
        if dir.z.abs() < 1e-6 { return None; }
        let t = (plane_z - self.eye.z) / dir.z;
        if t <= 0.0 { return None; }
        Some((self.eye + dir * t, dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cam() -> Camera { Camera::new(1000, 600) }

    #[test]
    fn target_projects_to_centre() {
        let c = cam();
        let p = c.project(c.target).unwrap();
        assert!((p.x - 500.0).abs() < 0.01);
        assert!((p.y - 300.0).abs() < 0.01);
    }

    #[test]
    fn points_behind_are_culled() {
        let c = cam();
        assert!(c.project(Vec3::new(0.0, 500.0, 900.0)).is_none());
    }

    #[test]
    fn higher_points_appear_higher_on_screen() {
        let c = cam();
        let low  = c.project(Vec3::new(0.0, 100.0, 0.0)).unwrap();
        let high = c.project(Vec3::new(0.0, 250.0, 0.0)).unwrap();
        assert!(high.y < low.y);
        let right = c.project(Vec3::new(100.0, 160.0, 0.0)).unwrap();
        assert!(right.x > 500.0);
    }

    #[test]
    fn pick_inverts_project_on_the_plane() {
        let c = cam();
        for p in [Vec3::new(-150.0, 200.0, 0.0), Vec3::new(75.0, 125.0, 0.0)] {
            let s = c.project(p).unwrap();
            let (hit, dir) = c.pick_on_plane(s.x, s.y, 0.0).unwrap();
            assert!((hit - p).length() < 0.05, "{:?} vs {:?}", hit, p);
            assert!((dir.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn nearer_things_are_bigger() {
        let c = cam();
        assert!(c.pixels_per_unit(300.0) > c.pixels_per_unit(600.0));
    }
}

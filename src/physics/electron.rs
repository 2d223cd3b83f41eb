use glam::DVec2;
use std::f64::consts::TAU;

/// An electron on a circular shell, tracked by its angle around the nucleus.
#[derive(Clone, Debug, PartialEq)]
pub struct Electron {
    shell: u32,
    angle: f64,
    speed: f64,
}

impl Electron {
    /// `speed` is in radians per unit time step.
    pub fn new(shell: u32, angle: f64, speed: f64) -> Self {
        debug_assert!(shell > 0, "Shell number must be >= 1");
        debug_assert!(speed >= 0.0, "Angular speed must be non-negative");
        Self {
            shell,
            angle: normalize_angle(angle),
            speed,
        }
    }

    pub fn shell(&self) -> u32 {
        self.shell
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn step(&mut self, dt: f64) {
        self.angle = normalize_angle(self.angle + self.speed * dt);
    }

    /// Cartesian position on a circle of radius `shell * radius_scale`.
    pub fn position(&self, radius_scale: f64) -> DVec2 {
        let r = f64::from(self.shell) * radius_scale;
        DVec2::new(r * self.angle.cos(), r * self.angle.sin())
    }
}

/// Wraps an angle into [0, 2π).
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

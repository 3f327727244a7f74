// Spring filter used to smooth scroll progress.
//
// Framer-style constants: stiffness and damping are in per-second units
// with unit mass, integrated with semi-implicit Euler once per animation
// frame. The default configuration is overdamped, so the follower lags
// without overshooting.

/// Longest frame we are willing to integrate; a backgrounded tab resuming
/// must not step the spring over one huge dt.
const MAX_FRAME_DT: f64 = 0.05;

/// Displacement/velocity below which the spring snaps to its target.
const SETTLE_EPSILON: f64 = 1e-4;

#[derive(Debug, Clone, Copy)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 30.0,
            mass: 1.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Spring {
    position: f64,
    velocity: f64,
    config: SpringConfig,
}

impl Spring {
    pub fn new(initial: f64, config: SpringConfig) -> Self {
        Self {
            position: initial,
            velocity: 0.0,
            config,
        }
    }

    /// Advance the filter one frame toward `target`. `dt` is in seconds.
    pub fn step(&mut self, target: f64, dt: f64) -> f64 {
        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        let SpringConfig {
            stiffness,
            damping,
            mass,
        } = self.config;
        let accel = ((target - self.position) * stiffness - damping * self.velocity) / mass;
        self.velocity += accel * dt;
        self.position += self.velocity * dt;
        if (target - self.position).abs() < SETTLE_EPSILON && self.velocity.abs() < SETTLE_EPSILON {
            self.position = target;
            self.velocity = 0.0;
        }
        self.position
    }

    pub fn value(&self) -> f64 {
        self.position
    }

    /// True once the spring has snapped onto `target` and stopped moving.
    pub fn is_settled_at(&self, target: f64) -> bool {
        self.velocity == 0.0 && self.position == target
    }
}

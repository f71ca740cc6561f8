const SUBSTEP_SECONDS: f64 = 1.0 / 240.0;
const DEFAULT_REST_DELTA: f64 = 0.01;
const DEFAULT_REST_SPEED: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    pub rest_delta: f64,
    pub rest_speed: f64,
}

impl SpringConfig {
    pub const TILT: Self = Self::new(150.0, 20.0);
    pub const GLOW: Self = Self::new(100.0, 15.0).with_rest(0.001, 0.005);

    pub const fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
            rest_delta: DEFAULT_REST_DELTA,
            rest_speed: DEFAULT_REST_SPEED,
        }
    }

    pub const fn with_rest(mut self, rest_delta: f64, rest_speed: f64) -> Self {
        self.rest_delta = rest_delta;
        self.rest_speed = rest_speed;
        self
    }

    /// Whether a substep of the integrator decays instead of blowing up.
    /// With `c = damping * h / mass` and `k = stiffness * h² / mass` that
    /// needs `c < 2` and `k < 4 - 2c`.
    pub fn is_stable(&self) -> bool {
        let finite = [self.stiffness, self.damping, self.mass]
            .iter()
            .all(|value| value.is_finite());
        if !finite || self.mass <= 0.0 || self.stiffness <= 0.0 || self.damping < 0.0 {
            return false;
        }

        let c = self.damping * SUBSTEP_SECONDS / self.mass;
        let k = self.stiffness * SUBSTEP_SECONDS * SUBSTEP_SECONDS / self.mass;
        c < 2.0 && k < 4.0 - 2.0 * c
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::TILT
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn set_target(&mut self, target: f64) {
        if target.is_finite() {
            self.target = target;
        }
    }

    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < self.config.rest_delta
            && self.velocity.abs() < self.config.rest_speed
    }

    /// Advances the spring by `dt` seconds. Returns `true` once settled, at
    /// which point the value sits exactly on the target. A diverged value
    /// also snaps and counts as settled.
    pub fn step(&mut self, dt: f64) -> bool {
        if self.is_settled() {
            self.snap();
            return true;
        }

        let mass = self.config.mass.max(f64::EPSILON);
        let mut remaining = dt.max(0.0);

        while remaining > 0.0 {
            let h = remaining.min(SUBSTEP_SECONDS);
            let spring_force = -self.config.stiffness * (self.value - self.target);
            let damping_force = -self.config.damping * self.velocity;

            self.velocity += (spring_force + damping_force) / mass * h;
            self.value += self.velocity * h;
            remaining -= h;
        }

        if !self.value.is_finite() || !self.velocity.is_finite() || self.is_settled() {
            self.snap();
            true
        } else {
            false
        }
    }

    fn snap(&mut self) {
        self.value = self.target;
        self.velocity = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_until_settled(spring: &mut Spring, dt: f64, max_steps: usize) -> Option<usize> {
        (1..=max_steps).find(|_| spring.step(dt))
    }

    #[test]
    fn fresh_spring_is_settled() {
        let mut spring = Spring::new(SpringConfig::TILT, 3.0);

        assert!(spring.is_settled());
        assert!(spring.step(1.0 / 60.0));
        assert_eq!(spring.value(), 3.0);
    }

    #[test]
    fn tilt_spring_converges_within_two_seconds() {
        let mut spring = Spring::new(SpringConfig::TILT, 0.0);
        spring.set_target(25.0);

        let steps = run_until_settled(&mut spring, 1.0 / 60.0, 120).expect("spring should settle");

        assert!(steps > 1);
        assert_eq!(spring.value(), 25.0);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[test]
    fn spring_moves_toward_target_without_snapping() {
        let mut spring = Spring::new(SpringConfig::GLOW, 1.0);
        spring.set_target(1.1);
        spring.step(1.0 / 60.0);

        assert!(spring.value() > 1.0);
        assert!(spring.value() < 1.1);
    }

    #[test]
    fn large_frame_gap_stays_stable() {
        let mut spring = Spring::new(SpringConfig::TILT, 0.0);
        spring.set_target(-10.0);
        spring.step(0.5);

        assert!(spring.value().is_finite());
        assert!(spring.value() < 0.0);
        assert!(spring.value() > -12.0);
    }

    #[test]
    fn presets_are_stable() {
        assert!(SpringConfig::TILT.is_stable());
        assert!(SpringConfig::GLOW.is_stable());
    }

    #[test]
    fn heavy_damping_on_light_mass_is_unstable() {
        let config = SpringConfig {
            damping: 200.0,
            mass: 0.1,
            ..SpringConfig::TILT
        };

        assert!(!config.is_stable());
        assert!(!SpringConfig { mass: 0.0, ..SpringConfig::TILT }.is_stable());
        assert!(!SpringConfig { stiffness: f64::NAN, ..SpringConfig::TILT }.is_stable());
    }

    #[test]
    fn diverging_spring_snaps_to_target() {
        let config = SpringConfig {
            damping: 200.0,
            mass: 0.1,
            ..SpringConfig::TILT
        };
        let mut spring = Spring::new(config, 0.0);
        spring.set_target(10.0);

        run_until_settled(&mut spring, 1.0 / 60.0, 600).expect("diverged spring should snap");

        assert_eq!(spring.value(), 10.0);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[test]
    fn stable_configs_across_the_range_settle() {
        let mut checked = 0;
        for stiffness in [1.0, 150.0, 1_000.0] {
            for damping in [0.5, 20.0, 200.0] {
                for mass in [0.1, 1.0, 20.0] {
                    let config = SpringConfig::new(stiffness, damping);
                    let config = SpringConfig { mass, ..config };
                    if !config.is_stable() {
                        continue;
                    }
                    checked += 1;

                    let mut spring = Spring::new(config, 0.0);
                    spring.set_target(25.0);
                    let settled = run_until_settled(&mut spring, 1.0, 10_000);

                    assert!(
                        settled.is_some(),
                        "stiffness {stiffness} damping {damping} mass {mass} did not settle"
                    );
                    assert_eq!(spring.value(), 25.0);
                }
            }
        }

        assert!(checked > 20);
    }

    #[test]
    fn non_finite_target_is_ignored() {
        let mut spring = Spring::new(SpringConfig::TILT, 2.0);
        spring.set_target(f64::NAN);

        assert_eq!(spring.target(), 2.0);
    }
}

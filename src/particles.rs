pub const DEFAULT_PARTICLE_COUNT: usize = 80;
pub const DEFAULT_LINK_DISTANCE: f64 = 120.0;
pub const LINK_LINE_WIDTH: f64 = 0.5;
const MIN_RADIUS: f64 = 1.0;
const RADIUS_SPREAD: f64 = 2.0;
const MAX_SPEED: f64 = 0.25;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ParticleColor {
    Indigo,
    Pink,
}

impl ParticleColor {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Indigo => "rgba(99, 102, 241, 0.5)",
            Self::Pink => "rgba(236, 72, 153, 0.5)",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub color: ParticleColor,
}

impl Particle {
    fn random(rng: &mut fastrand::Rng, width: f64, height: f64) -> Self {
        Self {
            x: rng.f64() * width,
            y: rng.f64() * height,
            vx: rng.f64() * MAX_SPEED * 2.0 - MAX_SPEED,
            vy: rng.f64() * MAX_SPEED * 2.0 - MAX_SPEED,
            radius: rng.f64() * RADIUS_SPREAD + MIN_RADIUS,
            color: if rng.bool() {
                ParticleColor::Indigo
            } else {
                ParticleColor::Pink
            },
        }
    }

    fn step(&mut self, width: f64, height: f64) {
        self.x += self.vx;
        self.y += self.vy;
        reflect_axis(&mut self.x, &mut self.vx, width);
        reflect_axis(&mut self.y, &mut self.vy, height);
    }
}

fn reflect_axis(position: &mut f64, velocity: &mut f64, extent: f64) {
    let extent = extent.max(0.0);

    if *position < 0.0 {
        *position = -*position;
        *velocity = velocity.abs();
    } else if *position > extent {
        *position = 2.0 * extent - *position;
        *velocity = -velocity.abs();
    } else {
        return;
    }

    // A particle left far outside by a shrink lands back inside in one step.
    *position = position.clamp(0.0, extent);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: usize,
    pub to: usize,
    pub opacity: f64,
}

impl Link {
    pub fn stroke_style(&self) -> String {
        format!("rgba(99, 102, 241, {})", self.opacity)
    }
}

pub fn link_opacity(distance: f64, link_distance: f64) -> Option<f64> {
    if distance < link_distance {
        Some(1.0 - distance / link_distance)
    } else {
        None
    }
}

pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
    link_distance: f64,
}

impl ParticleField {
    pub fn new(width: f64, height: f64, count: usize, rng: &mut fastrand::Rng) -> Self {
        let particles = (0..count)
            .map(|_| Particle::random(rng, width, height))
            .collect();

        Self::from_particles(width, height, particles)
    }

    pub fn with_link_distance(mut self, link_distance: f64) -> Self {
        self.link_distance = link_distance;
        self
    }

    pub fn from_particles(width: f64, height: f64, particles: Vec<Particle>) -> Self {
        Self {
            particles,
            width,
            height,
            link_distance: DEFAULT_LINK_DISTANCE,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Updates the bounds only; particles are picked up by the next `step`.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.step(width, height);
        }
    }

    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();

        for (from, a) in self.particles.iter().enumerate() {
            for (offset, b) in self.particles[from + 1..].iter().enumerate() {
                let distance = (a.x - b.x).hypot(a.y - b.y);
                if let Some(opacity) = link_opacity(distance, self.link_distance) {
                    links.push(Link {
                        from,
                        to: from + 1 + offset,
                        opacity,
                    });
                }
            }
        }

        links
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle_at(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
        Particle {
            x,
            y,
            vx,
            vy,
            radius: 1.5,
            color: ParticleColor::Indigo,
        }
    }

    fn assert_in_bounds(field: &ParticleField) {
        let (width, height) = field.size();
        for particle in field.particles() {
            assert!(
                (0.0..=width).contains(&particle.x) && (0.0..=height).contains(&particle.y),
                "particle escaped bounds: ({}, {})",
                particle.x,
                particle.y
            );
        }
    }

    #[test]
    fn new_field_respects_count_and_ranges() {
        let mut rng = fastrand::Rng::with_seed(7);
        let field = ParticleField::new(800.0, 600.0, DEFAULT_PARTICLE_COUNT, &mut rng);

        assert_eq!(field.particles().len(), 80);
        assert_in_bounds(&field);
        for particle in field.particles() {
            assert!((1.0..3.0).contains(&particle.radius));
            assert!((-0.25..0.25).contains(&particle.vx));
            assert!((-0.25..0.25).contains(&particle.vy));
        }
    }

    #[test]
    fn particles_stay_in_bounds_over_many_steps() {
        let mut rng = fastrand::Rng::with_seed(2024);
        let mut field = ParticleField::new(320.0, 240.0, 40, &mut rng);

        for _ in 0..10_000 {
            field.step();
            assert_in_bounds(&field);
        }
    }

    #[test]
    fn crossing_an_edge_flips_the_velocity_component() {
        let mut field =
            ParticleField::from_particles(100.0, 100.0, vec![particle_at(99.9, 0.1, 0.2, -0.2)]);

        field.step();

        let particle = &field.particles()[0];
        assert!(particle.vx < 0.0);
        assert!(particle.vy > 0.0);
        assert!((particle.x - 99.9).abs() < 1e-9);
        assert!((particle.y - 0.1).abs() < 1e-9);
    }

    #[test]
    fn resize_keeps_positions_until_next_step() {
        let mut field =
            ParticleField::from_particles(500.0, 500.0, vec![particle_at(400.0, 50.0, 0.1, 0.0)]);

        field.resize(200.0, 500.0);
        assert_eq!(field.particles()[0].x, 400.0);

        field.step();
        assert_in_bounds(&field);
        assert!(field.particles()[0].vx < 0.0);
    }

    #[test]
    fn links_only_below_threshold() {
        let field = ParticleField::from_particles(
            1_000.0,
            1_000.0,
            vec![
                particle_at(0.0, 0.0, 0.0, 0.0),
                particle_at(119.0, 0.0, 0.0, 0.0),
                particle_at(0.0, 120.0, 0.0, 0.0),
            ],
        );

        let links = field.links();
        assert_eq!(links.len(), 1);
        assert_eq!((links[0].from, links[0].to), (0, 1));
        assert!((links[0].opacity - (1.0 - 119.0 / 120.0)).abs() < 1e-12);
    }

    #[test]
    fn each_pair_is_considered_once() {
        let field = ParticleField::from_particles(
            100.0,
            100.0,
            vec![
                particle_at(10.0, 10.0, 0.0, 0.0),
                particle_at(20.0, 10.0, 0.0, 0.0),
                particle_at(30.0, 10.0, 0.0, 0.0),
            ],
        );

        let pairs: Vec<_> = field.links().iter().map(|link| (link.from, link.to)).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn link_opacity_decreases_with_distance() {
        let mut previous = f64::INFINITY;
        for step in 0..120 {
            let opacity = link_opacity(f64::from(step), DEFAULT_LINK_DISTANCE)
                .expect("distance below threshold should link");
            assert!(opacity < previous);
            assert!((0.0..=1.0).contains(&opacity));
            previous = opacity;
        }

        assert_eq!(link_opacity(120.0, DEFAULT_LINK_DISTANCE), None);
        assert_eq!(link_opacity(0.0, DEFAULT_LINK_DISTANCE), Some(1.0));
    }

    #[test]
    fn stroke_style_uses_indigo_with_opacity() {
        let link = Link {
            from: 0,
            to: 1,
            opacity: 0.5,
        };

        assert_eq!(link.stroke_style(), "rgba(99, 102, 241, 0.5)");
    }
}

use rand::Rng;

pub const PARTICLE_COUNT: usize = 600;

// world units; see ParticleField::project for the pixel conversion
pub const PARTICLE_SIZE: f32 = 0.02;

// half-width of the cube the particles live in
pub const BOUND: f32 = 5.0;

// per-axis velocity range is [-MAX_SPEED, MAX_SPEED)
pub const MAX_SPEED: f32 = 0.002;

// applied to a coordinate that leaves the cube
pub const REFLECT: f32 = -0.9;

// radians per frame
pub const SPIN_X: f32 = 0.0003;
pub const SPIN_Y: f32 = 0.0005;

const CAMERA_Z: f32 = 5.0;
const CAMERA_NEAR: f32 = 0.1;
const CAMERA_FOV_DEG: f32 = 75.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: [f32; 3],
    pub velocity: [f32; 3],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

// a particle in canvas pixels, ready to draw
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedPoint {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

// ParticleField
//
// the decorative point cloud behind the page.  the simulation is deliberately
// dumb: straight-line motion, and a coordinate that leaves the cube is flipped
// to the other side and pulled in a little.  the whole cloud also spins slowly
// about the x and y axes, which is applied at projection time.
#[derive(Clone, Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    rotation: [f32; 2],
}

impl ParticleField {
    pub fn new<R: Rng>(count: usize, rng: &mut R) -> Self {
        let particles = (0..count)
            .map(|_| Particle {
                position: std::array::from_fn(|_| rng.random_range(-BOUND..BOUND)),
                velocity: std::array::from_fn(|_| rng.random_range(-MAX_SPEED..MAX_SPEED)),
            })
            .collect();

        ParticleField {
            particles,
            rotation: [0.0, 0.0],
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn step(&mut self) {
        for particle in &mut self.particles {
            for axis in 0..3 {
                particle.position[axis] += particle.velocity[axis];

                if particle.position[axis].abs() > BOUND {
                    particle.position[axis] *= REFLECT;
                }
            }
        }

        self.rotation[0] += SPIN_X;
        self.rotation[1] += SPIN_Y;
    }

    // perspective projection onto the viewport, matching a camera sitting on the
    // +z axis looking at the origin.  points behind the near plane or outside
    // the frustum are skipped
    pub fn project(&self, viewport: Viewport) -> impl Iterator<Item = ProjectedPoint> + '_ {
        let (sin_x, cos_x) = self.rotation[0].sin_cos();
        let (sin_y, cos_y) = self.rotation[1].sin_cos();

        let focal = 1.0 / (CAMERA_FOV_DEG.to_radians() / 2.0).tan();
        let aspect = if viewport.height > 0.0 {
            viewport.width / viewport.height
        } else {
            1.0
        };

        self.particles.iter().filter_map(move |particle| {
            let [x, y, z] = particle.position;

            // rotate about y, then about x
            let x1 = x * cos_y + z * sin_y;
            let z1 = -x * sin_y + z * cos_y;
            let y2 = y * cos_x - z1 * sin_x;
            let z2 = y * sin_x + z1 * cos_x;

            let depth = CAMERA_Z - z2;
            if depth <= CAMERA_NEAR {
                return None;
            }

            let ndc_x = x1 * focal / (aspect * depth);
            let ndc_y = y2 * focal / depth;
            if ndc_x.abs() > 1.0 || ndc_y.abs() > 1.0 {
                return None;
            }

            Some(ProjectedPoint {
                x: (ndc_x + 1.0) / 2.0 * viewport.width,
                y: (1.0 - ndc_y) / 2.0 * viewport.height,
                radius: PARTICLE_SIZE * viewport.height / 2.0 * focal / depth / 2.0,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::SmallRng};

    use super::*;

    fn field(count: usize) -> ParticleField {
        ParticleField::new(count, &mut SmallRng::seed_from_u64(7))
    }

    #[test]
    fn initial_state_is_within_ranges() {
        let field = field(PARTICLE_COUNT);

        assert_eq!(field.len(), PARTICLE_COUNT);
        for particle in &field.particles {
            assert!(particle.position.iter().all(|p| p.abs() <= BOUND));
            assert!(particle.velocity.iter().all(|v| v.abs() <= MAX_SPEED));
        }
    }

    #[test]
    fn particles_stay_in_the_cube() {
        let mut field = field(200);

        for _ in 0..20_000 {
            field.step();
        }

        for particle in &field.particles {
            assert!(particle.position.iter().all(|c| c.abs() <= BOUND));
        }
    }

    #[test]
    fn step_moves_by_velocity() {
        let mut field = ParticleField {
            particles: vec![Particle {
                position: [1.0, -2.0, 0.5],
                velocity: [0.001, 0.002, -0.001],
            }],
            rotation: [0.0, 0.0],
        };

        field.step();

        let p = field.particles[0].position;
        assert!((p[0] - 1.001).abs() < 1e-6);
        assert!((p[1] + 1.998).abs() < 1e-6);
        assert!((p[2] - 0.499).abs() < 1e-6);
        assert_eq!(field.rotation, [SPIN_X, SPIN_Y]);
    }

    #[test]
    fn crossing_the_bound_reflects_and_damps() {
        let mut field = ParticleField {
            particles: vec![Particle {
                position: [4.9995, 0.0, -4.9995],
                velocity: [0.001, 0.0, -0.001],
            }],
            rotation: [0.0, 0.0],
        };

        field.step();

        let p = field.particles[0].position;
        assert!((p[0] + 5.0005 * 0.9).abs() < 1e-4);
        assert!((p[2] - 5.0005 * 0.9).abs() < 1e-4);
        assert_eq!(field.particles[0].velocity, [0.001, 0.0, -0.001]);
    }

    #[test]
    fn origin_projects_to_viewport_centre() {
        let field = ParticleField {
            particles: vec![Particle {
                position: [0.0, 0.0, 0.0],
                velocity: [0.0; 3],
            }],
            rotation: [0.0, 0.0],
        };
        let viewport = Viewport {
            width: 1600.0,
            height: 900.0,
        };

        let points: Vec<_> = field.project(viewport).collect();
        assert_eq!(points.len(), 1);
        assert!((points[0].x - 800.0).abs() < 1e-3);
        assert!((points[0].y - 450.0).abs() < 1e-3);
        assert!(points[0].radius > 0.0);
    }

    #[test]
    fn points_behind_the_camera_are_skipped() {
        let field = ParticleField {
            particles: vec![
                Particle {
                    position: [0.0, 0.0, 4.95],
                    velocity: [0.0; 3],
                },
                Particle {
                    position: [0.0, 4.9, 0.0],
                    velocity: [0.0; 3],
                },
            ],
            rotation: [0.0, 0.0],
        };
        let viewport = Viewport {
            width: 800.0,
            height: 800.0,
        };

        // the first is inside the near plane, the second is above the frustum
        assert_eq!(field.project(viewport).count(), 0);
    }

    #[test]
    fn projected_points_are_on_screen() {
        let viewport = Viewport {
            width: 1280.0,
            height: 720.0,
        };
        let field = field(PARTICLE_COUNT);

        let points: Vec<_> = field.project(viewport).collect();
        assert!(!points.is_empty());
        for point in points {
            assert!((0.0..=viewport.width).contains(&point.x));
            assert!((0.0..=viewport.height).contains(&point.y));
        }
    }
}

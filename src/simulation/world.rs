use rand::{self, Rng, SeedableRng, XorShiftRng};

use crate::config::Config;
use crate::error::Result;
use crate::input::{FrameInput, InputEvent};
use crate::models::*;
use crate::simulation::collision::resolve_all_pairs;
use crate::simulation::controller::{self, Interaction};
use crate::simulation::integrator::integrate;

// Bodies are never removed: memory and the all-pairs cost grow with every spawn.
pub struct World {
    pub(super) config: Config,
    pub(super) bodies: Bodies,
    pub(super) pointer: Point,
    pub(super) held: Option<BodyId>,
    time: f64,
    frame: u64,
    rng: XorShiftRng,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputOutcome {
    pub interactions: Vec<Interaction>,
    pub quit: bool,
}

impl World {
    pub fn new(config: Config) -> Result<World> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => XorShiftRng::from_seed(seed_words(seed)),
            None => rand::weak_rng(),
        };
        let center = config.center();
        let mut world = World {
            config,
            bodies: Bodies::new(),
            pointer: center,
            held: None,
            time: 0.0,
            frame: 0,
            rng,
        };
        world.spawn(center);
        Ok(world)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn bodies(&self) -> &Bodies {
        &self.bodies
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id)
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.get_mut(id)
    }

    pub fn held(&self) -> Option<BodyId> {
        self.held
    }

    pub fn pointer(&self) -> Point {
        self.pointer
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn spawn(&mut self, point: Point) -> BodyId {
        let r = self.random_radius();
        let id = self.bodies.insert(|id| Body::new(id, point, r));
        debug!("spawned {:?} at ({:.1}, {:.1}) r={:.2}", id, point.x, point.y, r);
        id
    }

    /// The frame's pointer position is applied before the events, which run
    /// in order up to the first `Quit`. The held body is pinned last.
    pub fn apply_input(&mut self, input: &FrameInput, dt: f64) -> InputOutcome {
        let mut outcome = InputOutcome::default();
        if let Some(pointer) = input.pointer() {
            controller::pointer_moved(self, pointer);
        }
        for event in input.events() {
            let interaction = match *event {
                InputEvent::Quit => {
                    outcome.quit = true;
                    break;
                }
                InputEvent::PointerDown(point) => controller::pointer_down(self, point),
                InputEvent::PointerUp(point) => controller::pointer_up(self, point, dt),
                InputEvent::PointerMoved(point) => {
                    controller::pointer_moved(self, point);
                    continue;
                }
                InputEvent::SpawnKey => controller::spawn_key(self),
            };
            outcome.interactions.push(interaction);
        }
        if !outcome.quit {
            controller::drag_held(self);
        }
        outcome
    }

    /// A negative or non-finite `dt` counts as 0.
    pub fn step(&mut self, dt: f64) {
        let dt = sanitize_dt(dt);
        self.integrate_free(dt);
        let collisions = self.resolve_collisions();
        self.time += dt;
        self.frame += 1;
        debug!(
            "frame {}: dt={:.4} bodies={} collisions={}",
            self.frame,
            dt,
            self.bodies.len(),
            collisions
        );
    }

    pub fn frame(&mut self, input: &FrameInput, dt: f64) -> InputOutcome {
        let dt = sanitize_dt(dt);
        let outcome = self.apply_input(input, dt);
        if !outcome.quit {
            self.step(dt);
        }
        outcome
    }

    pub fn integrate_free(&mut self, dt: f64) {
        let dt = sanitize_dt(dt);
        for body in self.bodies.iter_mut() {
            integrate(body, dt, &self.config);
        }
    }

    pub fn resolve_collisions(&mut self) -> usize {
        let mut collisions = 0;
        for _ in 0..self.config.resolution_passes {
            collisions += resolve_all_pairs(&mut self.bodies, self.config.separation_epsilon);
        }
        collisions
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(|body| body.kinetic_energy()).sum()
    }

    pub fn momentum(&self) -> Point {
        self.bodies
            .iter()
            .fold(Point::zero(), |sum, body| sum + body.momentum())
    }

    fn random_radius(&mut self) -> f64 {
        let (min_r, max_r) = (self.config.min_radius, self.config.max_radius);
        if min_r < max_r {
            self.rng.gen_range(min_r, max_r)
        } else {
            min_r
        }
    }
}

fn sanitize_dt(dt: f64) -> f64 {
    if dt.is_finite() && dt >= 0.0 {
        dt
    } else {
        warn!("invalid dt {}, using 0", dt);
        0.0
    }
}

fn seed_words(seed: u64) -> [u32; 4] {
    [
        seed as u32,
        (seed >> 32) as u32,
        0x9E37_79B9,
        0x7F4A_7C15,
    ]
}

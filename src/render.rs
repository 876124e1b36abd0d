use std::io::Write;

use crate::error::Result;
use crate::models::*;
use crate::simulation::World;

const GRADIENT_STEPS: usize = 256;

lazy_static! {
    /// Green at rest through yellow to red at full speed.
    static ref GRADIENT: Vec<Rgb> = (0..GRADIENT_STEPS)
        .map(|i| {
            let t = i as f64 / (GRADIENT_STEPS - 1) as f64;
            let red = (255.0 * (2.0 * t).min(1.0)).round() as u8;
            let green = (255.0 * (2.0 * (1.0 - t)).min(1.0)).round() as u8;
            Rgb(red, green, 0)
        })
        .collect();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

pub fn speed_color(speed: f64, max_speed: f64) -> Rgb {
    let t = if speed.is_finite() && max_speed > 0.0 {
        (speed / max_speed).max(0.0).min(1.0)
    } else {
        1.0
    };
    GRADIENT[(t * (GRADIENT_STEPS - 1) as f64).round() as usize]
}

pub trait Renderer {
    fn render(&mut self, world: &World) -> Result<()>;
}

pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> JsonRenderer<W> {
        JsonRenderer { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn render(&mut self, world: &World) -> Result<()> {
        let max_speed = world.config().max_speed;
        let frame = FrameView {
            frame: world.frame_count(),
            time: world.time(),
            bodies: world
                .bodies()
                .iter()
                .map(|body| BodyView {
                    id: body.id().0,
                    x: body.x(),
                    y: body.y(),
                    r: body.r(),
                    vx: body.v().x,
                    vy: body.v().y,
                    held: body.held(),
                    color: speed_color(body.speed(), max_speed).to_hex(),
                })
                .collect(),
        };
        serde_json::to_writer(&mut self.out, &frame)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct FrameView {
    frame: u64,
    time: f64,
    bodies: Vec<BodyView>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct BodyView {
    id: u32,
    x: f64,
    y: f64,
    r: f64,
    vx: f64,
    vy: f64,
    held: bool,
    color: String,
}

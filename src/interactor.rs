use std::io::{self, BufRead, Write};

use serde_json::Value;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::input::{FrameInput, InputEvent};
use crate::models::Point;
use crate::render::{JsonRenderer, Renderer};
use crate::simulation::{Clock, DeltaTimer, FramePacer, SystemClock, World};

pub trait InputSource {
    fn next_frame(&mut self) -> Result<Option<FrameInput>>;
}

pub struct JsonInput<R: BufRead> {
    reader: R,
    line: String,
}

impl<R: BufRead> JsonInput<R> {
    pub fn new(reader: R) -> JsonInput<R> {
        JsonInput {
            reader,
            line: String::new(),
        }
    }

    pub fn read_config(&mut self) -> Result<Config> {
        match self.read_json()? {
            Some(json) => Config::from_json(&json),
            None => Err(Error::Protocol("expected a config line, got EOF".into())),
        }
    }

    fn read_json(&mut self) -> Result<Option<Value>> {
        loop {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            if !self.line.trim().is_empty() {
                return Ok(Some(serde_json::from_str(&self.line)?));
            }
        }
    }
}

impl<R: BufRead> InputSource for JsonInput<R> {
    fn next_frame(&mut self) -> Result<Option<FrameInput>> {
        let json = match self.read_json()? {
            Some(json) => json,
            None => return Ok(None),
        };
        let data: FrameData = serde_json::from_value(json)?;
        let mut input = FrameInput::new();
        input.set_timestamp(data.t);
        input.set_pointer(data.pointer.map(|xy| Point::new(xy.x, xy.y)));
        for event in data.events {
            input.add_event(parse_event(event)?);
        }
        Ok(Some(input))
    }
}

pub fn run() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = JsonInput::new(stdin.lock());
    let config = input.read_config()?;
    let mut renderer = JsonRenderer::new(stdout.lock());
    drive(config, &mut input, &mut renderer, &SystemClock)?;
    Ok(())
}

pub fn drive<I, R, C>(config: Config, input: &mut I, renderer: &mut R, clock: &C) -> Result<u64>
where
    I: InputSource,
    R: Renderer,
    C: Clock,
{
    let mut pacer = FramePacer::new(config.frame_duration());
    let mut timer = DeltaTimer::new();
    let mut world = World::new(config)?;
    let mut was_live = None;
    info!("started with {:?}", world.config());

    while let Some(frame) = input.next_frame()? {
        let live = frame.timestamp().is_none();
        if was_live.map_or(false, |prev| prev != live) {
            // Caller timestamps and the system clock share no epoch.
            warn!("frame {}: switched timestamp source, dt restarts at 0", world.frame_count() + 1);
            timer = DeltaTimer::new();
        }
        was_live = Some(live);
        let now = frame.timestamp().unwrap_or_else(|| clock.now());
        let dt = timer.tick(now);
        if world.frame(&frame, dt).quit {
            info!("quit requested");
            break;
        }
        renderer.render(&world)?;
        if live {
            pacer.wait(clock);
        }
    }

    info!(
        "stopped after {} frames, {} bodies",
        world.frame_count(),
        world.bodies().len()
    );
    Ok(world.frame_count())
}

pub fn run_with<R: BufRead, W: Write>(reader: R, writer: W) -> Result<u64> {
    let mut input = JsonInput::new(reader);
    let config = input.read_config()?;
    let mut renderer = JsonRenderer::new(writer);
    drive(config, &mut input, &mut renderer, &SystemClock)
}

fn parse_event(data: EventData) -> Result<InputEvent> {
    let point = || match (data.x, data.y) {
        (Some(x), Some(y)) => Ok(Point::new(x, y)),
        _ => Err(Error::Protocol(format!("{} event has no coordinates", data.kind))),
    };
    match data.kind.as_str() {
        "PointerDown" => Ok(InputEvent::PointerDown(point()?)),
        "PointerUp" => Ok(InputEvent::PointerUp(point()?)),
        "PointerMoved" => Ok(InputEvent::PointerMoved(point()?)),
        "SpawnKey" => Ok(InputEvent::SpawnKey),
        "Quit" => Ok(InputEvent::Quit),
        other => Err(Error::Protocol(format!("unknown event type {:?}", other))),
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct FrameData {
    t: Option<f64>,
    pointer: Option<XY>,
    #[serde(default)]
    events: Vec<EventData>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct XY {
    x: f64,
    y: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct EventData {
    #[serde(rename = "Type")]
    kind: String,
    x: Option<f64>,
    y: Option<f64>,
}

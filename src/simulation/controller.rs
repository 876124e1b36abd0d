//! At most one body is held at a time. On release it gets the velocity of
//! the last drag segment, `(pointer - anchor) / dt`; with `dt == 0` it is
//! released at rest.

use crate::models::*;
use crate::simulation::World;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Interaction {
    Spawned(BodyId),
    Grabbed(BodyId),
    Released { id: BodyId, v: Point },
    Ignored,
}

pub fn pointer_down(world: &mut World, pointer: Point) -> Interaction {
    world.pointer = pointer;
    if let Some(id) = world.held {
        warn!("pointer down at {:?} while {:?} is held, ignoring", pointer, id);
        return Interaction::Ignored;
    }

    let id = match world.bodies.hit_test(pointer) {
        Some(id) => id,
        None => return Interaction::Spawned(world.spawn(pointer)),
    };
    match world.bodies.get_mut(id) {
        Some(body) => body.grab(pointer),
        None => return Interaction::Ignored,
    }
    world.held = Some(id);
    debug!("grabbed {:?} at ({:.1}, {:.1})", id, pointer.x, pointer.y);
    Interaction::Grabbed(id)
}

pub fn pointer_moved(world: &mut World, pointer: Point) {
    world.pointer = pointer;
}

pub fn pointer_up(world: &mut World, pointer: Point, dt: f64) -> Interaction {
    world.pointer = pointer;
    let id = match world.held.take() {
        Some(id) => id,
        None => return Interaction::Ignored,
    };
    let body = match world.bodies.get_mut(id) {
        Some(body) => body,
        None => return Interaction::Ignored,
    };

    let v = if dt > 0.0 {
        (pointer - body.anchor()) / dt
    } else {
        Point::zero()
    };
    body.set_v(v);
    body.set_point(pointer);
    body.release();
    debug!("released {:?} with v=({:.1}, {:.1})", id, v.x, v.y);
    Interaction::Released { id, v }
}

pub fn spawn_key(world: &mut World) -> Interaction {
    let pointer = world.pointer;
    Interaction::Spawned(world.spawn(pointer))
}

pub fn drag_held(world: &mut World) {
    let pointer = world.pointer;
    let id = match world.held {
        Some(id) => id,
        None => return,
    };
    if let Some(body) = world.bodies.get_mut(id) {
        body.set_point(pointer);
        body.set_anchor(pointer);
        body.set_v(Point::zero());
    }
}

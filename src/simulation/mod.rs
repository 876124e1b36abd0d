pub use self::controller::Interaction;
pub use self::timing::{Clock, DeltaTimer, FramePacer, ManualClock, SystemClock};
pub use self::world::{InputOutcome, World};

pub mod collision;
pub mod controller;
pub mod integrator;
pub mod timing;
mod world;

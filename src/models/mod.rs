pub use self::bodies::{Bodies, BodyId};
pub use self::body::{radius_to_mass, Body};
pub use self::point::{HasPoint, Point};

mod bodies;
mod body;
mod point;

pub type Mass = f64;

pub trait Circle: HasPoint {
    fn r(&self) -> f64;
}

use crate::models::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    id: BodyId,
    point: Point,
    v: Point,
    r: f64,
    m: f64,
    held: bool,
    anchor: Point,
}

impl HasPoint for Body {
    fn point(&self) -> Point {
        self.point
    }
}

impl Circle for Body {
    fn r(&self) -> f64 {
        self.r
    }
}

impl Body {
    pub fn new(id: BodyId, point: Point, r: f64) -> Body {
        debug_assert!(r > 0.0, "radius must be > 0");
        Body {
            id,
            point,
            v: Point::zero(),
            r,
            m: radius_to_mass(r),
            held: false,
            anchor: point,
        }
    }

    impl_getter!(id() -> BodyId);
    impl_getter!(v() -> Point);
    impl_getter!(held() -> bool);
    impl_getter!(anchor() -> Point);

    impl_setter!(set_point(point: Point));
    impl_setter!(set_v(v: Point));
    impl_setter!(set_anchor(anchor: Point));

    pub fn m(&self) -> Mass {
        self.m
    }

    pub fn speed(&self) -> f64 {
        self.v.length()
    }

    pub fn momentum(&self) -> Point {
        self.v * self.m
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.dot(self.v)
    }

    /// Whether `point` lies inside the disk, boundary included.
    pub fn contains<P: HasPoint>(&self, point: P) -> bool {
        self.point.qdist(point) <= self.r.powi(2)
    }

    pub fn grab(&mut self, pointer: Point) {
        self.held = true;
        self.point = pointer;
        self.anchor = pointer;
        self.v = Point::zero();
    }

    pub fn release(&mut self) {
        self.held = false;
    }
}

pub fn radius_to_mass(r: f64) -> Mass {
    r * r
}

use crate::config::Config;
use crate::models::*;

pub fn integrate(body: &mut Body, dt: f64, config: &Config) {
    if body.held() {
        return;
    }

    let mut v = body.v();
    v.y += config.gravity * dt;
    let point = body.point() + v * dt;
    body.set_v(v);
    body.set_point(point);

    resolve_boundaries(body, config);
}

/// Each axis is clamped and reflected independently. Returns whether any
/// wall was hit.
pub fn resolve_boundaries(body: &mut Body, config: &Config) -> bool {
    let r = body.r();
    let mut point = body.point();
    let mut v = body.v();
    let mut bounced = false;

    if point.y + r >= config.arena_height {
        point.y = config.arena_height - r;
        v.y = -v.y * config.restitution;
        bounced = true;
    }
    if point.y - r <= 0.0 {
        point.y = r;
        v.y = -v.y * config.restitution;
        bounced = true;
    }

    let min_x = r;
    let max_x = config.arena_width - r;
    if point.x <= min_x || point.x >= max_x {
        point.x = point.x.max(min_x).min(max_x);
        v.x = -v.x * config.restitution;
        bounced = true;
    }

    body.set_point(point);
    body.set_v(v);
    bounced
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_at(x: f64, y: f64, r: f64) -> Body {
        Body::new(BodyId(0), Point::new(x, y), r)
    }

    #[test]
    fn free_fall_applies_gravity_then_drift() {
        let config = Config::default();
        let mut body = body_at(400.0, 100.0, 20.0);
        integrate(&mut body, 0.1, &config);
        let vy = config.gravity * 0.1;
        assert!((body.v().y - vy).abs() < 1e-9);
        assert!((body.point().y - (100.0 + vy * 0.1)).abs() < 1e-9);
        assert_eq!(body.point().x, 400.0);
    }

    #[test]
    fn zero_dt_is_a_no_op_away_from_walls() {
        let config = Config::default();
        let mut body = body_at(400.0, 250.0, 20.0);
        body.set_v(Point::new(3.0, -7.0));
        let before = body.clone();
        integrate(&mut body, 0.0, &config);
        assert_eq!(body, before);
    }

    #[test]
    fn held_body_is_not_integrated() {
        let config = Config::default();
        let mut body = body_at(400.0, 250.0, 20.0);
        body.grab(Point::new(400.0, 250.0));
        integrate(&mut body, 0.5, &config);
        assert_eq!(body.point(), Point::new(400.0, 250.0));
        assert_eq!(body.v(), Point::zero());
    }

    #[test]
    fn floor_bounce_clamps_and_reflects() {
        let config = Config::default();
        let mut body = body_at(400.0, 475.0, 20.0);
        body.set_v(Point::new(0.0, 300.0));
        integrate(&mut body, 0.1, &config);
        let before = 300.0 + config.gravity * 0.1;
        assert_eq!(body.point().y, config.arena_height - 20.0);
        assert!((body.v().y + before * config.restitution).abs() < 1e-9);
    }

    #[test]
    fn ceiling_bounce_clamps_and_reflects() {
        let mut config = Config::default();
        config.gravity = 0.0;
        let mut body = body_at(400.0, 25.0, 20.0);
        body.set_v(Point::new(0.0, -200.0));
        integrate(&mut body, 0.1, &config);
        assert_eq!(body.point().y, 20.0);
        assert!((body.v().y - 160.0).abs() < 1e-9);
    }

    #[test]
    fn side_walls_clamp_and_reflect() {
        let mut config = Config::default();
        config.gravity = 0.0;

        let mut left = body_at(30.0, 250.0, 20.0);
        left.set_v(Point::new(-500.0, 0.0));
        integrate(&mut left, 0.1, &config);
        assert_eq!(left.point().x, 20.0);
        assert!((left.v().x - 400.0).abs() < 1e-9);

        let mut right = body_at(770.0, 250.0, 20.0);
        right.set_v(Point::new(500.0, 0.0));
        integrate(&mut right, 0.1, &config);
        assert_eq!(right.point().x, config.arena_width - 20.0);
        assert!((right.v().x + 400.0).abs() < 1e-9);
    }

    #[test]
    fn boundary_resolution_is_idempotent_for_position() {
        let config = Config::default();
        let mut body = body_at(-50.0, 900.0, 20.0);
        body.set_v(Point::new(-10.0, 10.0));
        assert!(resolve_boundaries(&mut body, &config));
        let point = body.point();
        resolve_boundaries(&mut body, &config);
        assert_eq!(body.point(), point);
        assert_eq!(point, Point::new(20.0, config.arena_height - 20.0));
    }
}

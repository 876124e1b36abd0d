use crate::models::*;

/// Resolves an overlap between two distinct bodies in place.
///
/// Must run once per unordered pair per pass: a second call on the same
/// pair would apply the exchange twice. Non-overlapping pairs are left
/// bit-for-bit unchanged.
///
/// A held body acts as an immovable wall: it is not touched, the free body
/// bounces off it and takes the whole depenetration push.
pub fn resolve_pair(a: &mut Body, b: &mut Body, separation_epsilon: f64) -> bool {
    let delta = a.point() - b.point();
    let distance = delta.length();
    let sum_r = a.r() + b.r();
    if distance >= sum_r {
        return false;
    }

    // Coincident centres give angle 0, i.e. a normal along the x-axis.
    let angle = delta.angle();

    let u_a = a.v().rotated(-angle);
    let u_b = b.v().rotated(-angle);
    let ((x_a, x_b), (share_a, share_b)) = match (a.held(), b.held()) {
        (true, false) => ((u_a.x, 2.0 * u_a.x - u_b.x), (0.0, 1.0)),
        (false, true) => ((2.0 * u_b.x - u_a.x, u_b.x), (1.0, 0.0)),
        _ => (elastic_exchange(u_a.x, a.m(), u_b.x, b.m()), (0.5, 0.5)),
    };

    let depth = sum_r - distance + separation_epsilon;
    if !a.held() {
        a.set_v(Point::new(x_a, u_a.y).rotated(angle));
        a.set_point(a.point() + Point::from_polar(share_a * depth, angle));
    }
    if !b.held() {
        b.set_v(Point::new(x_b, u_b.y).rotated(angle));
        b.set_point(b.point() - Point::from_polar(share_b * depth, angle));
    }

    trace!(
        "resolved {:?}/{:?}: distance {:.3} < {:.3}",
        a.id(),
        b.id(),
        distance,
        sum_r
    );
    true
}

pub fn elastic_exchange(v_a: f64, m_a: Mass, v_b: f64, m_b: Mass) -> (f64, f64) {
    let sum_m = m_a + m_b;
    (
        ((m_a - m_b) * v_a + 2.0 * m_b * v_b) / sum_m,
        ((m_b - m_a) * v_b + 2.0 * m_a * v_a) / sum_m,
    )
}

/// Later pairs see positions already moved by earlier ones.
pub fn resolve_all_pairs(bodies: &mut Bodies, separation_epsilon: f64) -> usize {
    let mut collisions = 0;
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let (a, b) = bodies.pair_mut(i, j);
            if resolve_pair(a, b, separation_epsilon) {
                collisions += 1;
            }
        }
    }
    collisions
}

use crate::domain::tuning::RESTITUTION;
use crate::systems::body::Body;

/// What happened to one pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PairOutcome {
    /// Not touching, or exactly coincident (no usable normal)
    Apart,
    /// Overlap corrected, bodies already moving apart
    Separated,
    /// Overlap corrected and an impulse applied
    Bounced,
}

/// Resolve one ball/ball contact.
///
/// Position correction moves both bodies (kinematic ones included);
/// the impulse only changes non-kinematic velocities.
pub fn resolve_pair(a: &mut Body, b: &mut Body) -> PairOutcome {
    let delta = b.pos - a.pos;
    let dist = delta.length();
    if dist == 0.0 {
        return PairOutcome::Apart;
    }

    let overlap = a.radius() + b.radius() - dist;
    if overlap <= 0.0 {
        return PairOutcome::Apart;
    }

    let normal = delta / dist;
    let total_mass = a.mass() + b.mass();
    a.pos -= normal * (overlap * (b.mass() / total_mass));
    b.pos += normal * (overlap * (a.mass() / total_mass));

    let rel_vel_along_normal = (b.velocity - a.velocity).dot(normal);
    if rel_vel_along_normal > 0.0 {
        return PairOutcome::Separated;
    }

    let j = -(1.0 + RESTITUTION) * rel_vel_along_normal / (a.inverse_mass() + b.inverse_mass());
    let impulse = normal * j;
    a.apply_impulse(-impulse);
    b.apply_impulse(impulse);

    PairOutcome::Bounced
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::body::Vec2;

    fn normal_speed(a: &Body, b: &Body) -> f32 {
        let n = b.pos - a.pos;
        (b.velocity - a.velocity).dot(n / n.length())
    }

    #[test]
    fn coincident_centres_are_skipped() {
        let mut a = Body::new(50.0, 50.0, 10.0, 0).with_velocity(1.0, 0.0);
        let mut b = Body::new(50.0, 50.0, 10.0, 0);
        assert_eq!(resolve_pair(&mut a, &mut b), PairOutcome::Apart);
        assert_eq!(a.pos, b.pos);
        assert_eq!(a.velocity, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn touching_but_not_overlapping_is_apart() {
        let mut a = Body::new(0.0, 0.0, 10.0, 0);
        let mut b = Body::new(20.0, 0.0, 10.0, 0).with_velocity(-3.0, 0.0);
        assert_eq!(resolve_pair(&mut a, &mut b), PairOutcome::Apart);
        assert_eq!(b.velocity.x, -3.0);
    }

    #[test]
    fn correction_is_weighted_by_the_other_mass() {
        // masses 6 and 12, overlap 6 along +x
        let mut a = Body::new(0.0, 0.0, 10.0, 0);
        let mut b = Body::new(24.0, 0.0, 20.0, 0);
        resolve_pair(&mut a, &mut b);
        // a moves back by 6 * 12/18 = 4, b forward by 6 * 6/18 = 2
        assert!((a.pos.x + 4.0).abs() < 1e-5);
        assert!((b.pos.x - 26.0).abs() < 1e-5);
        assert!((b.pos.x - a.pos.x - 30.0).abs() < 1e-4);
    }

    #[test]
    fn approaching_pair_ends_up_separating() {
        let mut a = Body::new(100.0, 100.0, 15.0, 0).with_velocity(4.0, 1.0);
        let mut b = Body::new(120.0, 105.0, 10.0, 0).with_velocity(-2.0, 0.0);
        let before = normal_speed(&a, &b);
        assert!(before < 0.0);

        assert_eq!(resolve_pair(&mut a, &mut b), PairOutcome::Bounced);

        let after = normal_speed(&a, &b);
        assert!(after >= 0.0);
        // e = 0.9 on the normal component
        assert!((after + 0.9 * before).abs() < 1e-3);
    }

    #[test]
    fn separating_pair_keeps_its_velocities() {
        let mut a = Body::new(0.0, 0.0, 10.0, 0).with_velocity(-1.0, 0.0);
        let mut b = Body::new(15.0, 0.0, 10.0, 0).with_velocity(1.0, 0.0);
        assert_eq!(resolve_pair(&mut a, &mut b), PairOutcome::Separated);
        assert_eq!(a.velocity.x, -1.0);
        assert_eq!(b.velocity.x, 1.0);
    }

    #[test]
    fn kinematic_partner_pushes_without_being_pushed() {
        let mut held = Body::new(0.0, 0.0, 10.0, 0);
        held.kinematic = true;
        let mut free = Body::new(15.0, 0.0, 10.0, 0).with_velocity(-5.0, 0.0);

        assert_eq!(resolve_pair(&mut held, &mut free), PairOutcome::Bounced);

        assert_eq!(held.velocity, Vec2::zero());
        // j = 1.9 * 5 / (1/6 + 1/6) = 28.5; only the free ball's half lands
        assert!((free.velocity.x + 0.25).abs() < 1e-4, "vx = {}", free.velocity.x);
        // both are still corrected out of the overlap
        assert_eq!(held.pos.x, -2.5);
        assert_eq!(free.pos.x, 17.5);
    }
}

//! Integrator - gravity, explicit Euler movement and wall bounces
//!
//! Every non-kinematic ball gets `vy += g * dt * 60`, then moves by
//! `velocity * dt * 60`, then is pushed back inside the viewport.
//! Kinematic balls are snapped to their hold target with zero velocity.

mod walls;

pub use walls::{resolve_walls, Bounds};

use crate::domain::tuning::FRAME_SCALE;
use crate::systems::body::{Body, Vec2};

/// Inputs for one integration pass.
#[derive(Clone, Copy, Debug)]
pub struct IntegrateParams {
    /// Acceleration in px per 60 fps frame²
    pub gravity: f32,
    /// Step length in seconds (already capped by the caller)
    pub dt: f32,
    pub bounds: Bounds,
    /// Where a kinematic ball sits: pointer position minus grab offset
    pub hold_target: Vec2,
}

/// Counters from one integration pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IntegrateReport {
    pub integrated: u32,
    pub kinematic: u32,
}

pub fn integrate(bodies: &mut [Body], params: &IntegrateParams) -> IntegrateReport {
    let scale = params.dt * FRAME_SCALE;
    let mut report = IntegrateReport::default();

    for body in bodies.iter_mut() {
        if body.kinematic {
            body.pos = params.hold_target;
            body.velocity = Vec2::zero();
            report.kinematic += 1;
            continue;
        }

        body.velocity.y += params.gravity * scale;
        body.pos += body.velocity * scale;

        resolve_walls(body, params.bounds);
        report.integrated += 1;
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn params(gravity: f32, dt: f32) -> IntegrateParams {
        IntegrateParams {
            gravity,
            dt,
            bounds: Bounds::new(800.0, 600.0),
            hold_target: Vec2::zero(),
        }
    }

    #[test]
    fn gravity_adds_exactly_g_dt_60_in_free_flight() {
        let mut bodies = vec![Body::new(400.0, 300.0, 10.0, 0).with_velocity(0.0, -3.0)];
        integrate(&mut bodies, &params(0.5, DT));
        let expected = -3.0 + 0.5 * DT * 60.0;
        assert!((bodies[0].velocity.y - expected).abs() < 1e-6);
    }

    #[test]
    fn movement_is_scaled_to_sixty_fps_frames() {
        let mut bodies = vec![Body::new(400.0, 300.0, 10.0, 0).with_velocity(2.0, 0.0)];
        integrate(&mut bodies, &params(0.0, 0.05));
        // 0.05 s is three baseline frames
        assert!((bodies[0].pos.x - 406.0).abs() < 1e-4);
        assert!((bodies[0].pos.y - 300.0).abs() < 1e-6);
    }

    #[test]
    fn kinematic_bodies_snap_to_hold_target() {
        let mut bodies = vec![Body::new(10.0, 10.0, 10.0, 0).with_velocity(5.0, 5.0)];
        bodies[0].kinematic = true;
        let mut p = params(1.0, DT);
        p.hold_target = Vec2::new(250.0, 120.0);

        let report = integrate(&mut bodies, &p);

        assert_eq!(report, IntegrateReport { integrated: 0, kinematic: 1 });
        assert_eq!(bodies[0].pos, Vec2::new(250.0, 120.0));
        assert_eq!(bodies[0].velocity, Vec2::zero());
    }

    #[test]
    fn empty_collection_is_a_no_op() {
        let report = integrate(&mut [], &params(1.0, DT));
        assert_eq!(report, IntegrateReport::default());
    }
}

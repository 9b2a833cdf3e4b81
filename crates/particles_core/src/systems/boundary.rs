use particles_data::Entity;

/// Keeps an entity's pending position inside `[0, width] x [0, height]`.
///
/// Each axis is handled independently: a coordinate past an edge is clamped to
/// that edge and the matching velocity component is negated.
pub fn reflect(entity: &mut Entity, width: f64, height: f64) {
    reflect_axis(
        &mut entity.pending_position.x,
        &mut entity.velocity.x,
        width,
    );
    reflect_axis(
        &mut entity.pending_position.y,
        &mut entity.velocity.y,
        height,
    );
}

fn reflect_axis(position: &mut f64, velocity: &mut f64, max: f64) {
    if position.is_nan() {
        // A non-finite force poisoned this axis; park it on the edge at rest.
        *position = 0.0;
        *velocity = 0.0;
    } else if !velocity.is_finite() {
        // An overflowing force; keep the entity where it lands but stop it.
        *position = position.clamp(0.0, max);
        *velocity = 0.0;
    } else if *position < 0.0 {
        *position = 0.0;
        *velocity = -*velocity;
    } else if *position > max {
        *position = max;
        *velocity = -*velocity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use particles_data::Vec2;

    fn pending(x: f64, y: f64, vx: f64, vy: f64) -> Entity {
        let mut e = Entity::at(Vec2::new(50.0, 50.0)).with_velocity(Vec2::new(vx, vy));
        e.pending_position = Vec2::new(x, y);
        e
    }

    #[test]
    fn test_inside_is_untouched() {
        let mut e = pending(10.0, 20.0, 1.0, -1.0);
        reflect(&mut e, 100.0, 100.0);
        assert_eq!(e.pending_position, Vec2::new(10.0, 20.0));
        assert_eq!(e.velocity, Vec2::new(1.0, -1.0));
    }

    #[test]
    fn test_left_edge_clamps_and_flips() {
        let mut e = pending(-3.0, 20.0, -4.0, 2.0);
        reflect(&mut e, 100.0, 100.0);
        assert_eq!(e.pending_position.x, 0.0);
        assert_eq!(e.velocity.x, 4.0);
        assert_eq!(e.velocity.y, 2.0);
    }

    #[test]
    fn test_far_edges_clamp_and_flip() {
        let mut e = pending(120.0, 80.5, 5.0, 3.0);
        reflect(&mut e, 100.0, 80.0);
        assert_eq!(e.pending_position, Vec2::new(100.0, 80.0));
        assert_eq!(e.velocity, Vec2::new(-5.0, -3.0));
    }

    #[test]
    fn test_exactly_on_edge_is_inside() {
        let mut e = pending(0.0, 100.0, -1.0, 1.0);
        reflect(&mut e, 100.0, 100.0);
        assert_eq!(e.velocity, Vec2::new(-1.0, 1.0));
    }

    #[test]
    fn test_nan_is_parked() {
        let mut e = pending(f64::NAN, 10.0, f64::NAN, 0.0);
        reflect(&mut e, 100.0, 100.0);
        assert_eq!(e.pending_position.x, 0.0);
        assert_eq!(e.velocity.x, 0.0);
    }

    #[test]
    fn test_infinite_velocity_is_stopped() {
        let mut e = pending(f64::INFINITY, 40.0, f64::INFINITY, f64::NEG_INFINITY);
        reflect(&mut e, 100.0, 100.0);
        assert_eq!(e.pending_position, Vec2::new(100.0, 40.0));
        assert_eq!(e.velocity, Vec2::ZERO);
    }
}

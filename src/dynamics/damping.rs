use glam::{Mat2, Vec2};

use crate::core::chain::Chain;

/// Resolves spring damping implicitly for one step.
///
/// Solves `(M + dt·C) v = M v*`, where `v*` holds the velocities after the
/// elastic and gravity kick and `C` assembles `c·n·nᵀ` for every spring along
/// its start-of-step axis. Anchors enter with zero velocity. The system is
/// block tridiagonal along the chain and symmetric positive definite, so a
/// block Thomas sweep solves it in O(N) without pivoting.
pub fn solve_implicit_damping(chain: &mut Chain, dt: f32) {
    let count = chain.body_count();
    if count == 0 || chain.springs().iter().all(|s| s.damping() == 0.0) {
        return;
    }

    // coupling[s] = dt·c·n nᵀ for spring s; spring i sits left of body i.
    let coupling: Vec<Mat2> = chain
        .springs()
        .iter()
        .map(|spring| {
            let (axis, _) = chain.spring_axis(spring);
            let outer = Mat2::from_cols(axis * axis.x, axis * axis.y);
            outer * (dt * spring.damping())
        })
        .collect();

    let mut upper_factor = vec![Mat2::ZERO; count];
    let mut partial = vec![Vec2::ZERO; count];

    for (i, body) in chain.bodies().iter().enumerate() {
        let mut diagonal = Mat2::IDENTITY * body.mass() + coupling[i] + coupling[i + 1];
        let mut rhs = body.velocity() * body.mass();
        if i > 0 {
            diagonal -= coupling[i] * upper_factor[i - 1];
            rhs += coupling[i] * partial[i - 1];
        }
        let inverse = diagonal.inverse();
        if i + 1 < count {
            upper_factor[i] = inverse * coupling[i + 1];
        }
        partial[i] = inverse * rhs;
    }

    let bodies = chain.bodies_mut();
    let mut next = partial[count - 1];
    bodies[count - 1].set_velocity(next);
    for i in (0..count - 1).rev() {
        next = partial[i] + upper_factor[i] * next;
        bodies[i].set_velocity(next);
    }
}

//! CollisionResolver - exhaustive pairwise ball/ball contacts
//!
//! Every unordered pair `(i, j)` with `i < j` is visited once per step, in
//! index order. Overlapping pairs are pushed apart along the contact normal
//! (mass weighted, single pass) and, when still approaching, receive an
//! impulse with restitution `RESTITUTION`.
//!
//! There is no broad phase and no iterative solver: a correction made for
//! a later pair can leave residual overlap in an earlier one until the next
//! step. Dense piles therefore show a frame of interpenetration.

mod resolve;

pub use resolve::{resolve_pair, PairOutcome};

use crate::systems::body::Body;

/// Counters from one collision pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub pairs_checked: u32,
    pub contacts: u32,
    pub impulses: u32,
}

pub fn resolve_collisions(bodies: &mut [Body]) -> CollisionReport {
    let mut report = CollisionReport::default();
    let n = bodies.len();

    for i in 0..n {
        // Split so `a` (index i) and every later `b` can be borrowed mutably together.
        let (head, tail) = bodies.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            report.pairs_checked += 1;
            match resolve_pair(a, b) {
                PairOutcome::Apart => {}
                PairOutcome::Separated => report.contacts += 1,
                PairOutcome::Bounced => {
                    report.contacts += 1;
                    report.impulses += 1;
                }
            }
        }
    }

    report
}

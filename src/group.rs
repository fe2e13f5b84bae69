//! Finite groups given by identity, inverse and composition
//!
//! [`closure`] expands a generating basis into every element it reaches.
//! [`check_axioms`] verifies the group laws over that closure, so a broken
//! composition table is caught before it is used to fold states together.

use std::{
    collections::{HashSet, VecDeque},
    fmt::Debug,
    hash::Hash,
};

use tracing::debug;

use crate::error::{DomainError, Result};

/// Upper bound on closure size used when the caller does not pick one.
///
/// Every group the engine works with has at most 16 elements, so hitting this
/// means the basis generates an infinite (or absurdly large) group.
pub const DEFAULT_CLOSURE_LIMIT: usize = 4096;

/// An element of a group.
///
/// `compose(left, right)` means "apply `left`, then `right`".
pub trait Group: Copy + Eq + Hash + Debug {
    fn identity() -> Self;

    fn inverse(&self) -> Self;

    fn compose(&self, right: &Self) -> Self;
}

/// All elements reachable from the identity by composing with the basis
/// elements and their inverses.
///
/// The result is a set; callers must not rely on any order.
pub fn closure<G: Group>(basis: &[G]) -> Result<HashSet<G>> {
    closure_with_limit(basis, DEFAULT_CLOSURE_LIMIT)
}

/// [`closure`] with an explicit bound on the number of elements.
///
/// # Errors
///
/// Returns [`DomainError::UnboundedClosure`] when more than `limit` distinct
/// elements are found.
pub fn closure_with_limit<G: Group>(basis: &[G], limit: usize) -> Result<HashSet<G>> {
    let mut elements = HashSet::new();
    let mut queue = VecDeque::from([G::identity()]);

    while let Some(element) = queue.pop_front() {
        if !elements.insert(element) {
            continue;
        }

        if elements.len() > limit {
            return Err(DomainError::UnboundedClosure { limit }.into());
        }

        for generator in basis {
            queue.push_back(element.compose(generator));
            queue.push_back(element.compose(&generator.inverse()));
        }
    }

    debug!(
        generators = basis.len(),
        order = elements.len(),
        "closed group basis"
    );
    Ok(elements)
}

fn violation<G: Debug>(law: &'static str, elements: &[&G]) -> DomainError {
    DomainError::AxiomViolation {
        law,
        detail: format!("{elements:?}"),
    }
}

/// Verify the group laws over the closure of `basis`.
///
/// Checks identity on both sides, left inverse, `inv(l) . inv(r) == inv(r . l)`
/// and associativity for every combination of elements.
pub fn check_axioms<G: Group>(basis: &[G]) -> Result<()> {
    let elements: Vec<G> = closure(basis)?.into_iter().collect();
    let identity = G::identity();

    for t in &elements {
        if identity.compose(t) != *t {
            return Err(violation("left identity", &[t]).into());
        }
        if t.compose(&identity) != *t {
            return Err(violation("right identity", &[t]).into());
        }
        if t.inverse().compose(t) != identity {
            return Err(violation("inverse", &[t]).into());
        }
    }

    for left in &elements {
        for right in &elements {
            if left.inverse().compose(&right.inverse()) != right.compose(left).inverse() {
                return Err(violation("inverse of composition", &[left, right]).into());
            }
        }
    }

    for left in &elements {
        for middle in &elements {
            for right in &elements {
                if left.compose(middle).compose(right) != left.compose(&middle.compose(right)) {
                    return Err(violation("associativity", &[left, middle, right]).into());
                }
            }
        }
    }

    Ok(())
}

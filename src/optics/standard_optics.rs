//! Standard optics that are commonly used.
//!
//! This module provides pre-defined optics for `Option`, `Result` and the
//! identity focus.

use super::affine::IntoAffine;
use super::lens::{Lens, LensAsAffine};
use super::prism::{Prism, PrismAsAffine};

/// The identity lens, focusing on the whole value.
///
/// Composing any lens with `Identity` on either side yields an equivalent lens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

/// Creates the identity lens.
///
/// # Example
///
/// ```
/// use optica::optics::{Lens, identity};
///
/// let lens = identity();
/// assert_eq!(lens.view(&42), 42);
/// assert_eq!(lens.update(42, 7), 7);
/// ```
#[must_use]
pub const fn identity() -> Identity {
    Identity
}

impl<S: Clone> Lens<S, S> for Identity {
    fn view(&self, source: &S) -> S {
        source.clone()
    }

    fn update(&self, _source: S, value: S) -> S {
        value
    }
}

impl<S: Clone> IntoAffine<S, S> for Identity {
    type Output = LensAsAffine<Self, S, S>;

    fn into_affine(self) -> Self::Output {
        LensAsAffine::new(self)
    }
}

/// A prism focusing on the `Some` case of an `Option`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SomePrism;

/// Creates a prism that unwraps an `Option`.
///
/// # Example
///
/// ```
/// use optica::optics::{Prism, some};
///
/// let prism = some();
/// assert_eq!(prism.extract(&Some(3)), Some(3));
/// assert_eq!(prism.extract(&None::<i32>), None);
/// assert_eq!(prism.build(5), Some(5));
/// ```
#[must_use]
pub const fn some() -> SomePrism {
    SomePrism
}

impl<A: Clone> Prism<Option<A>, A> for SomePrism {
    fn extract(&self, source: &Option<A>) -> Option<A> {
        source.clone()
    }

    fn build(&self, value: A) -> Option<A> {
        Some(value)
    }
}

impl<A: Clone> IntoAffine<Option<A>, A> for SomePrism {
    type Output = PrismAsAffine<Self, Option<A>, A>;

    fn into_affine(self) -> Self::Output {
        PrismAsAffine::new(self)
    }
}

/// A prism focusing on the `Ok` case of a `Result`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OkPrism;

/// Creates a prism on the `Ok` case of a `Result`.
///
/// # Example
///
/// ```
/// use optica::optics::{Prism, ok};
///
/// let prism = ok();
/// assert_eq!(prism.extract(&Ok::<i32, String>(1)), Some(1));
/// assert_eq!(prism.extract(&Err::<i32, String>("bad".into())), None);
/// ```
#[must_use]
pub const fn ok() -> OkPrism {
    OkPrism
}

impl<T: Clone, E> Prism<Result<T, E>, T> for OkPrism {
    fn extract(&self, source: &Result<T, E>) -> Option<T> {
        source.as_ref().ok().cloned()
    }

    fn build(&self, value: T) -> Result<T, E> {
        Ok(value)
    }
}

impl<T: Clone, E> IntoAffine<Result<T, E>, T> for OkPrism {
    type Output = PrismAsAffine<Self, Result<T, E>, T>;

    fn into_affine(self) -> Self::Output {
        PrismAsAffine::new(self)
    }
}

/// A prism focusing on the `Err` case of a `Result`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ErrPrism;

/// Creates a prism on the `Err` case of a `Result`.
#[must_use]
pub const fn err() -> ErrPrism {
    ErrPrism
}

impl<T, E: Clone> Prism<Result<T, E>, E> for ErrPrism {
    fn extract(&self, source: &Result<T, E>) -> Option<E> {
        source.as_ref().err().cloned()
    }

    fn build(&self, value: E) -> Result<T, E> {
        Err(value)
    }
}

impl<T, E: Clone> IntoAffine<Result<T, E>, E> for ErrPrism {
    type Output = PrismAsAffine<Self, Result<T, E>, E>;

    fn into_affine(self) -> Self::Output {
        PrismAsAffine::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lens;

    #[derive(Clone, PartialEq, Debug)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn test_identity_is_unit_of_composition() {
        let x_lens = lens!(Point, x);
        let left = identity().compose(x_lens.clone());
        let right = x_lens.clone().compose(identity());
        let point = Point { x: 1, y: 2 };

        assert_eq!(left.view(&point), x_lens.view(&point));
        assert_eq!(right.view(&point), x_lens.view(&point));
        assert_eq!(left.update(point.clone(), 5), x_lens.update(point.clone(), 5));
        assert_eq!(right.update(point.clone(), 5), x_lens.update(point, 5));
    }

    #[test]
    fn test_err_prism() {
        let prism = err();
        assert_eq!(prism.extract(&Err::<i32, &str>("boom")), Some("boom"));
        assert_eq!(prism.extract(&Ok::<i32, &str>(1)), None);
        assert_eq!(prism.build("boom"), Err::<i32, &str>("boom"));
    }

    #[test]
    fn test_some_prism_try_modify() {
        assert_eq!(some().try_modify(Some(2), |n: i32| n * 3), Some(6));
        assert_eq!(some().try_modify(None, |n: i32| n * 3), None);
    }
}

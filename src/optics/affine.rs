//! Affine optics for focusing on parts that may be missing.
//!
//! An Affine optic generalizes both [`Lens`](super::Lens) and
//! [`Prism`](super::Prism): reading may fail because the focus does not
//! exist, and writing may fail for the same reason. It is the join type of
//! the optics hierarchy, so any composition that mixes kinds produces an
//! Affine.
//!
//! # Laws
//!
//! Every Affine must satisfy two laws, constrained only where the
//! operations succeed:
//!
//! 1. **PreviewUpdate Law**: Writing back a previewed value yields the original.
//!    ```text
//!    if affine.preview(&source) == Some(value) then
//!        affine.try_update(&source, value) == Some(source)
//!    ```
//!
//! 2. **UpdatePreview Law**: Previewing after a successful write yields the
//!    written value.
//!    ```text
//!    if affine.try_update(&source, value.clone()) == Some(updated) then
//!        affine.preview(&updated) == Some(value)
//!    ```
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//! use optica::optics::{Affine, Lens, ix};
//! use optica::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Inventory { stock: HashMap<String, u32> }
//!
//! let apples = lens!(Inventory, stock).compose_affine(ix("apple".to_string()));
//!
//! let inventory = Inventory {
//!     stock: HashMap::from([("apple".to_string(), 3)]),
//! };
//!
//! assert_eq!(apples.preview(&inventory), Some(3));
//! let restocked = apples.try_modify(inventory, |count| count + 10);
//! assert_eq!(restocked.stock["apple"], 13);
//! ```

use std::marker::PhantomData;

use super::lens::{Lens, LensAsAffine};
use super::prism::{Prism, PrismAsAffine};

/// An Affine focuses on a part that may or may not exist.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused part, if present)
///
/// # Laws
///
/// 1. **PreviewUpdate Law**: if `preview(&s) == Some(v)` then `try_update(&s, v) == Some(s)`
/// 2. **UpdatePreview Law**: if `try_update(&s, v) == Some(t)` then `preview(&t) == Some(v)`
pub trait Affine<S, A> {
    /// Reads the focused part if it exists.
    fn preview(&self, source: &S) -> Option<A>;

    /// Writes the focused part if it exists and is writable.
    ///
    /// The source is borrowed, so a failed write leaves it untouched and
    /// `None` distinguishes "nothing to focus" from a successful replacement.
    fn try_update(&self, source: &S, value: A) -> Option<S>;

    /// Returns `true` when the focused part exists.
    fn is_present(&self, source: &S) -> bool {
        self.preview(source).is_some()
    }

    /// Modifies the focused part if present.
    ///
    /// Returns `None` when either the read or the write fails.
    fn modify_option<F>(&self, source: &S, function: F) -> Option<S>
    where
        F: FnOnce(A) -> A,
    {
        let value = self.preview(source)?;
        self.try_update(source, function(value))
    }

    /// Modifies the focused part if present, otherwise returns the source
    /// unchanged.
    fn try_modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        self.modify_option(&source, function).unwrap_or(source)
    }

    /// Composes this affine optic with another one.
    ///
    /// Reads chain through both links and stop at the first absence. Writes
    /// preview the outer link, write the inner link, then write the result
    /// back through the outer link; any failing layer fails the whole write.
    fn compose<B, O>(self, other: O) -> ComposedAffine<Self, O, S, A>
    where
        Self: Sized,
        O: Affine<A, B>,
    {
        ComposedAffine::new(self, other)
    }

    /// Composes this affine optic with a lens.
    fn compose_lens<B, L>(self, lens: L) -> ComposedAffine<Self, LensAsAffine<L, A, B>, S, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedAffine::new(self, lens.to_affine())
    }

    /// Composes this affine optic with a prism.
    fn compose_prism<B, P>(self, prism: P) -> ComposedAffine<Self, PrismAsAffine<P, A, B>, S, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        ComposedAffine::new(self, prism.to_affine())
    }
}

/// Promotion of any optic defined by this crate into an [`Affine`].
///
/// Lenses become [`LensAsAffine`], prisms become [`PrismAsAffine`] and
/// affine optics are returned unchanged. This is what lets
/// [`pipe_affine!`](crate::pipe_affine) normalize a chain of mixed kinds.
///
/// # Example
///
/// ```
/// use optica::optics::{Affine, IntoAffine, some};
/// use optica::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Session { token: Option<String> }
///
/// let token = lens!(Session, token).into_affine().compose(some().into_affine());
///
/// let session = Session { token: Some("abc".to_string()) };
/// assert_eq!(token.preview(&session), Some("abc".to_string()));
/// assert_eq!(token.preview(&Session { token: None }), None);
/// ```
pub trait IntoAffine<S, A> {
    /// The affine optic produced by the promotion.
    type Output: Affine<S, A>;

    /// Promotes this optic into an affine optic.
    fn into_affine(self) -> Self::Output;
}

/// An affine optic implemented using a preview function and a try-update function.
///
/// # Example
///
/// ```
/// use optica::optics::{Affine, FunctionAffine};
///
/// let head = FunctionAffine::new(
///     |items: &Vec<i32>| items.first().copied(),
///     |items: &Vec<i32>, value: i32| {
///         let mut items = items.clone();
///         *items.first_mut()? = value;
///         Some(items)
///     },
/// );
///
/// assert_eq!(head.preview(&vec![1, 2]), Some(1));
/// assert_eq!(head.try_update(&vec![1, 2], 9), Some(vec![9, 2]));
/// assert_eq!(head.try_update(&vec![], 9), None);
/// ```
pub struct FunctionAffine<S, A, P, U>
where
    P: Fn(&S) -> Option<A>,
    U: Fn(&S, A) -> Option<S>,
{
    preview_function: P,
    try_update_function: U,
    _marker: PhantomData<fn(S) -> A>,
}

impl<S, A, P, U> FunctionAffine<S, A, P, U>
where
    P: Fn(&S) -> Option<A>,
    U: Fn(&S, A) -> Option<S>,
{
    /// Creates a new `FunctionAffine` from a preview and a try-update function.
    ///
    /// # Arguments
    ///
    /// * `preview_function` - Reads the focused part if present
    /// * `try_update_function` - Builds a new source with the focused part replaced, if present
    #[must_use]
    pub const fn new(preview_function: P, try_update_function: U) -> Self {
        Self {
            preview_function,
            try_update_function,
            _marker: PhantomData,
        }
    }
}

impl<S, A, P, U> Affine<S, A> for FunctionAffine<S, A, P, U>
where
    P: Fn(&S) -> Option<A>,
    U: Fn(&S, A) -> Option<S>,
{
    fn preview(&self, source: &S) -> Option<A> {
        (self.preview_function)(source)
    }

    fn try_update(&self, source: &S, value: A) -> Option<S> {
        (self.try_update_function)(source, value)
    }
}

impl<S, A, P, U> Clone for FunctionAffine<S, A, P, U>
where
    P: Fn(&S) -> Option<A> + Clone,
    U: Fn(&S, A) -> Option<S> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            preview_function: self.preview_function.clone(),
            try_update_function: self.try_update_function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, P, U> std::fmt::Debug for FunctionAffine<S, A, P, U>
where
    P: Fn(&S) -> Option<A>,
    U: Fn(&S, A) -> Option<S>,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionAffine")
            .finish_non_exhaustive()
    }
}

/// An affine optic composed of an outer and an inner affine optic.
///
/// # Type Parameters
///
/// - `O1`: The type of the outer optic
/// - `O2`: The type of the inner optic
/// - `S`: The source type of the whole chain
/// - `A`: The intermediate type (target of O1, source of O2)
///
/// The source type is carried so that chains whose outer link works on
/// several container types (such as [`ix`](super::ix)) are resolved by the
/// root they are applied to.
pub struct ComposedAffine<O1, O2, S, A> {
    first: O1,
    second: O2,
    _marker: PhantomData<fn(S) -> A>,
}

impl<O1, O2, S, A> ComposedAffine<O1, O2, S, A> {
    /// Creates a new composed affine optic.
    ///
    /// # Arguments
    ///
    /// * `first` - The outer optic (focuses on the intermediate structure)
    /// * `second` - The inner optic (focuses on the final part)
    #[must_use]
    pub const fn new(first: O1, second: O2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, O1, O2> Affine<S, B> for ComposedAffine<O1, O2, S, A>
where
    O1: Affine<S, A>,
    O2: Affine<A, B>,
{
    fn preview(&self, source: &S) -> Option<B> {
        self.first
            .preview(source)
            .and_then(|intermediate| self.second.preview(&intermediate))
    }

    fn try_update(&self, source: &S, value: B) -> Option<S> {
        let intermediate = self.first.preview(source)?;
        let new_intermediate = self.second.try_update(&intermediate, value)?;
        self.first.try_update(source, new_intermediate)
    }
}

impl<O1: Clone, O2: Clone, S, A> Clone for ComposedAffine<O1, O2, S, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<O1: std::fmt::Debug, O2: std::fmt::Debug, S, A> std::fmt::Debug
    for ComposedAffine<O1, O2, S, A>
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedAffine")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

impl<S, A, P, U> IntoAffine<S, A> for FunctionAffine<S, A, P, U>
where
    P: Fn(&S) -> Option<A>,
    U: Fn(&S, A) -> Option<S>,
{
    type Output = Self;

    fn into_affine(self) -> Self::Output {
        self
    }
}

impl<S, A, B, O1, O2> IntoAffine<S, B> for ComposedAffine<O1, O2, S, A>
where
    O1: Affine<S, A>,
    O2: Affine<A, B>,
{
    type Output = Self;

    fn into_affine(self) -> Self::Output {
        self
    }
}

impl<S, A, L> IntoAffine<S, A> for LensAsAffine<L, S, A>
where
    L: Lens<S, A>,
    S: Clone,
{
    type Output = Self;

    fn into_affine(self) -> Self::Output {
        self
    }
}

impl<S, A, P> IntoAffine<S, A> for PrismAsAffine<P, S, A>
where
    P: Prism<S, A>,
{
    type Output = Self;

    fn into_affine(self) -> Self::Output {
        self
    }
}

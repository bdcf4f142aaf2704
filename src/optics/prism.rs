//! Prism optics for focusing on enum variants.
//!
//! A Prism is an optic that targets one case of a sum type. Extracting the
//! payload fails (returns `None`) when the value is a different case, while
//! building a value of the targeted case from a payload always succeeds.
//!
//! # Laws
//!
//! Every Prism must satisfy two laws:
//!
//! 1. **BuildMatch Law**: Extracting from a built value yields the payload.
//!    ```text
//!    prism.extract(&prism.build(value.clone())) == Some(value)
//!    ```
//!
//! 2. **MatchBuild Law**: If extraction succeeds, building from the payload
//!    yields the original.
//!    ```text
//!    if prism.extract(&source) == Some(value) then
//!        prism.build(value) == source
//!    ```
//!
//! # Examples
//!
//! ```
//! use optica::optics::Prism;
//! use optica::prism;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Shape {
//!     Circle(f64),
//!     Square(f64),
//! }
//!
//! let circle_prism = prism!(Shape, Circle);
//!
//! assert_eq!(circle_prism.extract(&Shape::Circle(5.0)), Some(5.0));
//! assert_eq!(circle_prism.extract(&Shape::Square(3.0)), None);
//! assert_eq!(circle_prism.build(10.0), Shape::Circle(10.0));
//! ```

use std::marker::PhantomData;

use super::affine::{Affine, ComposedAffine, IntoAffine};
use super::lens::{Lens, LensAsAffine};

/// A Prism focuses on a single variant of an enum.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole enum)
/// - `A`: The target type (the payload of the variant)
///
/// # Laws
///
/// 1. **BuildMatch Law**: `prism.extract(&prism.build(value.clone())) == Some(value)`
/// 2. **MatchBuild Law**: if `prism.extract(&source) == Some(value)` then `prism.build(value) == source`
pub trait Prism<S, A> {
    /// Attempts to extract the payload from the source.
    ///
    /// Returns `None` when the source is a different variant. A mismatch is
    /// ordinary control flow, not an error.
    fn extract(&self, source: &S) -> Option<A>;

    /// Constructs the targeted variant from a payload.
    fn build(&self, value: A) -> S;

    /// Returns `true` when the source is the targeted variant.
    fn is_match(&self, source: &S) -> bool {
        self.extract(source).is_some()
    }

    /// Modifies the payload if the source is the targeted variant.
    ///
    /// Returns `None` if the variant does not match.
    fn modify_option<F>(&self, source: &S, function: F) -> Option<S>
    where
        F: FnOnce(A) -> A,
    {
        self.extract(source)
            .map(|value| self.build(function(value)))
    }

    /// Modifies the payload if the source is the targeted variant, or
    /// returns the source unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::Prism;
    /// use optica::prism;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Outcome {
    ///     Success(String),
    ///     Failure(String),
    /// }
    ///
    /// let success = prism!(Outcome, Success);
    ///
    /// let shouted = success.try_modify(Outcome::Success("done".into()), |m| m.to_uppercase());
    /// assert_eq!(shouted, Outcome::Success("DONE".into()));
    ///
    /// let failure = Outcome::Failure("boom".into());
    /// assert_eq!(success.try_modify(failure.clone(), |m| m.to_uppercase()), failure);
    /// ```
    fn try_modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        match self.extract(&source) {
            Some(value) => self.build(function(value)),
            None => source,
        }
    }

    /// Composes this prism with another prism to focus on a nested variant.
    ///
    /// Extraction stops at the first stage that does not match; building
    /// runs from the innermost prism outward.
    fn compose<B, P>(self, other: P) -> ComposedPrism<Self, P, S, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        ComposedPrism::new(self, other)
    }

    /// Composes this prism with a lens, yielding an affine optic.
    fn compose_lens<B, L>(
        self,
        lens: L,
    ) -> ComposedAffine<PrismAsAffine<Self, S, A>, LensAsAffine<L, A, B>, S, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedAffine::new(self.to_affine(), lens.to_affine())
    }

    /// Composes this prism with an affine optic, yielding an affine optic.
    fn compose_affine<B, O>(self, affine: O) -> ComposedAffine<PrismAsAffine<Self, S, A>, O, S, A>
    where
        Self: Sized,
        O: Affine<A, B>,
    {
        ComposedAffine::new(self.to_affine(), affine)
    }

    /// Promotes this prism to an affine optic.
    ///
    /// The promoted `try_update` ignores the current source and rebuilds the
    /// variant wholesale.
    fn to_affine(self) -> PrismAsAffine<Self, S, A>
    where
        Self: Sized,
    {
        PrismAsAffine::new(self)
    }
}

/// A prism implemented using an extract function and a build function.
///
/// The `prism!` macro generates a `FunctionPrism` internally.
///
/// # Example
///
/// ```
/// use optica::optics::{Prism, FunctionPrism};
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Shape {
///     Circle(f64),
///     Rectangle(f64, f64),
/// }
///
/// let rectangle = FunctionPrism::new(
///     |shape: &Shape| match shape {
///         Shape::Rectangle(width, height) => Some((*width, *height)),
///         _ => None,
///     },
///     |(width, height): (f64, f64)| Shape::Rectangle(width, height),
/// );
///
/// assert_eq!(rectangle.extract(&Shape::Rectangle(3.0, 4.0)), Some((3.0, 4.0)));
/// assert_eq!(rectangle.extract(&Shape::Circle(1.0)), None);
/// ```
pub struct FunctionPrism<S, A, E, B>
where
    E: Fn(&S) -> Option<A>,
    B: Fn(A) -> S,
{
    extract_function: E,
    build_function: B,
    _marker: PhantomData<fn(S) -> A>,
}

impl<S, A, E, B> FunctionPrism<S, A, E, B>
where
    E: Fn(&S) -> Option<A>,
    B: Fn(A) -> S,
{
    /// Creates a new `FunctionPrism` from an extract function and a build function.
    ///
    /// # Arguments
    ///
    /// * `extract_function` - Returns the payload when the source is the targeted variant
    /// * `build_function` - Constructs the targeted variant from a payload
    #[must_use]
    pub const fn new(extract_function: E, build_function: B) -> Self {
        Self {
            extract_function,
            build_function,
            _marker: PhantomData,
        }
    }
}

impl<S, A, E, B> Prism<S, A> for FunctionPrism<S, A, E, B>
where
    E: Fn(&S) -> Option<A>,
    B: Fn(A) -> S,
{
    fn extract(&self, source: &S) -> Option<A> {
        (self.extract_function)(source)
    }

    fn build(&self, value: A) -> S {
        (self.build_function)(value)
    }
}

impl<S, A, E, B> Clone for FunctionPrism<S, A, E, B>
where
    E: Fn(&S) -> Option<A> + Clone,
    B: Fn(A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            extract_function: self.extract_function.clone(),
            build_function: self.build_function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, E, B> std::fmt::Debug for FunctionPrism<S, A, E, B>
where
    E: Fn(&S) -> Option<A>,
    B: Fn(A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionPrism")
            .finish_non_exhaustive()
    }
}

/// A prism composed of an outer and an inner prism.
///
/// # Type Parameters
///
/// - `P1`: The type of the outer prism
/// - `P2`: The type of the inner prism
/// - `S`: The source type of the outer prism
/// - `A`: The intermediate type (target of P1, source of P2)
///
/// The source type is carried so that helpers generic over their source,
/// such as [`ok`](super::ok) and [`some`](super::some), are resolved by the
/// value the composed prism is applied to.
pub struct ComposedPrism<P1, P2, S, A> {
    first: P1,
    second: P2,
    _marker: PhantomData<fn(S) -> A>,
}

impl<P1, P2, S, A> ComposedPrism<P1, P2, S, A> {
    /// Creates a new composed prism.
    ///
    /// # Arguments
    ///
    /// * `first` - The outer prism (focuses on the intermediate enum)
    /// * `second` - The inner prism (focuses on the final payload)
    #[must_use]
    pub const fn new(first: P1, second: P2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, P1, P2> Prism<S, B> for ComposedPrism<P1, P2, S, A>
where
    P1: Prism<S, A>,
    P2: Prism<A, B>,
{
    fn extract(&self, source: &S) -> Option<B> {
        self.first
            .extract(source)
            .and_then(|intermediate| self.second.extract(&intermediate))
    }

    fn build(&self, value: B) -> S {
        let intermediate = self.second.build(value);
        self.first.build(intermediate)
    }
}

impl<P1: Clone, P2: Clone, S, A> Clone for ComposedPrism<P1, P2, S, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<P1: std::fmt::Debug, P2: std::fmt::Debug, S, A> std::fmt::Debug
    for ComposedPrism<P1, P2, S, A>
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedPrism")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// A prism promoted to an affine optic.
///
/// `preview` is the prism's `extract`; `try_update` always succeeds with
/// `build(value)`, ignoring whatever the current source holds.
pub struct PrismAsAffine<P, S, A> {
    prism: P,
    _marker: PhantomData<fn(S) -> A>,
}

impl<P, S, A> PrismAsAffine<P, S, A> {
    /// Wraps a prism.
    #[must_use]
    pub const fn new(prism: P) -> Self {
        Self {
            prism,
            _marker: PhantomData,
        }
    }

    /// Returns the wrapped prism.
    pub fn into_inner(self) -> P {
        self.prism
    }
}

impl<P: Clone, S, A> Clone for PrismAsAffine<P, S, A> {
    fn clone(&self) -> Self {
        Self::new(self.prism.clone())
    }
}

impl<P: std::fmt::Debug, S, A> std::fmt::Debug for PrismAsAffine<P, S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("PrismAsAffine")
            .field("prism", &self.prism)
            .finish()
    }
}

impl<S, A, P> Affine<S, A> for PrismAsAffine<P, S, A>
where
    P: Prism<S, A>,
{
    fn preview(&self, source: &S) -> Option<A> {
        self.prism.extract(source)
    }

    fn try_update(&self, _source: &S, value: A) -> Option<S> {
        Some(self.prism.build(value))
    }
}

impl<S, A, E, B> IntoAffine<S, A> for FunctionPrism<S, A, E, B>
where
    E: Fn(&S) -> Option<A>,
    B: Fn(A) -> S,
{
    type Output = PrismAsAffine<Self, S, A>;

    fn into_affine(self) -> Self::Output {
        PrismAsAffine::new(self)
    }
}

impl<S, A, B, P1, P2> IntoAffine<S, B> for ComposedPrism<P1, P2, S, A>
where
    P1: Prism<S, A>,
    P2: Prism<A, B>,
{
    type Output = PrismAsAffine<Self, S, B>;

    fn into_affine(self) -> Self::Output {
        PrismAsAffine::new(self)
    }
}

/// Creates a prism for a single-field tuple variant.
///
/// The payload type must implement `Clone`, since extraction copies it out
/// of the enum. For unit, multi-field or struct variants use
/// `#[derive(Prisms)]` or `FunctionPrism::new` directly.
///
/// # Syntax
///
/// ```text
/// prism!(EnumType, VariantName)
/// prism!(EnumType<T, ...>, VariantName)
/// ```
///
/// # Example
///
/// ```
/// use optica::optics::Prism;
/// use optica::prism;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Maybe<T> {
///     Just(T),
///     Nothing,
/// }
///
/// let just = prism!(Maybe<i32>, Just);
///
/// assert_eq!(just.extract(&Maybe::Just(42)), Some(42));
/// assert_eq!(just.extract(&Maybe::Nothing), None);
/// assert_eq!(just.build(100), Maybe::Just(100));
/// ```
#[macro_export]
macro_rules! prism {
    ($enum_type:ident, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: &$enum_type| match source {
                $enum_type::$variant(value) => Some(::std::clone::Clone::clone(value)),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |value| $enum_type::$variant(value),
        )
    };
    ($enum_type:ident < $($generic:tt),+ >, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: &$enum_type<$($generic),+>| match source {
                $enum_type::$variant(value) => Some(::std::clone::Clone::clone(value)),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |value| $enum_type::$variant(value),
        )
    };
    ($enum_type:path, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: &$enum_type| match source {
                <$enum_type>::$variant(value) => Some(::std::clone::Clone::clone(value)),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |value| <$enum_type>::$variant(value),
        )
    };
}

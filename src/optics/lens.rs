//! Lens optics for focusing on struct fields.
//!
//! A Lens is a total optic: the focused part always exists, so reading never
//! fails and writing always produces a new whole value. Lenses compose with
//! lenses into lenses, and with prisms or affine optics into affine optics.
//!
//! # Laws
//!
//! Every Lens must satisfy three laws:
//!
//! 1. **GetPut Law**: Updating with the viewed value yields the original.
//!    ```text
//!    lens.update(source.clone(), lens.view(&source)) == source
//!    ```
//!
//! 2. **PutGet Law**: Viewing after an update yields the written value.
//!    ```text
//!    lens.view(&lens.update(source, value.clone())) == value
//!    ```
//!
//! 3. **PutPut Law**: Two consecutive updates are equivalent to the last one.
//!    ```text
//!    lens.update(lens.update(source, v1), v2) == lens.update(source, v2)
//!    ```
//!
//! # Examples
//!
//! ```
//! use optica::optics::{Lens, FunctionLens};
//! use optica::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Point { x: i32, y: i32 }
//!
//! let x_lens = lens!(Point, x);
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(x_lens.view(&point), 10);
//!
//! let updated = x_lens.update(point, 100);
//! assert_eq!(updated, Point { x: 100, y: 20 });
//! ```

use std::marker::PhantomData;

use super::affine::{Affine, ComposedAffine, IntoAffine};
use super::prism::{Prism, PrismAsAffine};

/// A Lens focuses on a part of a structure that is always present.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused part)
///
/// # Laws
///
/// 1. **GetPut Law**: `lens.update(source.clone(), lens.view(&source)) == source`
/// 2. **PutGet Law**: `lens.view(&lens.update(source, value.clone())) == value`
/// 3. **PutPut Law**: `lens.update(lens.update(source, v1), v2) == lens.update(source, v2)`
pub trait Lens<S, A> {
    /// Reads the focused part out of the source.
    ///
    /// # Arguments
    ///
    /// * `source` - The source structure
    ///
    /// # Returns
    ///
    /// The focused value
    fn view(&self, source: &S) -> A;

    /// Replaces the focused part, returning a new source.
    ///
    /// # Arguments
    ///
    /// * `source` - The source structure (consumed)
    /// * `value` - The new value for the focused part
    ///
    /// # Returns
    ///
    /// A new source with exactly the focused part replaced
    fn update(&self, source: S, value: A) -> S;

    /// Modifies the focused part by applying a function.
    ///
    /// Equivalent to viewing the current value, applying `function` and
    /// updating with the result.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::Lens;
    /// use optica::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Credentials { username: String, password: String }
    ///
    /// let password = lens!(Credentials, password);
    /// let form = Credentials {
    ///     username: "alice".to_string(),
    ///     password: "  secret  ".to_string(),
    /// };
    ///
    /// let trimmed = password.modify(form, |text| text.trim().to_string());
    /// assert_eq!(trimmed.password, "secret");
    /// assert_eq!(trimmed.username, "alice");
    /// ```
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        let current = self.view(&source);
        self.update(source, function(current))
    }

    /// Composes this lens with another lens to focus on a nested part.
    ///
    /// The resulting lens reads through `self` then `other`, and writes the
    /// inner part first before rebuilding the outer structure.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::Lens;
    /// use optica::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Address { street: String, city: String }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Person { name: String, address: Address }
    ///
    /// let person_street = lens!(Person, address).compose(lens!(Address, street));
    ///
    /// let person = Person {
    ///     name: "Alice".to_string(),
    ///     address: Address { street: "Main St".to_string(), city: "Tokyo".to_string() },
    /// };
    ///
    /// assert_eq!(person_street.view(&person), "Main St");
    /// let moved = person_street.update(person, "Oak Ave".to_string());
    /// assert_eq!(moved.address.street, "Oak Ave");
    /// assert_eq!(moved.address.city, "Tokyo");
    /// ```
    fn compose<B, L>(self, other: L) -> ComposedLens<Self, L, S, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedLens::new(self, other)
    }

    /// Composes this lens with a prism, yielding an affine optic.
    ///
    /// Both links are promoted to [`Affine`] before composing.
    fn compose_prism<B, P>(
        self,
        prism: P,
    ) -> ComposedAffine<LensAsAffine<Self, S, A>, PrismAsAffine<P, A, B>, S, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        ComposedAffine::new(self.to_affine(), prism.to_affine())
    }

    /// Composes this lens with an affine optic, yielding an affine optic.
    fn compose_affine<B, O>(self, affine: O) -> ComposedAffine<LensAsAffine<Self, S, A>, O, S, A>
    where
        Self: Sized,
        O: Affine<A, B>,
    {
        ComposedAffine::new(self.to_affine(), affine)
    }

    /// Promotes this lens to an affine optic whose reads and writes always succeed.
    fn to_affine(self) -> LensAsAffine<Self, S, A>
    where
        Self: Sized,
    {
        LensAsAffine::new(self)
    }
}

/// A lens implemented using a view function and an update function.
///
/// This is the most common way to create a lens. The `lens!` macro
/// generates a `FunctionLens` internally.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The target type
/// - `V`: The view function type
/// - `U`: The update function type
///
/// # Example
///
/// ```
/// use optica::optics::{Lens, FunctionLens};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = FunctionLens::new(
///     |point: &Point| point.x,
///     |point: Point, x: i32| Point { x, ..point },
/// );
///
/// let point = Point { x: 10, y: 20 };
/// assert_eq!(x_lens.view(&point), 10);
/// ```
pub struct FunctionLens<S, A, V, U>
where
    V: Fn(&S) -> A,
    U: Fn(S, A) -> S,
{
    view_function: V,
    update_function: U,
    _marker: PhantomData<fn(S) -> A>,
}

impl<S, A, V, U> FunctionLens<S, A, V, U>
where
    V: Fn(&S) -> A,
    U: Fn(S, A) -> S,
{
    /// Creates a new `FunctionLens` from a view function and an update function.
    ///
    /// # Arguments
    ///
    /// * `view_function` - Reads the focused part from the source
    /// * `update_function` - Builds a new source with the focused part replaced
    #[must_use]
    pub const fn new(view_function: V, update_function: U) -> Self {
        Self {
            view_function,
            update_function,
            _marker: PhantomData,
        }
    }
}

impl<S, A, V, U> Lens<S, A> for FunctionLens<S, A, V, U>
where
    V: Fn(&S) -> A,
    U: Fn(S, A) -> S,
{
    fn view(&self, source: &S) -> A {
        (self.view_function)(source)
    }

    fn update(&self, source: S, value: A) -> S {
        (self.update_function)(source, value)
    }
}

impl<S, A, V, U> Clone for FunctionLens<S, A, V, U>
where
    V: Fn(&S) -> A + Clone,
    U: Fn(S, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            view_function: self.view_function.clone(),
            update_function: self.update_function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, V, U> std::fmt::Debug for FunctionLens<S, A, V, U>
where
    V: Fn(&S) -> A,
    U: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionLens")
            .finish_non_exhaustive()
    }
}

/// A lens composed of an outer and an inner lens.
///
/// # Type Parameters
///
/// - `L1`: The type of the outer lens
/// - `L2`: The type of the inner lens
/// - `S`: The source type of the outer lens
/// - `A`: The intermediate type (target of L1, source of L2)
///
/// The source type is carried so that helpers generic over their source,
/// such as [`identity`](super::identity), are resolved by the value the
/// composed lens is applied to.
pub struct ComposedLens<L1, L2, S, A> {
    first: L1,
    second: L2,
    _marker: PhantomData<fn(S) -> A>,
}

impl<L1, L2, S, A> ComposedLens<L1, L2, S, A> {
    /// Creates a new composed lens.
    ///
    /// # Arguments
    ///
    /// * `first` - The outer lens (focuses on the intermediate structure)
    /// * `second` - The inner lens (focuses on the final part)
    #[must_use]
    pub const fn new(first: L1, second: L2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L1, L2> Lens<S, B> for ComposedLens<L1, L2, S, A>
where
    L1: Lens<S, A>,
    L2: Lens<A, B>,
{
    fn view(&self, source: &S) -> B {
        let intermediate = self.first.view(source);
        self.second.view(&intermediate)
    }

    fn update(&self, source: S, value: B) -> S {
        let intermediate = self.first.view(&source);
        let new_intermediate = self.second.update(intermediate, value);
        self.first.update(source, new_intermediate)
    }
}

impl<L1: Clone, L2: Clone, S, A> Clone for ComposedLens<L1, L2, S, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L1: std::fmt::Debug, L2: std::fmt::Debug, S, A> std::fmt::Debug
    for ComposedLens<L1, L2, S, A>
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedLens")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// A lens promoted to an affine optic.
///
/// `preview` always succeeds with the lens view and `try_update` always
/// succeeds with the lens update. Writing needs a clone of the source
/// because [`Affine::try_update`] borrows it.
///
/// The source and target types are carried so that a promoted helper such as
/// [`identity`](super::identity) is resolved by the chain it joins.
pub struct LensAsAffine<L, S, A> {
    lens: L,
    _marker: PhantomData<fn(S) -> A>,
}

impl<L, S, A> LensAsAffine<L, S, A> {
    /// Wraps a lens.
    #[must_use]
    pub const fn new(lens: L) -> Self {
        Self {
            lens,
            _marker: PhantomData,
        }
    }

    /// Returns the wrapped lens.
    pub fn into_inner(self) -> L {
        self.lens
    }
}

impl<L: Clone, S, A> Clone for LensAsAffine<L, S, A> {
    fn clone(&self) -> Self {
        Self::new(self.lens.clone())
    }
}

impl<L: std::fmt::Debug, S, A> std::fmt::Debug for LensAsAffine<L, S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("LensAsAffine")
            .field("lens", &self.lens)
            .finish()
    }
}

impl<S, A, L> Affine<S, A> for LensAsAffine<L, S, A>
where
    L: Lens<S, A>,
    S: Clone,
{
    fn preview(&self, source: &S) -> Option<A> {
        Some(self.lens.view(source))
    }

    fn try_update(&self, source: &S, value: A) -> Option<S> {
        Some(self.lens.update(source.clone(), value))
    }
}

impl<S, A, V, U> IntoAffine<S, A> for FunctionLens<S, A, V, U>
where
    V: Fn(&S) -> A,
    U: Fn(S, A) -> S,
    S: Clone,
{
    type Output = LensAsAffine<Self, S, A>;

    fn into_affine(self) -> Self::Output {
        LensAsAffine::new(self)
    }
}

impl<S, A, B, L1, L2> IntoAffine<S, B> for ComposedLens<L1, L2, S, A>
where
    L1: Lens<S, A>,
    L2: Lens<A, B>,
    S: Clone,
{
    type Output = LensAsAffine<Self, S, B>;

    fn into_affine(self) -> Self::Output {
        LensAsAffine::new(self)
    }
}

/// Creates a lens for a struct field.
///
/// This macro generates a `FunctionLens` that focuses on the specified field
/// of the given struct type. The field type must implement `Clone`, since
/// viewing copies the field out of the structure.
///
/// # Syntax
///
/// ```text
/// lens!(StructType, field_name)
/// lens!(StructType<T, ...>, field_name)
/// ```
///
/// # Example
///
/// ```
/// use optica::optics::Lens;
/// use optica::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = lens!(Point, x);
/// let point = Point { x: 10, y: 20 };
///
/// assert_eq!(x_lens.view(&point), 10);
/// assert_eq!(x_lens.update(point, 100), Point { x: 100, y: 20 });
/// ```
#[macro_export]
macro_rules! lens {
    ($struct_type:ident, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| ::std::clone::Clone::clone(&source.$field),
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type<$($generic),+>| ::std::clone::Clone::clone(&source.$field),
            |mut source: $struct_type<$($generic),+>, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| ::std::clone::Clone::clone(&source.$field),
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
}

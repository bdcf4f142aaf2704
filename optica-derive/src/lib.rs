//! Derive macros for optica optics.
//!
//! This crate provides procedural macros that generate lens and prism
//! constructors for user types. It is re-exported by `optica` behind the
//! default `derive` feature, so it rarely needs to be depended on directly.
//!
//! # Available Derive Macros
//!
//! - [`Lenses`]: Generates a lens constructor for each struct field
//! - [`Prisms`]: Generates a prism constructor for each enum variant
//!
//! # Example: Lenses
//!
//! ```rust,ignore
//! use optica::Lenses;
//! use optica::optics::Lens;
//!
//! #[derive(Clone, Lenses)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! // Generated methods:
//! // - Point::x_lens(): a `FunctionLens` focusing on `x: i32`
//! // - Point::y_lens(): a `FunctionLens` focusing on `y: i32`
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(Point::x_lens().view(&point), 10);
//! ```
//!
//! # Example: Prisms
//!
//! ```rust,ignore
//! use optica::Prisms;
//! use optica::optics::Prism;
//!
//! #[derive(Clone, Prisms)]
//! enum Shape {
//!     Circle(f64),
//!     Rectangle(f64, f64),
//! }
//!
//! // Generated methods:
//! // - Shape::circle_prism(): a `FunctionPrism` focusing on `f64`
//! // - Shape::rectangle_prism(): a `FunctionPrism` focusing on `(f64, f64)`
//!
//! let rectangle = Shape::Rectangle(3.0, 4.0);
//! assert_eq!(Shape::rectangle_prism().extract(&rectangle), Some((3.0, 4.0)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod lenses;
mod prisms;

use proc_macro::TokenStream;

/// Derive macro for generating lens constructors for struct fields.
///
/// For each field `foo` of type `T`, generates an associated function
/// `foo_lens()` returning a lens on that field. Viewing clones the field,
/// so each function carries a `T: Clone` bound. The lens is a concrete
/// `FunctionLens` over plain function pointers, so it is `Clone` and can be
/// promoted with `IntoAffine`.
///
/// # Requirements
///
/// - The type must be a struct with named fields
///
/// # Generated Code
///
/// ```rust,ignore
/// impl StructName {
///     pub fn foo_lens() -> FunctionLens<Self, T, fn(&Self) -> T, fn(Self, T) -> Self>
///     where
///         T: Clone,
///     { ... }
/// }
/// ```
///
/// # Generics
///
/// Generic structs are supported; call the constructor on a concrete type:
///
/// ```rust,ignore
/// #[derive(Clone, Lenses)]
/// struct Container<T> {
///     value: T,
/// }
///
/// let lens = Container::<i32>::value_lens();
/// assert_eq!(lens.view(&Container { value: 42 }), 42);
/// ```
#[proc_macro_derive(Lenses)]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    lenses::derive_lenses_impl(input)
}

/// Derive macro for generating prism constructors for enum variants.
///
/// For each variant, generates an associated function named after the
/// variant in `snake_case` with a `_prism` suffix.
///
/// # Variant Types
///
/// - **Unit variants** (e.g., `Idle`): focus on `()`
/// - **Single-field tuple variants** (e.g., `Loaded(T)`): focus on `T`
/// - **Multi-field tuple variants** (e.g., `Point(i32, i32)`): focus on `(i32, i32)`
/// - **Struct variants** (e.g., `Click { x: i32, y: i32 }`): focus on `(i32, i32)`,
///   with the payload ordered as the fields are declared; a struct variant
///   with a single field focuses on that field's type directly
///
/// Extraction clones the payload, so every payload type must be `Clone`.
/// This holds for every variant of the enum, including variants whose prism
/// is never called: each generated function clones its payload in its body
/// and is type-checked when the enum is derived. A variant holding a
/// non-`Clone` type such as `std::fs::File` makes the derive fail to
/// compile. For generic enums the `Clone` requirement on a type parameter
/// is a where-clause on the individual prism function instead, so
/// `Wrapper<T>` derives for any `T` and only the prisms that focus on `T`
/// need `T: Clone`.
///
/// # Example
///
/// ```rust,ignore
/// use optica::Prisms;
/// use optica::optics::Prism;
///
/// #[derive(Clone, Debug, PartialEq, Prisms)]
/// enum Request {
///     Ping,
///     Echo(String),
///     Move { dx: i32, dy: i32 },
/// }
///
/// assert_eq!(Request::ping_prism().extract(&Request::Ping), Some(()));
/// assert_eq!(Request::move_prism().build((1, 2)), Request::Move { dx: 1, dy: 2 });
/// ```
#[proc_macro_derive(Prisms)]
pub fn derive_prisms(input: TokenStream) -> TokenStream {
    prisms::derive_prisms_impl(input)
}

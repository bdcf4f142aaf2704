//! Optics for immutable data manipulation.
//!
//! This module provides optics - composable accessors for immutable
//! data structures. An optic focuses on one part of a larger value, so that
//! a deeply nested field can be read or replaced without writing the
//! reconstruction of every layer by hand. Every write returns a new value;
//! the original is never mutated.
//!
//! # Optics Hierarchy
//!
//! ```text
//! Lens  <: Affine
//! Prism <: Affine
//! Lens  . Prism  = Affine
//! Prism . Lens   = Affine
//! _     . Affine = Affine
//! ```
//!
//! # Available Optics
//!
//! - [`Lens`]: Focus on a part that always exists (view/update access)
//! - [`Prism`]: Focus on one variant of a sum type (extract/build access)
//! - [`Affine`]: Focus on a part that may be missing (preview/try-update access)
//! - [`ZippedLens`]: Focus on several disjoint parts at once, as a tuple
//!
//! Ready-made optics cover the usual containers: [`at`] and [`ix`] for keyed
//! maps, [`first_where`] for vectors, [`some`], [`ok`] and [`err`] for
//! `Option` and `Result`, and [`identity`].
//!
//! # Example with Lens
//!
//! ```
//! use optica::optics::Lens;
//! use optica::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { street: String, city: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, address: Address }
//!
//! let person_street = lens!(Person, address).compose(lens!(Address, street));
//!
//! let person = Person {
//!     name: "Alice".to_string(),
//!     address: Address {
//!         street: "Main St".to_string(),
//!         city: "Tokyo".to_string(),
//!     },
//! };
//!
//! assert_eq!(person_street.view(&person), "Main St");
//!
//! let updated = person_street.update(person, "Oak Ave".to_string());
//! assert_eq!(updated.address.street, "Oak Ave");
//! assert_eq!(updated.address.city, "Tokyo");
//! ```
//!
//! # Example with Prism
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
//! let circle = prism!(Shape, Circle);
//!
//! assert_eq!(circle.extract(&Shape::Circle(5.0)), Some(5.0));
//! assert_eq!(circle.extract(&Shape::Square(3.0)), None);
//! assert_eq!(circle.build(10.0), Shape::Circle(10.0));
//! ```
//!
//! # Example with Affine
//!
//! ```
//! use optica::optics::{Affine, Lens, some};
//! use optica::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Profile { nickname: Option<String> }
//!
//! let nickname = lens!(Profile, nickname).compose_prism(some());
//!
//! let named = Profile { nickname: Some("ace".to_string()) };
//! assert_eq!(nickname.preview(&named), Some("ace".to_string()));
//!
//! let anonymous = Profile { nickname: None };
//! assert_eq!(nickname.preview(&anonymous), None);
//!
//! // A prism in the last position rebuilds its case wholesale.
//! assert_eq!(
//!     nickname.try_update(&anonymous, "bob".to_string()),
//!     Some(Profile { nickname: Some("bob".to_string()) })
//! );
//! ```
//!
//! # Laws
//!
//! Each kind documents its laws on its trait: [`Lens`] has GetPut, PutGet
//! and PutPut; [`Prism`] has BuildMatch and MatchBuild; [`Affine`] has
//! PreviewUpdate and UpdatePreview. Composition preserves lawfulness, and
//! composition is associative: `a.compose(b).compose(c)` and
//! `a.compose(b.compose(c))` behave identically.

mod accessors;
mod affine;
mod lens;
mod pipe;
mod prism;
mod standard_optics;
mod zip;

// Re-export all lens-related types and traits
pub use lens::ComposedLens;
pub use lens::FunctionLens;
pub use lens::Lens;
pub use lens::LensAsAffine;

// Re-export all prism-related types and traits
pub use prism::ComposedPrism;
pub use prism::FunctionPrism;
pub use prism::Prism;
pub use prism::PrismAsAffine;

// Re-export all affine-related types and traits
pub use affine::Affine;
pub use affine::ComposedAffine;
pub use affine::FunctionAffine;
pub use affine::IntoAffine;

// Re-export parallel composition
pub use zip::ZippedLens;
pub use zip::zip;

// Re-export container accessors
pub use accessors::FirstWhere;
pub use accessors::KeyAt;
pub use accessors::KeyIx;
pub use accessors::at;
pub use accessors::first_where;
pub use accessors::ix;

// Re-export standard optics
pub use standard_optics::ErrPrism;
pub use standard_optics::Identity;
pub use standard_optics::OkPrism;
pub use standard_optics::SomePrism;
pub use standard_optics::err;
pub use standard_optics::identity;
pub use standard_optics::ok;
pub use standard_optics::some;

#[doc(hidden)]
pub use pipe::{compose_first, compose_next};

static_assertions::assert_impl_all!(Identity: Send, Sync, Copy);
static_assertions::assert_impl_all!(SomePrism: Send, Sync, Copy);
static_assertions::assert_impl_all!(KeyAt<String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(KeyIx<usize>: Send, Sync, Clone);
static_assertions::assert_impl_all!(
    ComposedAffine<
        KeyIx<String>,
        PrismAsAffine<SomePrism, Option<i32>, i32>,
        std::collections::HashMap<String, Option<i32>>,
        Option<i32>,
    >: Send, Sync, Clone
);
static_assertions::assert_impl_all!(
    ComposedLens<Identity, ZippedLens<(Identity, Identity)>, i32, i32>: Send, Sync, Clone
);

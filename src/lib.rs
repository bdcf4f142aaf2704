//! # optica
//!
//! Composable optics for immutable data: lenses, prisms and affine optics.
//!
//! ## Overview
//!
//! An optic bundles a pair of pure functions that read a focused part of a
//! larger value and rebuild the whole value with that part replaced. This
//! crate provides:
//!
//! - **Lens**: total focus on a part that always exists (a struct field)
//! - **Prism**: focus on one variant of an enum
//! - **Affine**: focus that may fail on both read and write
//! - **Composition**: sequential (`compose`, [`pipe!`], [`pipe_affine!`]) and
//!   parallel ([`zip!`]) composition, plus promotion into [`Affine`](optics::Affine)
//! - **Helpers**: keyed-map access, optional unwrap, first-matching element
//!
//! ## Feature Flags
//!
//! - `derive` (default): re-exports the `Lenses` and `Prisms` derive macros
//!
//! ## Example
//!
//! ```rust
//! use optica::prelude::*;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Account { owner: String, balance: i64 }
//!
//! let balance = lens!(Account, balance);
//! let account = Account { owner: "alice".to_string(), balance: 10 };
//!
//! let account = balance.modify(account, |amount| amount + 5);
//! assert_eq!(account.balance, 15);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the optic traits, the concrete optic types, the helper
/// constructors and the construction macros.
///
/// # Usage
///
/// ```rust
/// use optica::prelude::*;
/// ```
pub mod prelude {
    pub use crate::optics::*;
    pub use crate::{lens, pipe, pipe_affine, prism, zip};

    #[cfg(feature = "derive")]
    pub use optica_derive::{Lenses, Prisms};
}

pub mod optics;

#[cfg(feature = "derive")]
pub use optica_derive::{Lenses, Prisms};

//! Parallel composition of lenses.
//!
//! Zipping combines several lenses that share a source type into one lens
//! focused on the tuple of their targets. Viewing collects each lens's view;
//! updating applies each lens's update left to right, threading the source
//! produced by one update into the next.
//!
//! The lenses are expected to focus on disjoint parts of the source. For
//! disjoint targets the result does not depend on the order; for overlapping
//! targets the rightmost lens wins and the zipped lens is not lawful.
//!
//! Only lenses can be zipped: there is no meaningful "every variant at once"
//! for prisms or affine optics.
//!
//! # Examples
//!
//! ```
//! use optica::optics::{Lens, zip};
//! use optica::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Form { name: String, email: String, subscribed: bool }
//!
//! let contact = zip((lens!(Form, name), lens!(Form, email)));
//!
//! let form = Form {
//!     name: "Ann".to_string(),
//!     email: "ann@example.com".to_string(),
//!     subscribed: true,
//! };
//!
//! assert_eq!(
//!     contact.view(&form),
//!     ("Ann".to_string(), "ann@example.com".to_string())
//! );
//!
//! let cleared = contact.update(form, (String::new(), String::new()));
//! assert_eq!(cleared.name, "");
//! assert_eq!(cleared.email, "");
//! assert!(cleared.subscribed);
//! ```

use super::affine::IntoAffine;
use super::lens::{Lens, LensAsAffine};

/// A lens built from a tuple of lenses sharing one source type.
///
/// Implemented for tuples of 2 to 6 lenses.
#[derive(Clone, Debug)]
pub struct ZippedLens<T> {
    lenses: T,
}

impl<T> ZippedLens<T> {
    /// Creates a zipped lens from a tuple of lenses.
    #[must_use]
    pub const fn new(lenses: T) -> Self {
        Self { lenses }
    }

    /// Returns the tuple of zipped lenses.
    pub fn into_inner(self) -> T {
        self.lenses
    }
}

/// Zips a tuple of lenses into a single lens focused on the tuple of their targets.
///
/// See [`ZippedLens`].
#[must_use]
pub const fn zip<T>(lenses: T) -> ZippedLens<T> {
    ZippedLens::new(lenses)
}

macro_rules! impl_zipped_lens {
    ($(($lens:ident, $value:ident, $index:tt)),+) => {
        impl<S, $($value, $lens),+> Lens<S, ($($value,)+)> for ZippedLens<($($lens,)+)>
        where
            $($lens: Lens<S, $value>,)+
        {
            fn view(&self, source: &S) -> ($($value,)+) {
                ($(self.lenses.$index.view(source),)+)
            }

            fn update(&self, source: S, value: ($($value,)+)) -> S {
                $(let source = self.lenses.$index.update(source, value.$index);)+
                source
            }
        }

        impl<S, $($value, $lens),+> IntoAffine<S, ($($value,)+)> for ZippedLens<($($lens,)+)>
        where
            S: Clone,
            $($lens: Lens<S, $value>,)+
        {
            type Output = LensAsAffine<Self, S, ($($value,)+)>;

            fn into_affine(self) -> Self::Output {
                LensAsAffine::new(self)
            }
        }
    };
}

impl_zipped_lens!((L0, A0, 0), (L1, A1, 1));
impl_zipped_lens!((L0, A0, 0), (L1, A1, 1), (L2, A2, 2));
impl_zipped_lens!((L0, A0, 0), (L1, A1, 1), (L2, A2, 2), (L3, A3, 3));
impl_zipped_lens!(
    (L0, A0, 0),
    (L1, A1, 1),
    (L2, A2, 2),
    (L3, A3, 3),
    (L4, A4, 4)
);
impl_zipped_lens!(
    (L0, A0, 0),
    (L1, A1, 1),
    (L2, A2, 2),
    (L3, A3, 3),
    (L4, A4, 4),
    (L5, A5, 5)
);

/// Zips lenses sharing a source type into one lens on the tuple of their targets.
///
/// `zip!(a, b, c)` is shorthand for `zip((a, b, c))`.
///
/// # Example
///
/// ```
/// use optica::optics::Lens;
/// use optica::{lens, zip};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32, z: i32 }
///
/// let xz = zip!(lens!(Point, x), lens!(Point, z));
/// let moved = xz.modify(Point { x: 1, y: 2, z: 3 }, |(x, z)| (x + 10, z + 10));
/// assert_eq!(moved, Point { x: 11, y: 2, z: 13 });
/// ```
#[macro_export]
macro_rules! zip {
    ($($lens:expr),+ $(,)?) => {
        $crate::optics::ZippedLens::new(($($lens,)+))
    };
}

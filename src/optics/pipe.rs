//! Sequential composition of optic chains.
//!
//! [`pipe!`] folds a chain of optics of the same kind with `compose`, from
//! the outermost root to the innermost value. [`pipe_affine!`] does the same
//! for chains that mix kinds: every link is first promoted to an affine
//! optic through [`IntoAffine`](crate::optics::IntoAffine).
//!
//! Both macros associate to the left: `pipe!(a, b, c)` is
//! `a.compose(b).compose(c)`. Composition is associative, so this behaves
//! identically to `a.compose(b.compose(c))`.

use super::affine::{Affine, ComposedAffine, IntoAffine};

/// Composes a chain of optics of the same kind, outermost first.
///
/// `pipe!(a, b, c)` is equivalent to `a.compose(b).compose(c)`. Lens chains
/// produce a lens, prism chains a prism, and affine chains an affine optic.
/// To mix kinds, use [`pipe_affine!`](crate::pipe_affine).
///
/// # Syntax
///
/// - `pipe!(a)` - Returns `a` unchanged
/// - `pipe!(a, b)` - Returns `a.compose(b)`
/// - `pipe!(a, b, c, ...)` - Returns `a.compose(b).compose(c)...`
///
/// # Example
///
/// ```
/// use optica::optics::Lens;
/// use optica::{lens, pipe};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Street { name: String }
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Address { street: Street }
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Person { address: Address }
///
/// let street_name = pipe!(
///     lens!(Person, address),
///     lens!(Address, street),
///     lens!(Street, name),
/// );
///
/// let person = Person {
///     address: Address { street: Street { name: "Main".to_string() } },
/// };
/// assert_eq!(street_name.view(&person), "Main");
/// ```
#[macro_export]
macro_rules! pipe {
    ($optic:expr $(,)?) => {
        $optic
    };

    ($outer:expr, $inner:expr $(, $remaining:expr)* $(,)?) => {
        $crate::pipe!($outer.compose($inner) $(, $remaining)*)
    };
}

/// Composes a chain of optics of any kinds into one affine optic.
///
/// Every link is promoted with
/// [`IntoAffine::into_affine`](crate::optics::IntoAffine::into_affine)
/// before composing, so lenses, prisms and affine optics may be freely
/// mixed. Reads stop at the first absent layer; a write succeeds only when
/// every intermediate layer exists.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use optica::optics::{Affine, at, some};
/// use optica::{lens, pipe_affine, prism};
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Lookup {
///     Found(HashMap<String, u32>),
///     Missing,
/// }
///
/// let port = pipe_affine!(prism!(Lookup, Found), at("port".to_string()), some());
///
/// let found = Lookup::Found(HashMap::from([("port".to_string(), 80)]));
/// assert_eq!(port.preview(&found), Some(80));
/// assert_eq!(port.preview(&Lookup::Missing), None);
///
/// let moved = port.try_update(&found, 8080);
/// assert_eq!(port.preview(&moved.unwrap()), Some(8080));
/// ```
#[macro_export]
macro_rules! pipe_affine {
    ($optic:expr $(,)?) => {
        $crate::optics::IntoAffine::into_affine($optic)
    };

    ($outer:expr, $inner:expr $(, $remaining:expr)* $(,)?) => {
        $crate::__pipe_affine_fold!(
            $crate::optics::compose_first($outer, $inner)
            $(, $remaining)*
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __pipe_affine_fold {
    ($composed:expr) => {
        $composed
    };

    ($composed:expr, $inner:expr $(, $remaining:expr)*) => {
        $crate::__pipe_affine_fold!(
            $crate::optics::compose_next($composed, $inner)
            $(, $remaining)*
        )
    };
}

/// Promotes two links and composes them.
///
/// The source type of `inner` is pinned to the target type of `outer`, and
/// the source type of `outer` is recorded in the result, so keyed links whose
/// container type is otherwise ambiguous are resolved by their neighbours.
#[doc(hidden)]
pub fn compose_first<S, A, B, I1, I2>(
    outer: I1,
    inner: I2,
) -> ComposedAffine<I1::Output, I2::Output, S, A>
where
    I1: IntoAffine<S, A>,
    I2: IntoAffine<A, B>,
{
    ComposedAffine::new(outer.into_affine(), inner.into_affine())
}

/// Promotes `inner` and appends it to an already composed chain.
#[doc(hidden)]
pub fn compose_next<S, A, B, O, I>(outer: O, inner: I) -> ComposedAffine<O, I::Output, S, A>
where
    O: Affine<S, A>,
    I: IntoAffine<A, B>,
{
    ComposedAffine::new(outer, inner.into_affine())
}

#[cfg(test)]
mod tests {
    use crate::optics::{Affine, Lens, Prism, at, ix, some};
    use crate::{lens, prism};

    #[derive(Clone, PartialEq, Debug)]
    struct Leaf {
        value: i32,
    }

    #[derive(Clone, PartialEq, Debug)]
    struct Branch {
        leaf: Leaf,
    }

    #[derive(Clone, PartialEq, Debug)]
    struct Tree {
        branch: Branch,
        slot: Option<Branch>,
    }

    #[derive(Clone, PartialEq, Debug)]
    enum Signal {
        Level(Option<i32>),
        Off,
    }

    fn tree() -> Tree {
        Tree {
            branch: Branch {
                leaf: Leaf { value: 1 },
            },
            slot: None,
        }
    }

    #[test]
    fn test_pipe_single_optic() {
        let lens = pipe!(lens!(Leaf, value));
        assert_eq!(lens.view(&Leaf { value: 3 }), 3);
    }

    #[test]
    fn test_pipe_lens_chain() {
        let value = pipe!(
            lens!(Tree, branch),
            lens!(Branch, leaf),
            lens!(Leaf, value)
        );

        assert_eq!(value.view(&tree()), 1);
        assert_eq!(value.update(tree(), 5).branch.leaf.value, 5);
    }

    #[test]
    fn test_pipe_prism_chain() {
        let level = pipe!(prism!(Signal, Level), some());

        assert_eq!(level.extract(&Signal::Level(Some(4))), Some(4));
        assert_eq!(level.extract(&Signal::Level(None)), None);
        assert_eq!(level.extract(&Signal::Off), None);
        assert_eq!(level.build(9), Signal::Level(Some(9)));
    }

    #[test]
    fn test_pipe_affine_mixed_chain() {
        let slot_value = pipe_affine!(
            lens!(Tree, slot),
            some(),
            lens!(Branch, leaf),
            lens!(Leaf, value),
        );

        assert_eq!(slot_value.preview(&tree()), None);
        assert_eq!(slot_value.try_update(&tree(), 7), None);

        let filled = Tree {
            slot: Some(Branch {
                leaf: Leaf { value: 2 },
            }),
            ..tree()
        };
        let updated = slot_value.try_update(&filled, 7);
        assert_eq!(
            updated.and_then(|tree| tree.slot).map(|branch| branch.leaf.value),
            Some(7)
        );
    }

    #[test]
    fn test_pipe_affine_resolves_keyed_links_from_neighbours() {
        use std::collections::{BTreeMap, HashMap};

        #[derive(Clone, PartialEq, Debug)]
        struct Registry {
            groups: HashMap<String, BTreeMap<u32, Vec<i32>>>,
        }

        let cell = pipe_affine!(
            lens!(Registry, groups),
            ix("alpha".to_string()),
            at(7),
            some(),
            ix(1),
        );

        let registry = Registry {
            groups: HashMap::from([(
                "alpha".to_string(),
                BTreeMap::from([(7, vec![10, 20, 30])]),
            )]),
        };

        assert_eq!(cell.preview(&registry), Some(20));
        let updated = cell.try_update(&registry, 21);
        assert_eq!(
            updated.map(|registry| registry.groups["alpha"][&7][1]),
            Some(21)
        );
        assert_eq!(
            pipe_affine!(lens!(Registry, groups), ix("beta".to_string()), at(7))
                .try_update(&registry, None),
            None
        );
    }
}

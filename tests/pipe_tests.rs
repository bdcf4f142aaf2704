//! Tests for the `pipe!` and `pipe_affine!` macros.

use std::collections::HashMap;

use optica::optics::{Affine, Lens, Prism, at, identity, ix, ok, some};
use optica::{lens, pipe, pipe_affine, prism};
use rstest::rstest;

#[derive(Clone, PartialEq, Debug)]
struct Profile {
    display_name: String,
    email: Option<String>,
}

#[derive(Clone, PartialEq, Debug)]
struct Account {
    profile: Profile,
    flags: HashMap<String, bool>,
}

#[derive(Clone, PartialEq, Debug)]
enum Session {
    SignedIn(Account),
    Guest,
}

fn account() -> Account {
    Account {
        profile: Profile {
            display_name: "Ann".to_string(),
            email: Some("ann@example.com".to_string()),
        },
        flags: HashMap::from([("beta".to_string(), true)]),
    }
}

// =============================================================================
// pipe!
// =============================================================================

#[test]
fn test_pipe_single_link_is_unchanged() {
    let display_name = pipe!(lens!(Profile, display_name));
    assert_eq!(display_name.view(&account().profile), "Ann");
}

#[test]
fn test_pipe_lenses_gives_lens() {
    let display_name = pipe!(
        lens!(Account, profile),
        lens!(Profile, display_name),
        identity(),
    );

    assert_eq!(display_name.view(&account()), "Ann");
    let renamed = display_name.update(account(), "Anna".to_string());
    assert_eq!(renamed.profile.display_name, "Anna");
    assert_eq!(renamed.flags, account().flags);
}

#[test]
fn test_pipe_prisms_gives_prism() {
    let parsed_port = pipe!(ok(), some());
    let configured: Result<Option<u16>, String> = Ok(Some(8080));
    let unset: Result<Option<u16>, String> = Ok(None);

    assert_eq!(parsed_port.extract(&configured), Some(8080));
    assert_eq!(parsed_port.extract(&unset), None);
    assert_eq!(parsed_port.build(1), Ok::<_, String>(Some(1)));
}

// =============================================================================
// pipe_affine!
// =============================================================================

#[rstest]
#[case(Session::SignedIn(account()), Some("ann@example.com".to_string()))]
#[case(Session::Guest, None)]
fn test_pipe_affine_preview(#[case] session: Session, #[case] expected: Option<String>) {
    let email = pipe_affine!(
        prism!(Session, SignedIn),
        lens!(Account, profile),
        lens!(Profile, email),
        some(),
    );

    assert_eq!(email.preview(&session), expected);
}

#[test]
fn test_pipe_affine_write_fails_on_absent_intermediate_layer() {
    let email = pipe_affine!(
        prism!(Session, SignedIn),
        lens!(Account, profile),
        lens!(Profile, email),
        some(),
    );

    assert_eq!(email.try_update(&Session::Guest, "x@y.z".to_string()), None);
    assert_eq!(
        email.try_modify(Session::Guest, |address| address.to_uppercase()),
        Session::Guest
    );

    let changed = email.try_update(&Session::SignedIn(account()), "new@example.com".to_string());
    assert_eq!(
        changed.and_then(|session| email.preview(&session)),
        Some("new@example.com".to_string())
    );
}

#[test]
fn test_pipe_affine_trailing_prism_rebuilds_missing_case() {
    let email = pipe_affine!(
        prism!(Session, SignedIn),
        lens!(Account, profile),
        lens!(Profile, email),
        some(),
    );
    let without_email = Session::SignedIn(Account {
        profile: Profile {
            email: None,
            ..account().profile
        },
        ..account()
    });

    assert_eq!(email.preview(&without_email), None);
    assert_eq!(
        email.try_update(&without_email, "x@y.z".to_string()),
        Some(Session::SignedIn(Account {
            profile: Profile {
                email: Some("x@y.z".to_string()),
                ..account().profile
            },
            ..account()
        }))
    );
    assert_eq!(
        email.try_modify(without_email.clone(), |address| address.to_uppercase()),
        without_email
    );
}

#[test]
fn test_pipe_affine_with_keyed_links() {
    let beta = pipe_affine!(
        prism!(Session, SignedIn),
        lens!(Account, flags),
        at("beta".to_string()),
        some(),
    );
    let dark_mode = pipe_affine!(
        prism!(Session, SignedIn),
        lens!(Account, flags),
        ix("dark_mode".to_string()),
    );
    let session = Session::SignedIn(account());

    assert_eq!(beta.preview(&session), Some(true));
    assert_eq!(
        beta.try_modify(session.clone(), |enabled| !enabled),
        Session::SignedIn(Account {
            flags: HashMap::from([("beta".to_string(), false)]),
            ..account()
        })
    );
    assert_eq!(dark_mode.preview(&session), None);
    assert_eq!(dark_mode.try_modify(session.clone(), |enabled| !enabled), session);
}

#[test]
fn test_pipe_affine_single_link_promotes() {
    let display_name = pipe_affine!(lens!(Profile, display_name));
    assert_eq!(
        display_name.preview(&account().profile),
        Some("Ann".to_string())
    );
}

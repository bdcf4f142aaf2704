//! Tests for parallel composition of lenses.

use optica::optics::{Affine, IntoAffine, Lens, zip};
use optica::{lens, zip};
use proptest::prelude::*;

#[derive(Clone, PartialEq, Debug)]
struct LoginPage {
    stored_name: Option<String>,
    field_name: String,
    remember: bool,
    password: String,
    attempts: u8,
}

fn login_page() -> LoginPage {
    LoginPage {
        stored_name: Some("alice".to_string()),
        field_name: "alice".to_string(),
        remember: false,
        password: "hunter2".to_string(),
        attempts: 2,
    }
}

#[test]
fn test_zip_modify_resets_name_fields_and_keeps_flag() {
    let name_state = zip!(
        lens!(LoginPage, stored_name),
        lens!(LoginPage, field_name),
        lens!(LoginPage, remember),
    );

    let reset = name_state.modify(login_page(), |(_, _, remember)| {
        (None, String::new(), remember)
    });

    assert_eq!(
        reset,
        LoginPage {
            stored_name: None,
            field_name: String::new(),
            ..login_page()
        }
    );
}

#[test]
fn test_zip_function_and_macro_agree() {
    let from_function = zip((lens!(LoginPage, password), lens!(LoginPage, attempts)));
    let from_macro = zip!(lens!(LoginPage, password), lens!(LoginPage, attempts));

    assert_eq!(from_function.view(&login_page()), from_macro.view(&login_page()));
    assert_eq!(
        from_function.update(login_page(), (String::new(), 0)),
        from_macro.update(login_page(), (String::new(), 0))
    );
}

#[test]
fn test_zip_into_inner_returns_lenses() {
    let zipped = zip((lens!(LoginPage, attempts), lens!(LoginPage, remember)));
    let (attempts, remember) = zipped.into_inner();

    assert_eq!(attempts.view(&login_page()), 2);
    assert!(!remember.view(&login_page()));
}

#[test]
fn test_zipped_lens_composes_as_lens() {
    #[derive(Clone, PartialEq, Debug)]
    struct Screen {
        login: LoginPage,
    }

    let credentials = lens!(Screen, login).compose(zip!(
        lens!(LoginPage, field_name),
        lens!(LoginPage, password)
    ));
    let screen = Screen {
        login: login_page(),
    };

    assert_eq!(
        credentials.view(&screen),
        ("alice".to_string(), "hunter2".to_string())
    );
    let cleared = credentials.update(screen, (String::new(), String::new()));
    assert_eq!(cleared.login.field_name, "");
    assert_eq!(cleared.login.password, "");
    assert_eq!(cleared.login.attempts, 2);
}

#[test]
fn test_zipped_lens_promotes_to_affine() {
    let counters = zip!(lens!(LoginPage, attempts), lens!(LoginPage, remember)).into_affine();

    assert_eq!(counters.preview(&login_page()), Some((2, false)));
    assert_eq!(
        counters
            .try_update(&login_page(), (0, true))
            .map(|page| (page.attempts, page.remember)),
        Some((0, true))
    );
}

fn login_page_strategy() -> impl Strategy<Value = LoginPage> {
    (
        prop::option::of("[a-z]{1,6}"),
        "[a-z]{0,6}",
        any::<bool>(),
        "[a-z0-9]{0,8}",
        any::<u8>(),
    )
        .prop_map(
            |(stored_name, field_name, remember, password, attempts)| LoginPage {
                stored_name,
                field_name,
                remember,
                password,
                attempts,
            },
        )
}

proptest! {
    #[test]
    fn prop_zip_view_is_component_wise(page in login_page_strategy()) {
        let stored = lens!(LoginPage, stored_name);
        let field = lens!(LoginPage, field_name);
        let attempts = lens!(LoginPage, attempts);
        let zipped = zip((stored.clone(), field.clone(), attempts.clone()));

        prop_assert_eq!(
            zipped.view(&page),
            (stored.view(&page), field.view(&page), attempts.view(&page))
        );
    }

    #[test]
    fn prop_zip_update_is_order_independent_for_disjoint_fields(
        page in login_page_strategy(),
        password in "[a-z0-9]{0,8}",
        attempts in any::<u8>()
    ) {
        let forward = zip((lens!(LoginPage, password), lens!(LoginPage, attempts)));
        let backward = zip((lens!(LoginPage, attempts), lens!(LoginPage, password)));

        prop_assert_eq!(
            forward.update(page.clone(), (password.clone(), attempts)),
            backward.update(page, (attempts, password))
        );
    }
}

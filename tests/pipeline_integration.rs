#![cfg(all(feature = "typeclass", feature = "compose"))]
//! End-to-end pipeline test combining threading, bind, and mapping over a
//! small user-lookup fixture.

use optpipe::compose::compose_option;
use optpipe::thread_first;
use optpipe::typeclass::{Alternative, Functor, Monad, bind, bind_flip};
use rstest::rstest;

#[derive(Debug, Clone, PartialEq, Eq)]
struct User {
    id: i32,
    email: Option<String>,
}

fn parse_id(input: &str) -> Option<i32> {
    input.parse().ok()
}

fn find_user_by_id(id: i32) -> Option<User> {
    if id == 42 {
        Some(User {
            id,
            email: Some("john@appleseed.com".to_string()),
        })
    } else {
        None
    }
}

fn validate_email(email: String) -> Option<String> {
    if email.contains('@') { Some(email) } else { None }
}

fn lookup_email(input: &str) -> Option<String> {
    thread_first!(input, parse_id)
        .flat_map(find_user_by_id)
        .flat_map(|user| user.email.flat_map(validate_email))
        .fmap(|email| email.to_uppercase())
}

#[rstest]
fn known_id_resolves_to_uppercased_email() {
    assert_eq!(lookup_email("42"), Some("JOHN@APPLESEED.COM".to_string()));
}

#[rstest]
fn unknown_id_is_absent() {
    assert_eq!(lookup_email("7"), None);
}

#[rstest]
fn unparsable_id_is_absent() {
    assert_eq!(lookup_email("not-a-number"), None);
}

#[rstest]
fn missing_email_is_absent() {
    // A user without a stored email never reaches validation
    let user = User {
        id: 1,
        email: None,
    };
    let result = Some(user)
        .flat_map(|u| u.email.flat_map(validate_email))
        .fmap(|email| email.to_uppercase());
    assert_eq!(result, None);
}

#[rstest]
fn invalid_email_is_rejected() {
    let result = Some("not-an-email".to_string())
        .flat_map(validate_email)
        .fmap(|email| email.to_uppercase());
    assert_eq!(result, None);
}

#[rstest]
fn free_function_form_matches_method_form() {
    let via_methods = Some(42).flat_map(find_user_by_id);
    let via_bind = bind(Some(42), find_user_by_id);
    let via_bind_flip = bind_flip(find_user_by_id, Some(42));
    assert_eq!(via_methods.clone().fmap(|user| user.id), Some(42));
    assert_eq!(via_methods, via_bind);
    assert_eq!(via_bind, via_bind_flip);
}

#[rstest]
fn kleisli_form_matches_chained_binds() {
    let lookup = compose_option(parse_id, find_user_by_id);
    assert_eq!(lookup("42"), parse_id("42").flat_map(find_user_by_id));
    assert_eq!(lookup("oops"), None);
}

#[rstest]
fn fallback_applies_only_after_the_whole_chain_is_absent() {
    let fallback = "UNKNOWN".to_string();
    let result = lookup_email("7").alt_else(|| Some(fallback.clone()));
    assert_eq!(result, Some("UNKNOWN".to_string()));

    let hit = lookup_email("42").alt_else(|| Some(fallback));
    assert_eq!(hit, Some("JOHN@APPLESEED.COM".to_string()));
}

#![cfg(feature = "compose")]
//! Integration tests for the thread macros and composition helpers.

use optpipe::compose::{compose_option, constant, flip, identity, thread_last_partial};
use optpipe::{compose, thread_as, thread_first, thread_last};
use rstest::rstest;

fn double(x: i32) -> i32 {
    x * 2
}

fn add_one(x: i32) -> i32 {
    x + 1
}

// =============================================================================
// thread_first!
// =============================================================================

#[rstest]
fn thread_first_applies_left_to_right() {
    // double(5) = 10, add_one(10) = 11
    assert_eq!(thread_first!(5, double, add_one), 11);
}

#[rstest]
fn thread_first_is_plain_application() {
    assert_eq!(thread_first!(5, double), double(5));
}

#[rstest]
fn thread_first_chains_associate_left() {
    assert_eq!(
        thread_first!(thread_first!(5, double), add_one),
        add_one(double(5)),
    );
}

#[rstest]
fn thread_first_field_accessor() {
    struct User {
        name: String,
    }

    let user = User {
        name: "ada".to_string(),
    };
    assert_eq!(thread_first!(user, .name, |n: String| n.len()), 3);
}

#[rstest]
fn thread_first_accessor_function_equivalence() {
    struct User {
        name: String,
    }

    fn name_of(user: User) -> String {
        user.name
    }

    let via_accessor = thread_first!(
        User {
            name: "grace".to_string()
        },
        .name
    );
    let via_function = thread_first!(
        User {
            name: "grace".to_string()
        },
        name_of
    );
    assert_eq!(via_accessor, via_function);
}

// =============================================================================
// thread_last!
// =============================================================================

#[rstest]
fn thread_last_collection_pipeline() {
    fn keep_even(values: Vec<i32>) -> Vec<i32> {
        values.into_iter().filter(|n| n % 2 == 0).collect()
    }

    fn sum(values: Vec<i32>) -> i32 {
        values.into_iter().sum()
    }

    // keep_even([1,2,3,4,5]) = [2,4], sum = 6
    assert_eq!(thread_last!(vec![1, 2, 3, 4, 5], keep_even, sum), 6);
}

#[rstest]
fn thread_last_agrees_with_thread_first_for_unary() {
    assert_eq!(
        thread_last!(5, double, add_one),
        thread_first!(5, double, add_one),
    );
}

#[rstest]
fn thread_last_partial_binds_trailing_argument() {
    fn repeat(count: usize) -> impl FnOnce(&'static str) -> String {
        move |text| text.repeat(count)
    }

    let repeat_ha = thread_last_partial("ha", repeat);
    assert_eq!(repeat_ha(3), "hahaha");
}

#[rstest]
fn thread_last_partial_is_flip_of_curried_application() {
    fn subtract(minuend: i32) -> impl FnOnce(i32) -> i32 {
        move |subtrahend| minuend - subtrahend
    }

    // subtract(10)(3) via the partial form
    let subtract_three = thread_last_partial(3, subtract);
    assert_eq!(subtract_three(10), subtract(10)(3));
}

// =============================================================================
// thread_as!
// =============================================================================

#[rstest]
fn thread_as_names_each_step() {
    let result = thread_as!(
        5,
        n => n * 2,
        doubled => doubled + 1,
    );
    assert_eq!(result, 11);
}

#[rstest]
fn thread_as_agrees_with_thread_first() {
    assert_eq!(
        thread_as!(5, n => double(n), m => add_one(m)),
        thread_first!(5, double, add_one),
    );
}

#[rstest]
fn thread_as_binding_is_usable_anywhere_in_the_step() {
    let result = thread_as!(
        "world",
        name => format!("hello, {name}"),
        greeting => greeting.len(),
    );
    assert_eq!(result, 12);
}

// =============================================================================
// compose! and helpers
// =============================================================================

#[rstest]
fn compose_is_reverse_of_thread_first() {
    assert_eq!(
        compose!(add_one, double)(5),
        thread_first!(5, double, add_one),
    );
}

#[rstest]
fn compose_identity_laws() {
    let composed_left = compose!(identity, double);
    let composed_right = compose!(double, identity);
    assert_eq!(composed_left(21), double(21));
    assert_eq!(composed_right(21), double(21));
}

#[rstest]
fn constant_ignores_input() {
    let always_seven = constant::<_, i32>(7);
    assert_eq!(always_seven(0), 7);
    assert_eq!(always_seven(100), 7);
}

#[rstest]
fn flip_swaps_arguments() {
    fn subtract(minuend: i32, subtrahend: i32) -> i32 {
        minuend - subtrahend
    }

    let flipped = flip(subtract);
    assert_eq!(flipped(3, 10), subtract(10, 3));
}

// =============================================================================
// Kleisli composition
// =============================================================================

fn double_small(n: i32) -> Option<i32> {
    if n < 10 { Some(n * 2) } else { None }
}

fn below_ten(n: i32) -> Option<i32> {
    if n < 10 { Some(n) } else { None }
}

#[rstest]
fn compose_option_accepts_small_values() {
    let composed = compose_option(double_small, below_ten);
    // double_small(3) = Some(6), below_ten keeps it
    assert_eq!(composed(3), Some(6));
}

#[rstest]
fn compose_option_short_circuits_on_second_arrow() {
    let composed = compose_option(double_small, below_ten);
    // double_small(5) = Some(10), below_ten rejects values >= 10
    assert_eq!(composed(5), None);
}

#[rstest]
fn compose_option_short_circuits_on_first_arrow() {
    let composed = compose_option(double_small, below_ten);
    assert_eq!(composed(42), None);
}

#[rstest]
fn compose_option_macro_chains_left_to_right() {
    fn positive(n: i32) -> Option<i32> {
        if n > 0 { Some(n) } else { None }
    }

    let pipeline = compose_option!(double_small, below_ten, positive);
    assert_eq!(pipeline(3), Some(6));
    assert_eq!(pipeline(5), None);
    assert_eq!(pipeline(-1), None);
}

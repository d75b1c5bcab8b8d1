//! Predicate Combinators Example
//!
//! This example demonstrates how small value predicates compose into
//! larger checks.
//!
//! Run with: cargo run --example predicates

use stillcheck::predicate::*;
use stillcheck::{and, or, BuildError, Map, Value};

fn main() -> Result<(), BuildError> {
    println!("=== Predicate Combinators Example ===\n");

    type_predicates();
    logical_combinators();
    collection_predicates()?;
    strict_and_tolerant();
    Ok(())
}

/// Demonstrates type and identity predicates
fn type_predicates() {
    println!("--- Types and Identity ---\n");

    let twelve = Value::from(12);
    let text = Value::from("12");
    println!("integer()(12): {:?}", integer().check(&twelve)); // Ok(true)
    println!("integer()(\"12\"): {:?}", integer().check(&text)); // Ok(false)
    println!("similar(12)(\"12\"): {:?}", similar(12).check(&text)); // Ok(true)
    println!("exact(12)(\"12\"): {:?}", exact(12).check(&text)); // Ok(false)
    println!();
}

/// Demonstrates and/or/not/opt
fn logical_combinators() {
    println!("--- Logical Combinators ---\n");

    let negative_float = and![float(), negative()];
    for input in [Value::from(-0.1), Value::from(-1), Value::from(0.1)] {
        println!("and![float(), negative()]({input}): {:?}", negative_float.check(&input));
    }

    let number = or![float(), integer()];
    println!("or![float(), integer()](\"x\"): {:?}", number.check(&Value::from("x")));

    let maybe_positive = opt(positive());
    println!("opt(positive())(null): {:?}", maybe_positive.check(&Value::Null));
    println!(
        "not(positive())(0): {:?}",
        not(positive()).check(&Value::from(0))
    );
    println!();
}

/// Demonstrates every/any/at over a record
fn collection_predicates() -> Result<(), BuildError> {
    println!("--- Collections ---\n");

    let mut order = Map::new();
    order.insert("id", "ORD-0042");
    order.insert("quantities", vec![1, 3, 2]);
    order.insert("note", Value::Null);
    let order = Value::from(order);

    let valid_order = and![
        at("id", pattern(r"ORD-\d{4}")?),
        at("quantities", every(integer().and(range(1, 99)?)).and(length(1, 10)?)),
        at("note", opt(string().and(max_length(140)))),
    ];
    println!("order {order}");
    println!("  valid: {:?}", valid_order.check(&order));
    println!(
        "  any odd quantity: {:?}",
        at("quantities", any(odd())).check(&order)
    );
    println!();
    Ok(())
}

/// Demonstrates the two evaluation policies
fn strict_and_tolerant() {
    println!("--- Strict vs Tolerant ---\n");

    let text = Value::from("abc");
    println!("negative()(\"abc\"): {:?}", negative().check(&text)); // Err(..)
    println!("negative().matches(\"abc\"): {}", negative().matches(&text)); // false
    println!("min_length(0)(1): {:?}", min_length(0).check(&Value::from(1))); // Ok(false)
}

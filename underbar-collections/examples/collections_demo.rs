//! Collection combinators demonstration
//!
//! Walks through iteration, set algebra, stable ordering and flattening on
//! small inputs and prints each result.
//!
//! Run with: cargo run --example collections_demo

use std::collections::BTreeMap;

use underbar_collections::*;

fn section(title: &str) {
    println!("\n{title}");
    println!("{}", "=".repeat(60));
}

fn main() {
    println!("=== underbar collections ===");

    // =========================================================================
    // Iteration and reduction
    // =========================================================================
    section("each / reduce");

    let numbers = vec![1, 2, 3, 4, 5, 6, 7, 8];
    each(&numbers, |value, key, _| println!("  [{key}] = {value}"));
    println!("  sum: {}", reduce(&numbers, |acc, n| acc + n, 0));

    let prices = BTreeMap::from([
        ("apple".to_string(), 3),
        ("bread".to_string(), 5),
        ("milk".to_string(), 2),
    ]);
    each(&prices, |price, key, _| println!("  {key}: {price}"));
    println!("  total: {}", reduce(&prices, |acc, n| acc + n, 0));

    // =========================================================================
    // Derived combinators
    // =========================================================================
    section("filter / reject / map / uniq");

    println!("  evens: {:?}", filter(&numbers, |n| n % 2 == 0));
    println!("  odds: {:?}", reject(&numbers, |n| n % 2 == 0));
    println!("  doubled: {:?}", map(&numbers, |n| n * 2));
    println!("  uniq: {:?}", uniq(&[1, 2, 1, 3, 2, 4]));
    println!("  every < 10: {}", every(&numbers, |n| *n < 10));
    println!("  some > 7: {}", some(&numbers, |n| *n > 7));
    println!("  contains 5: {}", contains(&numbers, &5));

    // =========================================================================
    // Set algebra
    // =========================================================================
    section("intersection / difference");

    let stooges = intersection(&[
        vec!["moe", "curly", "larry"],
        vec!["moe", "groucho"],
        vec!["curly", "moe"],
    ]);
    println!("  intersection: {stooges:?}");
    println!(
        "  difference: {:?}",
        difference(&[1, 2, 3, 4, 5], &[vec![5, 2, 10], vec![4]])
    );

    // =========================================================================
    // Ordering and flattening
    // =========================================================================
    section("sort_by / flatten");

    let words = ["pear", "fig", "banana", "kiwi", "apple"];
    println!("  by length: {:?}", sort_by_key(&words, |w| Some(w.len())));

    let nested = vec![
        Nested::leaf(1),
        Nested::seq([
            Nested::leaf(2),
            Nested::seq([Nested::leaf(3), Nested::seq([Nested::leaf(4)])]),
        ]),
        Nested::leaf(5),
    ];
    println!("  flatten: {:?}", flatten(&nested));

    section("zip / shuffle");
    println!("  zip: {:?}", zip(&[vec!['a', 'b', 'c'], vec!['x', 'y']]));
    println!("  shuffle: {:?}", shuffle(&numbers));
}

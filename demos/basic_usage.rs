// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with diagnostics:
//   cargo run --example basic_usage --features logging

use unsigned_decimal::prelude::*;

fn demonstrate_decimal() {
    println!("=== Decimal Demonstration ===");

    // Construction
    println!("\n1. Constructors:");
    let zero = Decimal::new();
    let nines = Decimal::filled(5, 9).unwrap();
    let listed = Decimal::from_digits(&[1, 2, 3, 4, 5]).unwrap();
    let parsed: Decimal = "9876543210".parse().unwrap();
    let copied = parsed.clone();
    println!("  Default:          {}", zero);
    println!("  Filled (5 x 9):   {}", nines);
    println!("  From digits:      {}", listed);
    println!("  From string:      {}", parsed);
    println!("  Copy:             {}", copied);

    // Arithmetic
    println!("\n2. Arithmetic:");
    let a: Decimal = "12345".parse().unwrap();
    let b: Decimal = "67890".parse().unwrap();
    println!("  {} + {} = {}", a, b, a.add(&b));
    println!("  {} - {} = {}", b, a, b.checked_sub(&a).unwrap());

    // Comparison
    println!("\n3. Comparison:");
    println!("  {} > {}:  {}", a, b, a.is_greater(&b));
    println!("  {} < {}:  {}", a, b, a.is_less(&b));
    println!("  {} == {}: {}", a, a, a.is_equal(&a));

    // Assign
    println!("\n4. Assign operations:");
    let mut total: Decimal = "1000".parse().unwrap();
    let step: Decimal = "500".parse().unwrap();
    println!("  Before add assign: {}", total);
    total += &step;
    println!("  After add assign:  {}", total);
    total.checked_sub_assign(&step).unwrap();
    println!("  After sub assign:  {}", total);

    // Large numbers
    println!("\n5. Large numbers:");
    let large: Decimal = "999999999999999999".parse().unwrap();
    let one = Decimal::from(1u64);
    println!("  {} + 1 = {}", large, large.add(&one));

    // Edge cases
    println!("\n6. Edge cases:");
    println!("  0 + 0 = {}", Decimal::zero().add(&Decimal::zero()));
    let thousand: Decimal = "1000".parse().unwrap();
    let nine_nine_nine: Decimal = "999".parse().unwrap();
    println!(
        "  1000 - 999 = {}",
        thousand.checked_sub(&nine_nine_nine).unwrap()
    );
}

fn demonstrate_errors() {
    println!("\n=== Error Handling ===");

    println!("\n1. Invalid decimal string:");
    match "12a34".parse::<Decimal>() {
        Ok(d) => println!("  Unexpected value: {}", d),
        Err(e) => println!("  Rejected: {}", e),
    }

    println!("\n2. Digit index out of range:");
    let d: Decimal = "123".parse().unwrap();
    match d.digit_at(10) {
        Ok(digit) => println!("  Unexpected digit: {}", digit),
        Err(e) => println!("  Rejected: {}", e),
    }

    println!("\n3. Subtracting a larger number:");
    let small: Decimal = "100".parse().unwrap();
    let large: Decimal = "200".parse().unwrap();
    match small.checked_sub(&large) {
        Ok(d) => println!("  Unexpected value: {}", d),
        Err(e) => println!("  Rejected: {}", e),
    }
}

fn main() {
    #[cfg(feature = "logging")]
    if let Err(e) = unsigned_decimal::logging::init(tracing::Level::DEBUG) {
        eprintln!("logging disabled: {}", e);
    }

    println!("=== Unsigned Decimal Example ===\n");

    demonstrate_decimal();
    demonstrate_errors();

    println!("\n=== Done ===");
}

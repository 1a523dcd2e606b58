// ============================================================================
// Basic Usage Example
// ============================================================================

use arithmetic::prelude::*;
use rust_decimal::Decimal;
use std::sync::Arc;

fn main() {
    #[cfg(feature = "logging")]
    arithmetic::utils::init_logging("arithmetic=debug");

    println!("=== Arithmetic Example ===\n");

    // Free functions
    println!("add(2, 3)        = {}", add(2, 3));
    println!("subtract(10, 7)  = {}", subtract(10, 7));
    println!("multiply(5, 2)   = {}", multiply(5, 2));
    println!("divide(10, 5)    = {:?}", divide(10, 5));
    println!("divide(10, 0)    = {:?}", divide(10, 0));
    println!("divide(7.0, 2.0) = {:?}\n", divide(7.0, 2.0));

    // Calculator with a logging observer
    let calc: Calculator<Decimal> = CalculatorBuilder::traced("demo")
        .build(Arc::new(LoggingObserver))
        .expect("valid configuration");

    let batch = [
        (Operation::Add, Decimal::new(125, 2), Decimal::new(75, 2)),
        (Operation::Multiply, Decimal::new(15, 1), Decimal::from(4)),
        (Operation::Divide, Decimal::from(1), Decimal::from(8)),
        (Operation::Divide, Decimal::from(1), Decimal::ZERO),
    ];

    println!("Calculator '{}':", calc.label());
    for ((op, lhs, rhs), result) in batch.iter().zip(calc.evaluate_batch(&batch)) {
        match result {
            Ok(value) => println!("  {} {} {} = {}", lhs, op.symbol(), rhs, value),
            Err(err) => println!("  {} {} {} failed: {}", lhs, op.symbol(), rhs, err),
        }
    }

    println!("\n=== Example Complete ===");
}

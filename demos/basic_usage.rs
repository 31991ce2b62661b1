// ============================================================================
// Basic Usage Example
// ============================================================================

use radix_calculator::prelude::*;
use std::sync::Arc;

fn main() {
    println!("=== Radix Calculator Example ===\n");

    let mut calc = ConversionCalculator::new(Radix::Decimal, Arc::new(LoggingEventHandler));

    calc.enter("10").unwrap();
    println!("Entered 10 (base {})", calc.radix());

    let result = calc.add("5").unwrap();
    print_result("+5", result);

    // Operands now read as hexadecimal
    calc.set_radix(Radix::Hexadecimal);
    let result = calc.multiply("1A").unwrap();
    print_result("*1A (hex)", result);

    calc.set_radix(Radix::Binary);
    let result = calc.divide("1000").unwrap();
    print_result("/1000 (bin)", result);

    println!("\n=== Error Handling ===");
    match calc.divide("0") {
        Ok(_) => unreachable!(),
        Err(err) => println!("  /0 -> {} (value still {})", err, calc.format(calc.value())),
    }
    match calc.add("102") {
        Ok(_) => unreachable!(),
        Err(err) => println!("  +102 in binary -> {}", err),
    }

    calc.reset();
    println!("\nAfter reset: {:?}", calc.accumulator().state());
}

fn print_result(step: &str, value: f64) {
    println!("\n{}:", step);
    for (radix, text) in format_all(value).iter() {
        println!("  {}: {}", radix.label(), text);
    }
}

// ============================================================================
// Basic Usage Example
// ============================================================================

use generic_math::domain::FormatConfig;
use generic_math::numeric::powers_of_ten;
use generic_math::prelude::*;

fn main() -> NumericResult<()> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Generic Math Example ===\n");

    powers_of_ten::init();

    // Extended-range values
    println!("BigDouble:");
    let googol = BigDouble::new(1.0, 100);
    println!("  googol        = {}", googol);
    println!("  googol^50     = {}", googol.powi(50));
    println!("  100!          = {:.6}", BigDouble::from(100).factorial());
    println!("  e^1000        = {}", BigDouble::from(1000).exp());
    println!("  sqrt(9e400)   = {}", BigDouble::new(9.0, 400).sqrt());

    let parsed: BigDouble = "6.02e23".parse()?;
    let compact = FormatConfig::compact();
    println!("  parsed        = {}", parsed.to_string_with(&compact)?);

    // Heterogeneous record driven by runtime tags
    println!("\nPacked record:");
    let layout = [
        NumericTag::Bool,
        NumericTag::Int16,
        NumericTag::Float16,
        NumericTag::UInt32,
        NumericTag::Float64,
    ];
    let mut record = PackedRecord::with_layout(&layout)?;

    for index in 0..record.len() {
        let mut slot = record.slot(index)?;
        apply_f64(MathOperator::Set, &mut slot, 3.0)?;
        apply_f64(MathOperator::PowerAtoB, &mut slot, 2.0)?;
        apply_function_slot(MathFunction::Sqrt, &mut slot)?;
    }

    for (index, value) in record.values().enumerate() {
        let value = value?;
        println!("  [{}] {:<8} {}", index, value.tag(), value);
    }

    // Clamped update
    println!("\nClamped update:");
    let mut health = TaggedValue::Int32(80);
    let mut storage = [0u8; 4];
    {
        let mut slot = TaggedSlot::new(NumericTag::Int32, &mut storage)?;
        slot.set(health)?;
        let changed = apply_clamped(
            MathOperator::Add,
            &mut slot,
            TaggedValue::Int32(50),
            TaggedValue::Int32(0),
            TaggedValue::Int32(100),
        )?;
        health = slot.get()?;
        println!("  80 + 50 in [0, 100] = {} (changed: {})", health, changed);
    }

    let full = compare(Comparison::GreaterOrEqual, health, TaggedValue::Int32(100))?;
    println!("  full: {}", full);

    powers_of_ten::dispose();
    Ok(())
}

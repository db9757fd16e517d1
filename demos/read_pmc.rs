//! Example: Reading PMC memory
//!
//! Run with: cargo run --example read_pmc
//!
//! This example demonstrates:
//! - Reading a PMC byte and splitting it into bits
//! - Reading single bits directly
//! - Reading a range of addresses
//!
//! It runs against `SimulatedCnc`; swap in your own `Library` implementation
//! to talk to a real controller. Set `RUST_LOG=focas_pmc=trace` to see the
//! buffers go by.

use focas_pmc::utils::{byte_to_bits, format_binary, format_hex};
use focas_pmc::{AreaType, DataType, Session, SessionConfig, SimulatedCnc};
use tracing_subscriber::EnvFilter;

fn main() -> focas_pmc::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut cnc = SimulatedCnc::new();
    cnc.set_cnc_id([0x0001_0203, 0x0405_0607, 0x0809_0a0b, 0x0c0d_0e0f]);
    cnc.set_bytes(AreaType::X, 0, &[0x01, 0x00, 0x10, 0x00, 0xFF, 0x00, 0x00, 0x40]);

    let config = SessionConfig::new("172.18.0.4");
    println!("Connecting to CNC at {}:{}", config.host, config.port);
    let mut session = Session::open(cnc, config)?;
    println!("Connected to CNC with ID: {}", session.read_id()?);

    // =========================================================================
    // X7 as a byte
    // =========================================================================

    println!("\n=== Reading X7 ===\n");

    let x7 = session.read_pmc(AreaType::X, DataType::Byte.tag(), 7, 7)?[0]
        .as_int()
        .unwrap_or_default() as u8;
    println!("X7 = {} ({}) {}", x7, format_hex(x7), format_binary(x7));
    for (bit, on) in byte_to_bits(x7).iter().enumerate() {
        println!("X7.{}: {}", bit, u8::from(*on));
    }

    // =========================================================================
    // Single bits
    // =========================================================================

    println!("\n=== Reading bits ===\n");

    println!("X7.6: {}", session.read_pmc_bit(AreaType::X, 7, 6)?);
    println!("X7.7: {}", session.read_pmc_bit(AreaType::X, 7, 7)?);

    // =========================================================================
    // A range
    // =========================================================================

    println!("\n=== Reading X0-X10 ===\n");

    let values = session.read_pmc(AreaType::X, DataType::Byte.tag(), 0, 10)?;
    for (i, value) in values.iter().enumerate() {
        println!("X{}: {}", i, value);
    }

    session.close()
}

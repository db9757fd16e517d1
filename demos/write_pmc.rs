//! Example: Writing PMC memory and reading it back
//!
//! Run with: cargo run --example write_pmc -- 5
//!
//! Writes the given byte (default 0) to Y10, reads it back and compares.
//! Values outside 0-255 are rejected before anything is sent.

use focas_pmc::utils::format_binary;
use focas_pmc::{AreaType, DataType, PmcValue, Session, SessionConfig, SimulatedCnc};
use tracing_subscriber::EnvFilter;

fn main() -> focas_pmc::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let value: i64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0);

    let config = SessionConfig::new("172.18.0.4");
    println!("Connecting to CNC at {}:{}", config.host, config.port);
    let mut session = Session::open(SimulatedCnc::new(), config)?;

    // =========================================================================
    // Write Y10
    // =========================================================================

    println!("\nWriting Y10 (byte) = {}", value);
    if let Err(e) = session.write_pmc(
        AreaType::Y,
        DataType::Byte.tag(),
        10,
        10,
        &[PmcValue::Int(value)],
    ) {
        println!("Write rejected: {}", e);
        return session.close();
    }

    // =========================================================================
    // Verify
    // =========================================================================

    let read_back = session.read_pmc(AreaType::Y, DataType::Byte.tag(), 10, 10)?[0];
    println!("Read back Y10: {}", read_back);
    if read_back == PmcValue::Int(value) {
        println!("Verification successful");
    } else {
        println!("Verification FAILED: wrote {}, read {}", value, read_back);
    }

    // Single bit write keeps the other bits
    session.write_pmc_bit(AreaType::Y, 10, 7, true)?;
    if let Some(v) = session.read_pmc(AreaType::Y, DataType::Byte.tag(), 10, 10)?[0].as_int() {
        println!("Y10 after setting bit 7: {}", format_binary(v as u8));
    }

    session.close()
}

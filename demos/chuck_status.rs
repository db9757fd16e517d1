//! Example: Chuck status from X7.6 / X7.7
//!
//! Run with: cargo run --example chuck_status
//!
//! X7.6 on alone means open, X7.7 on alone means closed. Anything else is
//! reported as moving or faulted.

use focas_pmc::{AreaType, PmcAddress, Session, SessionConfig, SimulatedCnc};
use tracing_subscriber::EnvFilter;

fn main() -> focas_pmc::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let open_signal: PmcAddress = "X7.6".parse()?;
    let closed_signal: PmcAddress = "X7.7".parse()?;

    let mut cnc = SimulatedCnc::new();
    cnc.set_bytes(AreaType::X, 7, &[0b0100_0000]);

    let mut session = Session::open(cnc, SessionConfig::new("172.18.0.4"))?;

    let open = read_signal(&mut session, open_signal)?;
    let closed = read_signal(&mut session, closed_signal)?;

    match (open, closed) {
        (true, false) => println!("Chuck Open"),
        (false, true) => println!("Chuck Closed"),
        _ => println!("Chuck Moving or Error"),
    }

    session.close()
}

fn read_signal(
    session: &mut Session<SimulatedCnc>,
    signal: PmcAddress,
) -> focas_pmc::Result<bool> {
    let value = session.read_bit(signal.area, signal.bit_address()?)?;
    println!("{}: {}", signal, value);
    Ok(value)
}

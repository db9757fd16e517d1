//! # FANUC FOCAS PMC Library
//!
//! Typed access to FANUC CNC PMC memory through the FOCAS library.
//!
//! The crate converts typed values to and from the packed buffers that the
//! vendor `pmc_rdpmcrng` / `pmc_wrpmcrng` calls exchange, and wraps the
//! library's process and connection lifecycle in a [`Session`]. It never
//! speaks the network protocol itself: calls cross the [`Library`] trait,
//! which you implement over your own bindings.
//!
//! ## Features
//!
//! - **Validated buffers**: data type, range size and every value are
//!   checked before a buffer is allocated or the library is called
//! - **Typed areas and values**: [`AreaType`], [`DataType`], [`PmcValue`]
//! - **Scoped lifecycle**: startup and connect are paired with disconnect
//!   and shutdown, including on error paths
//! - **No panics**: all errors are returned as `Result<T, FocasError>`
//! - **Simulator**: [`SimulatedCnc`] for tests and demos
//!
//! ## Quick Start
//!
//! ```
//! use focas_pmc::{AreaType, PmcValue, Session, SessionConfig, SimulatedCnc};
//!
//! fn main() -> focas_pmc::Result<()> {
//!     let config = SessionConfig::new("192.168.1.10");
//!     let mut session = Session::open(SimulatedCnc::new(), config)?;
//!
//!     // Y10 as a byte
//!     session.write_pmc(AreaType::Y, 0, 10, 10, &[PmcValue::Int(1)])?;
//!     let values = session.read_pmc(AreaType::Y, 0, 10, 10)?;
//!     assert_eq!(values, vec![PmcValue::Int(1)]);
//!
//!     // X7.6
//!     let open = session.read_pmc_bit(AreaType::X, 7, 6)?;
//!     println!("chuck open: {}", open);
//!
//!     session.close()
//! }
//! ```
//!
//! ## Buffer Codec
//!
//! The codec works without a session:
//!
//! ```
//! use focas_pmc::codec::{decode_range, encode_range};
//! use focas_pmc::{AddressRange, AreaType, PmcValue};
//!
//! let range = AddressRange::new(10, 11).unwrap();
//! let values = [PmcValue::Int(1), PmcValue::Int(2)];
//! let buffer = encode_range(AreaType::Y, &values, 1, range).unwrap();
//! assert_eq!(buffer.len(), 12);
//!
//! let decoded = decode_range(buffer.as_bytes(), 1, 2).unwrap();
//! assert_eq!(decoded, values);
//! ```
//!
//! ## Data Types
//!
//! | Tag | Type | Width | Range |
//! |----:|------|------:|-------|
//! | 0 | Byte | 1 | 0 to 255 |
//! | 1 | Word | 2 | -32768 to 32767 |
//! | 2 | Long | 4 | -2147483648 to 2147483647 |
//! | 4 | Float32 | 4 | any number |
//! | 5 | Float64 | 8 | any number |
//!
//! Tag 3 is not a data type.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (session lifecycle at `debug`, buffer
//! details at `trace`, cleanup failures at `warn`). Install a subscriber in
//! your application to see them.
//!
//! ## Error Handling
//!
//! ```
//! use focas_pmc::{AreaType, FocasError, Session, SessionConfig, SimulatedCnc};
//!
//! let mut session = Session::open(SimulatedCnc::new(), SessionConfig::default()).unwrap();
//! match session.read_pmc(AreaType::X, 3, 0, 0) {
//!     Err(FocasError::InvalidDataType { tag }) => assert_eq!(tag, 3),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

mod area;
pub mod codec;
mod data;
mod error;
mod header;
mod library;
mod session;
mod sim;
pub mod utils;

// Public re-exports
pub use area::{AreaType, PmcAddress};
pub use codec::{buffer_len, wire_len, PmcBuffer};
pub use data::{DataType, PmcValue};
pub use error::{FocasError, Result};
pub use header::{AddressRange, BitAddress, PmcHeader, PMC_HEADER_SIZE};
pub use library::{
    Handle, Library, PositionInfo, ProgramNumber, SpeedInfo, StatusInfo, EW_ATTRIB, EW_DATA,
    EW_HANDLE, EW_LENGTH, EW_NUMBER, EW_OK, EW_SOCKET,
};
pub use session::{
    OperationMode, Session, SessionConfig, DEFAULT_FOCAS_PORT, DEFAULT_LOG_FILE, DEFAULT_TIMEOUT,
};
pub use sim::SimulatedCnc;

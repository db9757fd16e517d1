//! Scoped FOCAS sessions.
//!
//! This module provides [`Session`], the primary interface for reading and
//! writing PMC memory on a FANUC CNC, and [`SessionConfig`] to describe the
//! connection.
//!
//! # Overview
//!
//! A session owns one connection handle plus the library process state that
//! goes with it. Opening a session starts the library and connects; closing
//! it disconnects and shuts the library down again. Closing is explicit via
//! [`Session::close`], and falls back to `Drop` if the session goes out of
//! scope first.
//!
//! Every PMC operation validates its arguments and builds its buffer through
//! the [`codec`](crate::codec) before the library is called. Invalid input
//! never reaches the CNC.
//!
//! # Example
//!
//! ```
//! use focas_pmc::{AreaType, DataType, PmcValue, Session, SessionConfig, SimulatedCnc};
//!
//! let config = SessionConfig::new("192.168.1.10");
//! let mut session = Session::open(SimulatedCnc::new(), config)?;
//!
//! // Write Y10 and read it back
//! session.write_pmc(AreaType::Y, DataType::Byte.tag(), 10, 10, &[PmcValue::Int(1)])?;
//! let values = session.read_pmc(AreaType::Y, DataType::Byte.tag(), 10, 10)?;
//! assert_eq!(values, vec![PmcValue::Int(1)]);
//!
//! // Read a single bit
//! assert!(session.read_pmc_bit(AreaType::Y, 10, 0)?);
//!
//! session.close()?;
//! # Ok::<(), focas_pmc::FocasError>(())
//! ```
//!
//! # Thread Safety
//!
//! All operations take `&mut self`: one session performs one transfer at a
//! time, and its buffers are never shared.

use std::str::FromStr;
use std::time::Duration;

use tracing::{debug, trace, warn};

use crate::area::AreaType;
use crate::codec::{decode_bit, decode_range, encode_range, wire_len};
use crate::data::{DataType, PmcValue};
use crate::error::{FocasError, Result};
use crate::header::{AddressRange, BitAddress};
use crate::library::{Handle, Library, PositionInfo, ProgramNumber, SpeedInfo, StatusInfo};
use crate::utils::set_bit;

/// Default FOCAS TCP port.
pub const DEFAULT_FOCAS_PORT: u16 = 8193;

/// Default connection timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default library log file.
pub const DEFAULT_LOG_FILE: &str = "focas.log";

/// Configuration for opening a session.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionConfig {
    /// CNC host name or IP address.
    pub host: String,
    /// CNC port.
    pub port: u16,
    /// Connection timeout.
    pub timeout: Duration,
    /// Log file handed to library startup.
    pub log_file: String,
}

impl SessionConfig {
    /// Creates a configuration for `host` with default port, timeout and log file.
    ///
    /// # Example
    ///
    /// ```
    /// use focas_pmc::SessionConfig;
    ///
    /// let config = SessionConfig::new("172.18.0.4");
    /// assert_eq!(config.port, 8193);
    /// ```
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_FOCAS_PORT,
            timeout: DEFAULT_TIMEOUT,
            log_file: DEFAULT_LOG_FILE.to_string(),
        }
    }

    /// Sets a custom port (default is 8193).
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets a custom connection timeout (default is 10 seconds).
    ///
    /// # Example
    ///
    /// ```
    /// use focas_pmc::SessionConfig;
    /// use std::time::Duration;
    ///
    /// let config = SessionConfig::new("172.18.0.4")
    ///     .with_port(8194)
    ///     .with_timeout(Duration::from_secs(3));
    /// ```
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the library log file (default is `focas.log`).
    pub fn with_log_file(mut self, log_file: impl Into<String>) -> Self {
        self.log_file = log_file.into();
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new("127.0.0.1")
    }
}

/// Operator panel mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OperationMode {
    /// Manual data input.
    Mdi,
    /// Automatic operation.
    Auto,
    /// Manual jog.
    Jog,
}

impl OperationMode {
    /// Returns the panel signal code for this mode.
    pub fn signal_code(self) -> i16 {
        match self {
            OperationMode::Mdi => 1,
            OperationMode::Auto => 2,
            OperationMode::Jog => 3,
        }
    }
}

impl FromStr for OperationMode {
    type Err = FocasError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "mdi" => Ok(OperationMode::Mdi),
            "auto" => Ok(OperationMode::Auto),
            "jog" => Ok(OperationMode::Jog),
            _ => Err(FocasError::InvalidMode {
                mode: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for OperationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperationMode::Mdi => write!(f, "mdi"),
            OperationMode::Auto => write!(f, "auto"),
            OperationMode::Jog => write!(f, "jog"),
        }
    }
}

/// An open connection to a CNC.
///
/// Each operation produces exactly one library call (two for
/// [`Session::write_pmc_bit`]). No automatic retries or reconnection.
pub struct Session<L: Library> {
    library: L,
    handle: Handle,
    config: SessionConfig,
    open: bool,
}

impl<L: Library> Session<L> {
    /// Starts the library and connects to the CNC.
    ///
    /// If the connection fails, the library is shut down again before the
    /// error is returned.
    ///
    /// # Errors
    ///
    /// Returns `FocasError::ExternalCallFailed` if startup or connect fails.
    pub fn open(mut library: L, config: SessionConfig) -> Result<Self> {
        library.startup(&config.log_file)?;

        let handle = match library.connect(&config.host, config.port, config.timeout) {
            Ok(handle) => handle,
            Err(e) => {
                if let Err(shutdown_err) = library.shutdown() {
                    warn!(error = %shutdown_err, "library shutdown failed after connect error");
                }
                return Err(e);
            }
        };

        debug!(
            host = %config.host,
            port = config.port,
            handle = handle.0,
            "FOCAS session opened"
        );

        Ok(Self {
            library,
            handle,
            config,
            open: true,
        })
    }

    /// Disconnects and shuts the library down.
    ///
    /// Both steps are attempted; the first error is returned.
    pub fn close(mut self) -> Result<()> {
        self.release()
    }

    fn release(&mut self) -> Result<()> {
        if !self.open {
            return Ok(());
        }
        self.open = false;

        let disconnected = self.library.disconnect(self.handle);
        let shut_down = self.library.shutdown();
        debug!(host = %self.config.host, handle = self.handle.0, "FOCAS session closed");
        disconnected.and(shut_down)
    }

    /// Returns the connection handle.
    pub fn handle(&self) -> Handle {
        self.handle
    }

    /// Returns the configuration the session was opened with.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns a reference to the underlying library.
    pub fn library(&self) -> &L {
        &self.library
    }

    /// Returns a mutable reference to the underlying library.
    pub fn library_mut(&mut self) -> &mut L {
        &mut self.library
    }

    /// Reads a PMC range using a raw data type tag.
    ///
    /// # Arguments
    ///
    /// * `area` - PMC area
    /// * `data_type` - Data type tag (0 byte, 1 word, 2 long, 4 float, 5 double)
    /// * `start` - First address
    /// * `end` - Last address (inclusive)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The tag is invalid (`InvalidDataType`)
    /// - `end < start` (`InvalidRange`)
    /// - The buffer would not fit 16 bits (`RangeTooLarge`)
    /// - The library call fails (`ExternalCallFailed`)
    /// - The returned buffer is malformed (`InvalidBuffer`)
    pub fn read_pmc(
        &mut self,
        area: AreaType,
        data_type: i16,
        start: u16,
        end: u16,
    ) -> Result<Vec<PmcValue>> {
        let data_type = DataType::from_tag(data_type)?;
        let range = AddressRange::new(start, end)?;
        self.read_range(area, data_type, range)
    }

    /// Reads a PMC range.
    ///
    /// # Example
    ///
    /// ```
    /// use focas_pmc::{AddressRange, AreaType, DataType, Session, SessionConfig, SimulatedCnc};
    ///
    /// let mut session = Session::open(SimulatedCnc::new(), SessionConfig::default())?;
    /// let values = session.read_range(AreaType::X, DataType::Byte, AddressRange::new(0, 10)?)?;
    /// assert_eq!(values.len(), 11);
    /// # Ok::<(), focas_pmc::FocasError>(())
    /// ```
    pub fn read_range(
        &mut self,
        area: AreaType,
        data_type: DataType,
        range: AddressRange,
    ) -> Result<Vec<PmcValue>> {
        let length = wire_len(data_type, range.count())?;

        debug!(%area, %data_type, %range, "reading PMC range");
        let bytes = self.library.read_pmc_range(
            self.handle,
            area,
            data_type.tag(),
            range.start(),
            range.end(),
            length,
        )?;
        trace!(len = bytes.len(), "PMC range received");

        decode_range(&bytes, data_type.tag(), range.count())
    }

    /// Reads one bit of a PMC byte.
    ///
    /// The bit position is checked before the library is called.
    ///
    /// # Errors
    ///
    /// Returns `FocasError::InvalidBitPosition` if bit > 7, or any error from
    /// the underlying byte read.
    pub fn read_pmc_bit(&mut self, area: AreaType, address: u16, bit: u8) -> Result<bool> {
        self.read_bit(area, BitAddress::new(address, bit)?)
    }

    /// Reads the PMC bit selected by `target`.
    ///
    /// # Example
    ///
    /// ```
    /// use focas_pmc::{AreaType, BitAddress, Session, SessionConfig, SimulatedCnc};
    ///
    /// let mut cnc = SimulatedCnc::new();
    /// cnc.set_bytes(AreaType::X, 7, &[0b0100_0000]);
    ///
    /// let mut session = Session::open(&mut cnc, SessionConfig::default())?;
    /// assert!(session.read_bit(AreaType::X, BitAddress::new(7, 6)?)?);
    /// # Ok::<(), focas_pmc::FocasError>(())
    /// ```
    pub fn read_bit(&mut self, area: AreaType, target: BitAddress) -> Result<bool> {
        let data_type = DataType::Byte;

        debug!(%area, %target, "reading PMC bit");
        let bytes = self.library.read_pmc_range(
            self.handle,
            area,
            data_type.tag(),
            target.address(),
            target.address(),
            wire_len(data_type, 1)?,
        )?;

        decode_bit(&bytes, target.bit())
    }

    /// Writes a PMC range using a raw data type tag.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The tag is invalid (`InvalidDataType`)
    /// - `end < start` (`InvalidRange`)
    /// - `values` does not match the range (`RangeSizeMismatch`)
    /// - A value does not fit the data type
    /// - The library call fails (`ExternalCallFailed`)
    pub fn write_pmc(
        &mut self,
        area: AreaType,
        data_type: i16,
        start: u16,
        end: u16,
        values: &[PmcValue],
    ) -> Result<()> {
        let data_type = DataType::from_tag(data_type)?;
        let range = AddressRange::new(start, end)?;
        self.write_range(area, data_type, range, values)
    }

    /// Writes a PMC range.
    pub fn write_range(
        &mut self,
        area: AreaType,
        data_type: DataType,
        range: AddressRange,
        values: &[PmcValue],
    ) -> Result<()> {
        wire_len(data_type, range.count())?;
        let buffer = encode_range(area, values, data_type.tag(), range)?;

        debug!(%area, %data_type, %range, "writing PMC range");
        trace!(len = buffer.len(), "PMC buffer encoded");
        self.library.write_pmc_range(self.handle, buffer.as_bytes())
    }

    /// Sets or clears one bit of a PMC byte.
    ///
    /// # Errors
    ///
    /// Returns `FocasError::InvalidBitPosition` if bit > 7, before any
    /// library call.
    pub fn write_pmc_bit(
        &mut self,
        area: AreaType,
        address: u16,
        bit: u8,
        value: bool,
    ) -> Result<()> {
        self.write_bit(area, BitAddress::new(address, bit)?, value)
    }

    /// Sets or clears the PMC bit selected by `target`.
    ///
    /// Reads the byte, changes the bit and writes the byte back. Other bits
    /// of the byte are preserved only if nothing else writes it in between.
    pub fn write_bit(&mut self, area: AreaType, target: BitAddress, value: bool) -> Result<()> {
        let range = AddressRange::single(target.address());

        let current = match self.read_range(area, DataType::Byte, range)?.first() {
            Some(PmcValue::Int(v)) => *v as u8,
            _ => return Err(FocasError::invalid_buffer("byte read returned no integer")),
        };
        let updated = set_bit(current, target.bit(), value);

        self.write_range(area, DataType::Byte, range, &[PmcValue::Int(updated as i64)])
    }

    /// Reads the CNC ID as `xxxxxxxx-xxxxxxxx-xxxxxxxx-xxxxxxxx`.
    pub fn read_id(&mut self) -> Result<String> {
        let ids = self.library.read_cnc_id(self.handle)?;
        Ok(format!(
            "{:08x}-{:08x}-{:08x}-{:08x}",
            ids[0], ids[1], ids[2], ids[3]
        ))
    }

    /// Reads the controller status.
    pub fn read_status(&mut self) -> Result<StatusInfo> {
        self.library.read_status(self.handle)
    }

    /// Reads axis positions.
    pub fn read_position(&mut self) -> Result<PositionInfo> {
        self.library.read_position(self.handle)
    }

    /// Reads actual feed rate and spindle speed.
    pub fn read_spindle(&mut self) -> Result<SpeedInfo> {
        self.library.read_speed(self.handle)
    }

    /// Reads the running and main program numbers.
    pub fn read_program_number(&mut self) -> Result<ProgramNumber> {
        self.library.read_program_number(self.handle)
    }

    /// Sends an MDI program.
    pub fn write_mdi_program(&mut self, program: &str) -> Result<()> {
        debug!(len = program.len(), "writing MDI program");
        self.library.write_mdi_program(self.handle, program)
    }

    /// Sends a JOG MDI command.
    pub fn write_jog_mdi(&mut self, command: &str) -> Result<()> {
        self.library.write_jog_mdi(self.handle, command)
    }

    /// Switches the operator panel mode.
    ///
    /// # Example
    ///
    /// ```
    /// use focas_pmc::{OperationMode, Session, SessionConfig, SimulatedCnc};
    ///
    /// let mut session = Session::open(SimulatedCnc::new(), SessionConfig::default())?;
    /// session.set_mode("mdi".parse()?)?;
    /// assert!(session.read_status()?.is_mdi());
    /// # Ok::<(), focas_pmc::FocasError>(())
    /// ```
    pub fn set_mode(&mut self, mode: OperationMode) -> Result<()> {
        debug!(%mode, "setting operation mode");
        self.library.write_panel_mode(self.handle, mode.signal_code())
    }

    /// Sends cycle start.
    pub fn cycle_start(&mut self) -> Result<()> {
        self.library.cycle_start(self.handle)
    }
}

impl<L: Library> Drop for Session<L> {
    fn drop(&mut self) {
        if let Err(e) = self.release() {
            warn!(error = %e, "FOCAS session release failed");
        }
    }
}

impl<L: Library> std::fmt::Debug for Session<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("host", &self.config.host)
            .field("port", &self.config.port)
            .field("handle", &self.handle)
            .field("open", &self.open)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::{EW_DATA, EW_SOCKET};
    use crate::sim::SimulatedCnc;

    fn open(sim: &mut SimulatedCnc) -> Session<&mut SimulatedCnc> {
        Session::open(sim, SessionConfig::new("127.0.0.1")).unwrap()
    }

    #[test]
    fn test_config_defaults() {
        let config = SessionConfig::new("172.18.0.4");
        assert_eq!(config.host, "172.18.0.4");
        assert_eq!(config.port, DEFAULT_FOCAS_PORT);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert_eq!(config.log_file, "focas.log");
    }

    #[test]
    fn test_config_builders() {
        let config = SessionConfig::new("cnc")
            .with_port(8194)
            .with_timeout(Duration::from_secs(3))
            .with_log_file("/tmp/focas.log");
        assert_eq!(config.port, 8194);
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.log_file, "/tmp/focas.log");
    }

    #[test]
    fn test_operation_mode_parse() {
        assert_eq!("mdi".parse::<OperationMode>().unwrap(), OperationMode::Mdi);
        assert_eq!("auto".parse::<OperationMode>().unwrap().signal_code(), 2);
        assert_eq!("jog".parse::<OperationMode>().unwrap().signal_code(), 3);
        assert_eq!(
            "edit".parse::<OperationMode>(),
            Err(FocasError::InvalidMode {
                mode: "edit".to_string()
            })
        );
    }

    #[test]
    fn test_open_close_pairs_library_calls() {
        let mut sim = SimulatedCnc::new();
        {
            let session = open(&mut sim);
            session.close().unwrap();
        }
        assert!(!sim.is_started());
        assert_eq!(sim.connection_count(), 0);
        assert_eq!(sim.call_count(), 4);
    }

    #[test]
    fn test_drop_releases() {
        let mut sim = SimulatedCnc::new();
        {
            let _session = open(&mut sim);
        }
        assert!(!sim.is_started());
        assert_eq!(sim.connection_count(), 0);
    }

    #[test]
    fn test_connect_failure_shuts_down() {
        let mut sim = SimulatedCnc::new();
        sim.fail_on("cnc_allclibhndl3", EW_SOCKET);
        let result = Session::open(&mut sim, SessionConfig::default());
        assert_eq!(
            result.unwrap_err(),
            FocasError::external("cnc_allclibhndl3", EW_SOCKET)
        );
        assert!(!sim.is_started());
    }

    #[test]
    fn test_read_write_roundtrip() {
        let mut sim = SimulatedCnc::new();
        let mut session = open(&mut sim);

        let values = [PmcValue::Int(-1), PmcValue::Int(300), PmcValue::Int(7)];
        session.write_pmc(AreaType::D, 1, 100, 102, &values).unwrap();
        assert_eq!(session.read_pmc(AreaType::D, 1, 100, 102).unwrap(), values);

        let floats = [PmcValue::Float(1.5), PmcValue::Float(-2.25)];
        session.write_pmc(AreaType::R, 5, 0, 1, &floats).unwrap();
        assert_eq!(session.read_pmc(AreaType::R, 5, 0, 1).unwrap(), floats);
    }

    #[test]
    fn test_read_bit() {
        let mut sim = SimulatedCnc::new();
        sim.set_bytes(AreaType::X, 7, &[0b0100_0000]);
        let mut session = open(&mut sim);

        assert!(session.read_pmc_bit(AreaType::X, 7, 6).unwrap());
        assert!(!session.read_pmc_bit(AreaType::X, 7, 7).unwrap());
    }

    #[test]
    fn test_typed_bit_operations() {
        let mut sim = SimulatedCnc::new();
        let target = BitAddress::new(10, 5).unwrap();
        {
            let mut session = open(&mut sim);
            session.write_bit(AreaType::Y, target, true).unwrap();
            assert!(session.read_bit(AreaType::Y, target).unwrap());
            assert!(!session.read_pmc_bit(AreaType::Y, 10, 4).unwrap());
        }
        assert_eq!(sim.bytes(AreaType::Y, 10, 1), vec![0b0010_0000]);
    }

    #[test]
    fn test_read_position() {
        let mut sim = SimulatedCnc::new();
        let position = PositionInfo {
            absolute: 12_500,
            machine: -3_000,
            relative: 250,
            distance: 40,
        };
        sim.set_position(position);

        let mut session = open(&mut sim);
        assert_eq!(session.read_position().unwrap(), position);
    }

    #[test]
    fn test_invalid_input_never_reaches_library() {
        let mut sim = SimulatedCnc::new();
        let calls_before;
        {
            let mut session = open(&mut sim);
            calls_before = session.library().call_count();

            assert_eq!(
                session.read_pmc_bit(AreaType::X, 7, 8),
                Err(FocasError::InvalidBitPosition { bit: 8 })
            );
            assert_eq!(
                session.write_pmc_bit(AreaType::X, 7, 9, true),
                Err(FocasError::InvalidBitPosition { bit: 9 })
            );
            assert_eq!(
                session.read_pmc(AreaType::D, 3, 0, 0),
                Err(FocasError::InvalidDataType { tag: 3 })
            );
            assert_eq!(
                session.write_pmc(AreaType::D, 6, 0, 0, &[PmcValue::Int(0)]),
                Err(FocasError::InvalidDataType { tag: 6 })
            );
            assert_eq!(
                session.read_pmc(AreaType::D, 0, 5, 4),
                Err(FocasError::InvalidRange { start: 5, end: 4 })
            );
            assert_eq!(
                session.write_pmc(AreaType::Y, 0, 0, 2, &[PmcValue::Int(1)]),
                Err(FocasError::range_size_mismatch(3, 1))
            );
            assert_eq!(
                session.write_pmc(AreaType::Y, 0, 0, 0, &[PmcValue::Int(256)]),
                Err(FocasError::value_out_of_range(0, 256, 0, 255))
            );
            assert!(matches!(
                session.read_pmc(AreaType::D, 5, 0, 9000),
                Err(FocasError::RangeTooLarge { .. })
            ));

            assert_eq!(session.library().call_count(), calls_before);
        }
    }

    #[test]
    fn test_external_failure_surfaces_code() {
        let mut sim = SimulatedCnc::new();
        let mut session = open(&mut sim);
        session.library_mut().fail_on("pmc_rdpmcrng", EW_DATA);

        let err = session.read_pmc(AreaType::D, 0, 0, 0).unwrap_err();
        assert_eq!(err, FocasError::external("pmc_rdpmcrng", EW_DATA));
        assert_eq!(err.external_code(), Some(EW_DATA));
    }

    #[test]
    fn test_write_bit_preserves_other_bits() {
        let mut sim = SimulatedCnc::new();
        sim.set_bytes(AreaType::Y, 10, &[0b1000_0001]);
        {
            let mut session = open(&mut sim);
            session.write_pmc_bit(AreaType::Y, 10, 3, true).unwrap();
            session.write_pmc_bit(AreaType::Y, 10, 0, false).unwrap();
        }
        assert_eq!(sim.bytes(AreaType::Y, 10, 1), vec![0b1000_1000]);
    }

    #[test]
    fn test_cnc_operations() {
        let mut sim = SimulatedCnc::new();
        sim.set_cnc_id([0x1, 0xdeadbeef, 0x20, 0xffffffff]);
        sim.set_speed(SpeedInfo {
            feed: 1200,
            spindle: 3000,
        });
        sim.set_program_number(ProgramNumber {
            running: 1234,
            main: 1000,
        });
        {
            let mut session = open(&mut sim);
            assert_eq!(
                session.read_id().unwrap(),
                "00000001-deadbeef-00000020-ffffffff"
            );
            assert_eq!(session.read_spindle().unwrap().spindle, 3000);
            assert_eq!(session.read_program_number().unwrap().running, 1234);

            session.set_mode(OperationMode::Auto).unwrap();
            assert!(session.read_status().unwrap().is_auto());
            session.set_mode(OperationMode::Jog).unwrap();
            assert!(session.read_status().unwrap().is_jog());

            session.write_mdi_program("G00 X10.0;").unwrap();
            session.write_jog_mdi("G91 X1.0;").unwrap();
            session.cycle_start().unwrap();
        }
        assert_eq!(sim.last_mdi_program(), Some("G00 X10.0;"));
        assert_eq!(sim.last_jog_command(), Some("G91 X1.0;"));
        assert_eq!(sim.cycle_starts(), 1);
    }

    #[test]
    fn test_session_debug() {
        let mut sim = SimulatedCnc::new();
        let session = open(&mut sim);
        let debug_str = format!("{:?}", session);
        assert!(debug_str.contains("Session"));
        assert!(debug_str.contains("127.0.0.1"));
    }
}

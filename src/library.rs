//! The FOCAS library boundary.
//!
//! [`Library`] stands in for the vendor `fwlib32` calls. This crate never
//! speaks the on-wire protocol; it hands fully formed buffers across this
//! boundary and decodes what comes back. Implement the trait over your own
//! bindings, or use [`SimulatedCnc`](crate::SimulatedCnc) for tests.
//!
//! Each method maps to one vendor call:
//!
//! | Method | Vendor call |
//! |--------|-------------|
//! | `startup` / `shutdown` | `cnc_startupprocess` / `cnc_exitprocess` |
//! | `connect` / `disconnect` | `cnc_allclibhndl3` / `cnc_freelibhndl` |
//! | `read_pmc_range` / `write_pmc_range` | `pmc_rdpmcrng` / `pmc_wrpmcrng` |
//! | `read_cnc_id` | `cnc_rdcncid` |
//! | `read_status` | `cnc_statinfo` |
//! | `read_position` | `cnc_rdposition` |
//! | `read_speed` | `cnc_rdspeed` |
//! | `read_program_number` | `cnc_rdprgnum` |
//! | `write_mdi_program` | `cnc_wrmdiprog` |
//! | `write_jog_mdi` | `cnc_wrjogmdi` |
//! | `write_panel_mode` | `cnc_wropnlsgnl` |
//! | `cycle_start` | `cnc_start` |
//!
//! A nonzero vendor return code must be reported as
//! [`FocasError::ExternalCallFailed`](crate::FocasError::ExternalCallFailed).

use std::time::Duration;

use crate::area::AreaType;
use crate::error::Result;

/// Vendor return code for success.
pub const EW_OK: i16 = 0;
/// Vendor return code: socket/communication error.
pub const EW_SOCKET: i16 = -16;
/// Vendor return code: invalid handle.
pub const EW_HANDLE: i16 = -8;
/// Vendor return code: data type (attribute) error.
pub const EW_ATTRIB: i16 = 4;
/// Vendor return code: data or address error.
pub const EW_DATA: i16 = 5;
/// Vendor return code: buffer length error.
pub const EW_LENGTH: i16 = 2;
/// Vendor return code: data number error.
pub const EW_NUMBER: i16 = 3;

/// Connection handle issued by [`Library::connect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(pub u16);

/// Controller status flags (`ODBST`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusInfo {
    /// Automatic/manual mode selection.
    pub aut: i16,
    /// Run status.
    pub run: i16,
    /// Axis motion status.
    pub motion: i16,
    /// M/S/T/B function status.
    pub mstb: i16,
    /// Emergency stop status.
    pub emergency: i16,
    /// Alarm status.
    pub alarm: i16,
    /// Edit status.
    pub edit: i16,
    /// T/M mode selection.
    pub tmmode: i16,
    /// Handle retrace status.
    pub hdck: i16,
}

impl StatusInfo {
    /// Returns whether the controller is in MDI mode (`tmmode == 1`).
    pub fn is_mdi(&self) -> bool {
        self.tmmode == 1
    }

    /// Returns whether the controller is in AUTO mode (`aut == 1`).
    pub fn is_auto(&self) -> bool {
        self.aut == 1
    }

    /// Returns whether the controller is in a manual (JOG) mode.
    ///
    /// Approximated as neither MDI nor AUTO; the status record has no
    /// dedicated manual flag.
    pub fn is_jog(&self) -> bool {
        !self.is_mdi() && !self.is_auto()
    }
}

/// Axis positions of the first path (`ODBPOS`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionInfo {
    /// Absolute position.
    pub absolute: i32,
    /// Machine position.
    pub machine: i32,
    /// Relative position.
    pub relative: i32,
    /// Distance to go.
    pub distance: i32,
}

/// Actual feed rate and spindle speed (`ODBSPEED`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeedInfo {
    /// Actual feed rate.
    pub feed: i32,
    /// Actual spindle speed.
    pub spindle: i32,
}

/// Running and main program numbers (`ODBPRO`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProgramNumber {
    /// Number of the program currently running.
    pub running: i32,
    /// Number of the main program.
    pub main: i32,
}

/// The external FOCAS library.
///
/// Calls are synchronous and blocking. Implementations never retry; a
/// failing call returns the vendor code wrapped in
/// [`FocasError::ExternalCallFailed`](crate::FocasError::ExternalCallFailed).
pub trait Library {
    /// Starts the library process, logging to `log_file`.
    ///
    /// Only needed on platforms whose library keeps process-wide state.
    fn startup(&mut self, log_file: &str) -> Result<()>;

    /// Stops the library process started by [`Library::startup`].
    fn shutdown(&mut self) -> Result<()>;

    /// Opens a connection to a CNC.
    fn connect(&mut self, host: &str, port: u16, timeout: Duration) -> Result<Handle>;

    /// Releases a connection handle.
    fn disconnect(&mut self, handle: Handle) -> Result<()>;

    /// Reads a PMC range into a buffer of exactly `length` bytes.
    ///
    /// The returned bytes use the layout described in [`codec`](crate::codec).
    fn read_pmc_range(
        &mut self,
        handle: Handle,
        area: AreaType,
        data_type: i16,
        start: u16,
        end: u16,
        length: u16,
    ) -> Result<Vec<u8>>;

    /// Writes a fully formed PMC buffer.
    fn write_pmc_range(&mut self, handle: Handle, buffer: &[u8]) -> Result<()>;

    /// Reads the four 32-bit words of the CNC ID.
    fn read_cnc_id(&mut self, handle: Handle) -> Result<[u32; 4]>;

    /// Reads the controller status record.
    fn read_status(&mut self, handle: Handle) -> Result<StatusInfo>;

    /// Reads axis positions.
    fn read_position(&mut self, handle: Handle) -> Result<PositionInfo>;

    /// Reads actual feed rate and spindle speed.
    fn read_speed(&mut self, handle: Handle) -> Result<SpeedInfo>;

    /// Reads the running and main program numbers.
    fn read_program_number(&mut self, handle: Handle) -> Result<ProgramNumber>;

    /// Sends an MDI program.
    fn write_mdi_program(&mut self, handle: Handle, program: &str) -> Result<()>;

    /// Sends a JOG MDI command.
    fn write_jog_mdi(&mut self, handle: Handle, command: &str) -> Result<()>;

    /// Writes the operator panel mode signal.
    fn write_panel_mode(&mut self, handle: Handle, mode: i16) -> Result<()>;

    /// Sends cycle start.
    fn cycle_start(&mut self, handle: Handle) -> Result<()>;
}

impl<T: Library + ?Sized> Library for &mut T {
    fn startup(&mut self, log_file: &str) -> Result<()> {
        (**self).startup(log_file)
    }

    fn shutdown(&mut self) -> Result<()> {
        (**self).shutdown()
    }

    fn connect(&mut self, host: &str, port: u16, timeout: Duration) -> Result<Handle> {
        (**self).connect(host, port, timeout)
    }

    fn disconnect(&mut self, handle: Handle) -> Result<()> {
        (**self).disconnect(handle)
    }

    fn read_pmc_range(
        &mut self,
        handle: Handle,
        area: AreaType,
        data_type: i16,
        start: u16,
        end: u16,
        length: u16,
    ) -> Result<Vec<u8>> {
        (**self).read_pmc_range(handle, area, data_type, start, end, length)
    }

    fn write_pmc_range(&mut self, handle: Handle, buffer: &[u8]) -> Result<()> {
        (**self).write_pmc_range(handle, buffer)
    }

    fn read_cnc_id(&mut self, handle: Handle) -> Result<[u32; 4]> {
        (**self).read_cnc_id(handle)
    }

    fn read_status(&mut self, handle: Handle) -> Result<StatusInfo> {
        (**self).read_status(handle)
    }

    fn read_position(&mut self, handle: Handle) -> Result<PositionInfo> {
        (**self).read_position(handle)
    }

    fn read_speed(&mut self, handle: Handle) -> Result<SpeedInfo> {
        (**self).read_speed(handle)
    }

    fn read_program_number(&mut self, handle: Handle) -> Result<ProgramNumber> {
        (**self).read_program_number(handle)
    }

    fn write_mdi_program(&mut self, handle: Handle, program: &str) -> Result<()> {
        (**self).write_mdi_program(handle, program)
    }

    fn write_jog_mdi(&mut self, handle: Handle, command: &str) -> Result<()> {
        (**self).write_jog_mdi(handle, command)
    }

    fn write_panel_mode(&mut self, handle: Handle, mode: i16) -> Result<()> {
        (**self).write_panel_mode(handle, mode)
    }

    fn cycle_start(&mut self, handle: Handle) -> Result<()> {
        (**self).cycle_start(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_modes() {
        let mdi = StatusInfo {
            tmmode: 1,
            ..Default::default()
        };
        assert!(mdi.is_mdi());
        assert!(!mdi.is_auto());
        assert!(!mdi.is_jog());

        let auto = StatusInfo {
            aut: 1,
            ..Default::default()
        };
        assert!(auto.is_auto());
        assert!(!auto.is_jog());

        let manual = StatusInfo {
            aut: 4,
            ..Default::default()
        };
        assert!(manual.is_jog());
    }
}

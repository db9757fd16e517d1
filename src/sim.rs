//! In-memory CNC for tests and demos.
//!
//! [`SimulatedCnc`] implements [`Library`] over a byte image per PMC area.
//! It checks buffers the way the vendor library does (data type, range and
//! length), so a session running against it goes through the full codec.
//!
//! Element `i` of a range starting at `start` occupies the bytes
//! `start + i * width ..` of the area image, in host byte order. Images grow
//! on demand and unwritten bytes read as zero.
//!
//! # Example
//!
//! ```
//! use focas_pmc::{AreaType, Session, SessionConfig, SimulatedCnc};
//!
//! let mut cnc = SimulatedCnc::new();
//! cnc.set_bytes(AreaType::X, 7, &[0b1100_0000]);
//!
//! let mut session = Session::open(&mut cnc, SessionConfig::default())?;
//! assert!(session.read_pmc_bit(AreaType::X, 7, 6)?);
//! # Ok::<(), focas_pmc::FocasError>(())
//! ```

use std::collections::HashMap;
use std::time::Duration;

use crate::area::AreaType;
use crate::codec::buffer_len;
use crate::data::DataType;
use crate::error::{FocasError, Result};
use crate::header::{AddressRange, PmcHeader, PMC_HEADER_SIZE};
use crate::library::{
    Handle, Library, PositionInfo, ProgramNumber, SpeedInfo, StatusInfo, EW_ATTRIB, EW_DATA,
    EW_HANDLE, EW_LENGTH, EW_NUMBER,
};

/// A simulated CNC with PMC memory and fixed status records.
#[derive(Debug, Default)]
pub struct SimulatedCnc {
    areas: HashMap<AreaType, Vec<u8>>,
    started: bool,
    next_handle: u16,
    connections: Vec<Handle>,
    cnc_id: [u32; 4],
    status: StatusInfo,
    position: PositionInfo,
    speed: SpeedInfo,
    program: ProgramNumber,
    mdi_program: Option<String>,
    jog_command: Option<String>,
    cycle_starts: usize,
    calls: usize,
    failures: Vec<(Option<&'static str>, i16)>,
}

impl SimulatedCnc {
    /// Creates a simulator with zeroed memory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes raw bytes into an area image.
    pub fn set_bytes(&mut self, area: AreaType, address: u16, bytes: &[u8]) {
        let start = address as usize;
        let image = self.image_mut(area, start + bytes.len());
        image[start..start + bytes.len()].copy_from_slice(bytes);
    }

    /// Returns `len` raw bytes of an area image.
    pub fn bytes(&self, area: AreaType, address: u16, len: usize) -> Vec<u8> {
        let start = address as usize;
        let mut out = vec![0u8; len];
        if let Some(image) = self.areas.get(&area) {
            let available = image.len().saturating_sub(start).min(len);
            out[..available].copy_from_slice(&image[start..start + available]);
        }
        out
    }

    /// Sets the CNC ID words.
    pub fn set_cnc_id(&mut self, id: [u32; 4]) {
        self.cnc_id = id;
    }

    /// Sets the status record.
    pub fn set_status(&mut self, status: StatusInfo) {
        self.status = status;
    }

    /// Sets the position record.
    pub fn set_position(&mut self, position: PositionInfo) {
        self.position = position;
    }

    /// Sets the speed record.
    pub fn set_speed(&mut self, speed: SpeedInfo) {
        self.speed = speed;
    }

    /// Sets the program numbers.
    pub fn set_program_number(&mut self, program: ProgramNumber) {
        self.program = program;
    }

    /// Makes the next library call fail with `code`.
    pub fn fail_next(&mut self, code: i16) {
        self.failures.push((None, code));
    }

    /// Makes the next call to the named vendor function fail with `code`.
    pub fn fail_on(&mut self, function: &'static str, code: i16) {
        self.failures.push((Some(function), code));
    }

    /// Returns whether the library process is started.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Returns the number of open connections.
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Returns the number of library calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls
    }

    /// Returns the last MDI program written.
    pub fn last_mdi_program(&self) -> Option<&str> {
        self.mdi_program.as_deref()
    }

    /// Returns the last JOG MDI command written.
    pub fn last_jog_command(&self) -> Option<&str> {
        self.jog_command.as_deref()
    }

    /// Returns how many cycle starts were sent.
    pub fn cycle_starts(&self) -> usize {
        self.cycle_starts
    }

    fn image_mut(&mut self, area: AreaType, len: usize) -> &mut Vec<u8> {
        let image = self.areas.entry(area).or_default();
        if image.len() < len {
            image.resize(len, 0);
        }
        image
    }

    /// Counts the call and applies any injected failure.
    fn enter(&mut self, function: &'static str) -> Result<()> {
        self.calls += 1;
        let injected = self
            .failures
            .iter()
            .position(|(target, _)| target.map_or(true, |name| name == function));
        if let Some(index) = injected {
            let (_, code) = self.failures.remove(index);
            return Err(FocasError::external(function, code));
        }
        Ok(())
    }

    fn enter_with(&mut self, function: &'static str, handle: Handle) -> Result<()> {
        self.enter(function)?;
        if !self.connections.contains(&handle) {
            return Err(FocasError::external(function, EW_HANDLE));
        }
        Ok(())
    }
}

impl Library for SimulatedCnc {
    fn startup(&mut self, _log_file: &str) -> Result<()> {
        self.enter("cnc_startupprocess")?;
        self.started = true;
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        self.enter("cnc_exitprocess")?;
        self.started = false;
        Ok(())
    }

    fn connect(&mut self, _host: &str, _port: u16, _timeout: Duration) -> Result<Handle> {
        self.enter("cnc_allclibhndl3")?;
        self.next_handle = self.next_handle.wrapping_add(1);
        let handle = Handle(self.next_handle);
        self.connections.push(handle);
        Ok(handle)
    }

    fn disconnect(&mut self, handle: Handle) -> Result<()> {
        self.enter_with("cnc_freelibhndl", handle)?;
        self.connections.retain(|&h| h != handle);
        Ok(())
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
        const FUNCTION: &str = "pmc_rdpmcrng";
        self.enter_with(FUNCTION, handle)?;

        let data_type =
            DataType::from_tag(data_type).map_err(|_| FocasError::external(FUNCTION, EW_ATTRIB))?;
        let count = AddressRange::new(start, end)
            .map_err(|_| FocasError::external(FUNCTION, EW_NUMBER))?
            .count();
        if length as usize != buffer_len(data_type, count) {
            return Err(FocasError::external(FUNCTION, EW_LENGTH));
        }

        let header = PmcHeader {
            area,
            data_type: data_type.tag(),
            start,
            end,
        };
        let mut buffer = Vec::with_capacity(length as usize);
        buffer.extend_from_slice(&header.to_bytes());
        buffer.extend_from_slice(&self.bytes(area, start, count as usize * data_type.width()));
        Ok(buffer)
    }

    fn write_pmc_range(&mut self, handle: Handle, buffer: &[u8]) -> Result<()> {
        const FUNCTION: &str = "pmc_wrpmcrng";
        self.enter_with(FUNCTION, handle)?;

        let header =
            PmcHeader::from_bytes(buffer).map_err(|_| FocasError::external(FUNCTION, EW_LENGTH))?;
        let data_type = DataType::from_tag(header.data_type)
            .map_err(|_| FocasError::external(FUNCTION, EW_ATTRIB))?;
        let range = header
            .range()
            .map_err(|_| FocasError::external(FUNCTION, EW_NUMBER))?;
        if buffer.len() != buffer_len(data_type, range.count()) {
            return Err(FocasError::external(FUNCTION, EW_LENGTH));
        }

        self.set_bytes(header.area, header.start, &buffer[PMC_HEADER_SIZE..]);
        Ok(())
    }

    fn read_cnc_id(&mut self, handle: Handle) -> Result<[u32; 4]> {
        self.enter_with("cnc_rdcncid", handle)?;
        Ok(self.cnc_id)
    }

    fn read_status(&mut self, handle: Handle) -> Result<StatusInfo> {
        self.enter_with("cnc_statinfo", handle)?;
        Ok(self.status)
    }

    fn read_position(&mut self, handle: Handle) -> Result<PositionInfo> {
        self.enter_with("cnc_rdposition", handle)?;
        Ok(self.position)
    }

    fn read_speed(&mut self, handle: Handle) -> Result<SpeedInfo> {
        self.enter_with("cnc_rdspeed", handle)?;
        Ok(self.speed)
    }

    fn read_program_number(&mut self, handle: Handle) -> Result<ProgramNumber> {
        self.enter_with("cnc_rdprgnum", handle)?;
        Ok(self.program)
    }

    fn write_mdi_program(&mut self, handle: Handle, program: &str) -> Result<()> {
        self.enter_with("cnc_wrmdiprog", handle)?;
        self.mdi_program = Some(program.to_string());
        Ok(())
    }

    fn write_jog_mdi(&mut self, handle: Handle, command: &str) -> Result<()> {
        self.enter_with("cnc_wrjogmdi", handle)?;
        self.jog_command = Some(command.to_string());
        Ok(())
    }

    fn write_panel_mode(&mut self, handle: Handle, mode: i16) -> Result<()> {
        const FUNCTION: &str = "cnc_wropnlsgnl";
        self.enter_with(FUNCTION, handle)?;
        // aut: 0 = MDI, 1 = MEM, 4 = JOG
        let (aut, tmmode) = match mode {
            1 => (0, 1),
            2 => (1, 0),
            3 => (4, 0),
            _ => return Err(FocasError::external(FUNCTION, EW_DATA)),
        };
        self.status.aut = aut;
        self.status.tmmode = tmmode;
        Ok(())
    }

    fn cycle_start(&mut self, handle: Handle) -> Result<()> {
        self.enter_with("cnc_start", handle)?;
        self.cycle_starts += 1;
        Ok(())
    }
}

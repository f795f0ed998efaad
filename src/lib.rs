#![cfg_attr(not(test), no_std)]

use embedded_io::{Read, Write};
use log::debug;

mod constants;
pub use constants::*;

mod error;
pub use error::*;

/// Computes the frame checksum used in both directions: the truncating u8
/// sum of every byte before the checksum field, subtracted from 0xFF.
///
/// Datasheet: <https://www.winsen-sensor.com/d/files/PDF/Infrared%20Gas%20Sensor/NDIR%20CO2%20SENSOR/MH-Z19%20CO2%20Ver1.0.pdf>
pub fn checksum(bytes: &[u8]) -> u8 {
    0xFF - bytes.iter().fold(0u8, |sum, &b| sum.wrapping_add(b))
}

/// The "read gas concentration" command frame.
///
/// Every field is fixed for this command; the frame sent over the wire is
/// always `FF 01 86 00 00 00 00 00 79`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GasConcentrationRequest {
    /// Frame start marker, always 0xFF.
    pub start: u8,
    /// Sensor address, always 0x01.
    pub sensor_no: u8,
    /// Command byte, always 0x86.
    pub command: u8,
    /// Frame checksum, precomputed for the fixed contents.
    pub checksum: u8,
}

impl GasConcentrationRequest {
    /// Creates the canonical gas concentration query.
    pub fn new() -> Self {
        Self {
            start: START,
            sensor_no: SENSOR_NO,
            command: CMD_GAS_CONCENTRATION,
            checksum: REQUEST_CHECKSUM,
        }
    }

    /// Serializes the frame in wire order. Bytes 3 through 7 are reserved
    /// and always zero for this command.
    pub fn as_bytes(&self) -> [u8; FRAME_LEN] {
        [
            self.start,
            self.sensor_no,
            self.command,
            0x00,
            0x00,
            0x00,
            0x00,
            0x00,
            self.checksum,
        ]
    }

    /// Writes all 9 frame bytes to the serial sink and flushes it.
    ///
    /// Any failure from the sink is surfaced as [`Error::Write`] with the
    /// underlying error intact; nothing is retried.
    pub fn write<W: Write>(&self, serial: &mut W) -> Result<(), Error<W::Error>> {
        let frame = self.as_bytes();
        debug!("Executing command: {:02X?}", frame);
        serial.write_all(&frame).map_err(Error::Write)?;
        serial.flush().map_err(Error::Write)?; // Ensure data is sent
        Ok(())
    }
}

impl Default for GasConcentrationRequest {
    fn default() -> Self {
        Self::new()
    }
}

/// A single gas concentration reply read from the sensor.
///
/// The three reserved bytes of the wire frame carry no data and are not
/// retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GasConcentrationResponse {
    /// Frame start marker, should always be 0xFF.
    pub start: u8,
    /// Echoed command byte, should always be 0x86.
    pub command: u8,
    /// CO2 concentration in ppm.
    pub concentration: u16,
    /// Temperature in degrees Celsius plus 40.
    pub offset_temperature: u8,
    /// Checksum byte as transmitted by the sensor.
    pub checksum: u8,
}

impl GasConcentrationResponse {
    /// Reads exactly one 9-byte reply frame from the serial source and
    /// decodes it.
    ///
    /// Short reads from the source are accumulated until the full frame is
    /// available; if the source hits EOF or fails first, [`Error::Read`]
    /// wraps the cause and no decoding is attempted. A frame whose checksum
    /// does not match yields [`Error::BadChecksum`], which still carries the
    /// decoded values for inspection.
    pub fn read<R: Read>(serial: &mut R) -> Result<Self, Error<R::Error>> {
        let mut frame = [0u8; FRAME_LEN];
        serial.read_exact(&mut frame).map_err(Error::Read)?;
        debug!("Received frame: {:02X?}", frame);

        let computed = checksum(&frame[..FRAME_LEN - 1]);
        let response = Self::from_frame(&frame);

        if computed != response.checksum {
            log::error!(
                "Bad checksum: calculated {:02X}, received {:02X}. Frame: {:02X?}",
                computed,
                response.checksum,
                frame
            );
            return Err(Error::BadChecksum { response, computed });
        }
        Ok(response)
    }

    /// Returns the temperature reading in degrees Celsius.
    ///
    /// The sensor transmits temperature with a +40 offset, so readings below
    /// freezing come out negative.
    pub fn temperature(&self) -> i16 {
        i16::from(self.offset_temperature) - TEMPERATURE_OFFSET
    }

    // Field-by-field positional decode; the concentration spans bytes 2..=3
    // big-endian, bytes 5..=7 are reserved.
    fn from_frame(frame: &[u8; FRAME_LEN]) -> Self {
        Self {
            start: frame[0],
            command: frame[1],
            concentration: u16::from_be_bytes([frame[2], frame[3]]),
            offset_temperature: frame[4],
            checksum: frame[8],
        }
    }
}

/// Represents an MH-Z19 infrared CO2 sensor.
///
/// Owns the serial interface and performs the single supported exchange:
/// query the gas concentration and decode the reply. Opening and configuring
/// the serial port, timeouts and polling schedules are the caller's concern.
///
/// # Type Parameters
///
/// * `Serial`: The type of the serial interface used to communicate with the
///   sensor. It must implement `embedded_io::Read` and `embedded_io::Write`.
pub struct Mhz19<Serial> {
    serial: Serial,
}

impl<S> Mhz19<S>
where
    S: Read + Write,
{
    /// Creates a new `Mhz19` sensor instance around a serial interface.
    pub fn new(serial: S) -> Self {
        Self { serial }
    }

    /// Sends the gas concentration query and reads the sensor's reply.
    ///
    /// One write, one read, no retries: every failure of either half is
    /// returned to the caller as-is.
    pub fn read_gas_concentration(&mut self) -> Result<GasConcentrationResponse, Error<S::Error>> {
        debug!("Querying gas concentration (CMD 0x86)");
        GasConcentrationRequest::new().write(&mut self.serial)?;
        GasConcentrationResponse::read(&mut self.serial)
    }
}

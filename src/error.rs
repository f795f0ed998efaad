use core::fmt;

use embedded_io::ReadExactError;

use crate::GasConcentrationResponse;

/// Errors reported while exchanging frames with the sensor.
///
/// Generic over the serial interface's error type, which is carried through
/// unchanged; no failure is retried or recovered at this layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error<E> {
    /// The serial sink rejected or cut short the 9-byte command frame.
    Write(E),
    /// The serial source failed or ran dry before a full 9-byte reply was
    /// obtained. `ReadExactError::UnexpectedEof` marks a short read, any
    /// other value wraps the underlying serial fault.
    Read(ReadExactError<E>),
    /// A full reply frame was read and parsed, but its checksum does not
    /// match the one computed over its contents. The parsed reply is kept so
    /// callers can still log or inspect the untrusted values.
    BadChecksum {
        response: GasConcentrationResponse,
        computed: u8,
    },
}

impl<E> fmt::Display for Error<E>
where
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Write(err) => write!(f, "failed to write command frame: {:?}", err),
            Self::Read(err) => write!(f, "failed to read reply frame: {:?}", err),
            Self::BadChecksum { response, computed } => write!(
                f,
                "checksum failed: got {:02X} want {:02X}",
                computed, response.checksum
            ),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for Error<E> {}

// START is the byte that marks the beginning of every command and reply frame.
pub const START: u8 = 0xFF;

// SENSOR_NO is the fixed sensor address placed in command frames.
pub const SENSOR_NO: u8 = 0x01;

// CMD_GAS_CONCENTRATION is the "read gas concentration" command byte, echoed
// back by the sensor in its reply.
pub const CMD_GAS_CONCENTRATION: u8 = 0x86;

// REQUEST_CHECKSUM is the checksum of the fixed gas concentration command
// frame. The frame never varies, so the value is precomputed.
pub const REQUEST_CHECKSUM: u8 = 0x79;

// FRAME_LEN is the length in bytes of every frame exchanged with the sensor,
// command and reply alike.
pub const FRAME_LEN: usize = 9;

// TEMPERATURE_OFFSET is subtracted from the raw temperature byte of a reply
// to obtain degrees Celsius.
pub const TEMPERATURE_OFFSET: i16 = 40;

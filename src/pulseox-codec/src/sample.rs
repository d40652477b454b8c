use crate::{constants::FIFO_BLOCK_LEN, error::CodecError, helpers::BufferReader};

/// One red/infrared intensity pair taken from the sensor FIFO.
///
/// Both channels are big-endian 24-bit values. The MAX30102 only fills
/// the low 18 bits, the upper bits are kept as received.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub red: u32,
    pub infrared: u32,
    /// Milliseconds since sampling started.
    pub timestamp_ms: f64,
}

impl Sample {
    pub fn new(red: u32, infrared: u32, timestamp_ms: f64) -> Self {
        Self {
            red,
            infrared,
            timestamp_ms,
        }
    }

    pub fn from_fifo_block(block: &[u8], timestamp_ms: f64) -> Result<Self, CodecError> {
        if block.len() != FIFO_BLOCK_LEN {
            return Err(CodecError::InvalidBlockLength {
                expected: FIFO_BLOCK_LEN,
                actual: block.len(),
            });
        }

        let mut data = block;
        Ok(Self {
            red: data.read_u24_be()?,
            infrared: data.read_u24_be()?,
            timestamp_ms,
        })
    }
}

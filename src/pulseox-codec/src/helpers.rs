use crate::error::CodecError;

type Result<T> = std::result::Result<T, InvalidIndexError>;

#[derive(Debug)]
pub struct InvalidIndexError;

pub trait BufferReader {
    fn read<const N: usize>(&mut self) -> Result<[u8; N]>;

    fn read_u24_be(&mut self) -> Result<u32> {
        let [hi, mid, lo] = self.read()?;
        Ok((u32::from(hi) << 16) | (u32::from(mid) << 8) | u32::from(lo))
    }
}

impl<'a> BufferReader for &'a [u8] {
    fn read<const N: usize>(&mut self) -> Result<[u8; N]> {
        let slice: &'a [u8] = *self;
        let (head, tail) = slice.split_first_chunk::<N>().ok_or(InvalidIndexError)?;
        *self = tail;
        Ok(*head)
    }
}

impl From<InvalidIndexError> for CodecError {
    fn from(_: InvalidIndexError) -> Self {
        Self::InvalidIndexError
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_advances_slice() {
        let data = [0x01, 0x02, 0x03, 0x04];
        let mut buf = &data[..];
        let result: [u8; 2] = buf.read().unwrap();
        assert_eq!(result, [0x01, 0x02]);
        assert_eq!(buf, &[0x03, 0x04]);
    }

    #[test]
    fn read_insufficient_data_errors() {
        let data = [0x01];
        let mut buf = &data[..];
        let result: Result<[u8; 4]> = buf.read();
        assert!(result.is_err());
        assert_eq!(buf, &[0x01]);
    }

    #[test]
    fn read_u24_be_parses_correctly() {
        let data = [0x01, 0x02, 0x03, 0xFF];
        let mut buf = &data[..];
        assert_eq!(buf.read_u24_be().unwrap(), 0x010203);
        assert_eq!(buf, &[0xFF]);
    }
}

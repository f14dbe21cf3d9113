//! Byte cursor over a big-endian legacy file.
//!
//! The legacy formats mix two kinds of reads: structured fields that are
//! always big-endian (counts, indices, 16-bit coordinates), and bulk blocks of
//! 32-bit floats that are copied out raw and then swapped element by element.
//! The two are kept as separate primitives so a block is converted exactly
//! once.

use crate::error::{DecodeError, DecodeResult};

/// A forward-only cursor over an in-memory file.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> ByteReader<'a> {
    /// Create a reader positioned at the start of `data`.
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Current position in bytes.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of bytes left to read.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    /// Fail unless at least `len` more bytes are available.
    ///
    /// Used before allocating for a header-declared count, so that a corrupt
    /// header cannot request an enormous buffer.
    pub fn ensure(&self, len: usize) -> DecodeResult<()> {
        if self.remaining() < len {
            return Err(DecodeError::BufferTooSmall {
                expected: self.offset + len,
                actual: self.data.len(),
            });
        }
        Ok(())
    }

    fn take<const N: usize>(&mut self, context: &'static str) -> DecodeResult<[u8; N]> {
        let end = self.offset + N;
        let Some(bytes) = self.data.get(self.offset..end) else {
            return Err(DecodeError::UnexpectedEof { context });
        };
        self.offset = end;

        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// Read a 3-byte big-endian unsigned integer (`fread3`).
    ///
    /// The result is `(b0 << 16) | (b1 << 8) | b2`, with no sign extension.
    pub fn read_u24(&mut self, context: &'static str) -> DecodeResult<u32> {
        let [b0, b1, b2] = self.take::<3>(context)?;
        Ok((u32::from(b0) << 16) | (u32::from(b1) << 8) | u32::from(b2))
    }

    /// Read a big-endian signed 16-bit integer.
    pub fn read_i16(&mut self, context: &'static str) -> DecodeResult<i16> {
        Ok(i16::from_be_bytes(self.take::<2>(context)?))
    }

    /// Read a big-endian signed 32-bit integer.
    pub fn read_i32(&mut self, context: &'static str) -> DecodeResult<i32> {
        Ok(i32::from_be_bytes(self.take::<4>(context)?))
    }

    /// Read `len` raw bytes without any byte-order interpretation.
    pub fn read_raw(&mut self, len: usize, context: &'static str) -> DecodeResult<&'a [u8]> {
        let end = self
            .offset
            .checked_add(len)
            .ok_or(DecodeError::UnexpectedEof { context })?;
        let data: &'a [u8] = self.data;
        let Some(bytes) = data.get(self.offset..end) else {
            return Err(DecodeError::UnexpectedEof { context });
        };
        self.offset = end;
        Ok(bytes)
    }

    /// Read a `\n`-terminated text line, returning it without the terminator.
    ///
    /// A line cut short by the end of the buffer is returned as-is.
    pub fn read_line(&mut self) -> &'a [u8] {
        let data: &'a [u8] = self.data;
        let rest = &data[self.offset..];
        match rest.iter().position(|&b| b == b'\n') {
            Some(pos) => {
                self.offset += pos + 1;
                &rest[..pos]
            }
            None => {
                self.offset = self.data.len();
                rest
            }
        }
    }

    /// Read a bulk block of `count` 32-bit floats and swap each into host order.
    pub fn read_f32_block(
        &mut self,
        count: usize,
        context: &'static str,
    ) -> DecodeResult<Vec<f32>> {
        let len = count
            .checked_mul(4)
            .ok_or(DecodeError::UnexpectedEof { context })?;
        let raw = self.read_raw(len, context)?;
        Ok(swap_f32_block(raw))
    }
}

/// Convert a raw block of big-endian 32-bit float words into host floats.
///
/// Each word is first taken in native order, exactly as a bulk memory copy
/// would leave it, then swapped. On big-endian hosts the swap is a no-op.
#[must_use]
pub fn swap_f32_block(raw: &[u8]) -> Vec<f32> {
    raw.chunks_exact(4)
        .map(|chunk| {
            let native = u32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
            f32::from_bits(u32::from_be(native))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_u24() {
        let data = [0xFF, 0xFF, 0xFE, 0x00, 0x01, 0x02];
        let mut reader = ByteReader::new(&data);
        assert_eq!(reader.read_u24("test").unwrap(), 16_777_214);
        assert_eq!(reader.read_u24("test").unwrap(), 0x0102);
        assert_eq!(reader.offset(), 6);
    }

    #[test]
    fn test_read_u24_no_sign_extension() {
        let data = [0x80, 0x00, 0x00];
        let mut reader = ByteReader::new(&data);
        assert_eq!(reader.read_u24("test").unwrap(), 0x0080_0000);
    }

    #[test]
    fn test_read_signed() {
        let mut data = Vec::new();
        data.extend_from_slice(&(-50i16).to_be_bytes());
        data.extend_from_slice(&(-70_000i32).to_be_bytes());
        let mut reader = ByteReader::new(&data);
        assert_eq!(reader.read_i16("test").unwrap(), -50);
        assert_eq!(reader.read_i32("test").unwrap(), -70_000);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_unexpected_eof() {
        let data = [0x01, 0x02];
        let mut reader = ByteReader::new(&data);
        assert!(matches!(
            reader.read_u24("magic"),
            Err(DecodeError::UnexpectedEof { context: "magic" })
        ));
        // A failed read does not advance.
        assert_eq!(reader.offset(), 0);
    }

    #[test]
    fn test_read_line() {
        let data = b"created by test\n\nrest";
        let mut reader = ByteReader::new(data);
        assert_eq!(reader.read_line(), b"created by test");
        assert_eq!(reader.read_line(), b"");
        assert_eq!(reader.read_line(), b"rest");
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_read_f32_block() {
        let mut data = Vec::new();
        for v in [1.5f32, -2.25, 0.0] {
            data.extend_from_slice(&v.to_be_bytes());
        }
        let mut reader = ByteReader::new(&data);
        assert_eq!(
            reader.read_f32_block(3, "test").unwrap(),
            vec![1.5, -2.25, 0.0]
        );
    }

    #[test]
    fn test_swap_applied_once() {
        // A block written in the opposite byte order must not decode to the
        // same values.
        let mut data = Vec::new();
        data.extend_from_slice(&1.5f32.to_le_bytes());
        let values = swap_f32_block(&data);
        assert_ne!(values[0], 1.5);
        assert_eq!(values[0], f32::from_bits(1.5f32.to_bits().swap_bytes()));
    }

    #[test]
    fn test_ensure() {
        let data = [0u8; 4];
        let reader = ByteReader::new(&data);
        assert!(reader.ensure(4).is_ok());
        assert!(matches!(
            reader.ensure(5),
            Err(DecodeError::BufferTooSmall {
                expected: 5,
                actual: 4
            })
        ));
    }
}

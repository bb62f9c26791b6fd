use std::io::{ErrorKind, Read, Seek, SeekFrom};

use crate::error::ScanError;

/// Byte and bit addressable cursor over a random-access byte source.
///
/// Integers are read big-endian, most significant bit first, through a
/// 64-bit accumulator that is refilled one byte at a time. The cursor owns
/// its source for the duration of a scan; nothing else may read from or
/// reposition the source while the cursor is live.
pub struct BitCursor<R> {
    source: R,
    position: u64,
    bit_buffer: u64,
    bit_count: u32,
}

impl<R: Read + Seek> BitCursor<R> {
    /// Creates a cursor over `source`, which must be positioned at byte 0.
    pub fn new(source: R) -> Self {
        Self {
            source,
            position: 0,
            bit_buffer: 0,
            bit_count: 0,
        }
    }

    /// Reads the next `n` bits (1..=32) as a big-endian unsigned integer.
    ///
    /// Fails with `NeedMoreData` when the source runs out before `n` bits
    /// are buffered; missing bits are never zero-filled.
    pub fn read_uint(&mut self, n: u32) -> Result<u32, ScanError> {
        debug_assert!((1..=32).contains(&n));
        while self.bit_count < n {
            let byte = self.next_source_byte()?;
            self.bit_buffer = (self.bit_buffer << 8) | u64::from(byte);
            self.bit_count += 8;
        }
        self.bit_count -= n;
        Ok(((self.bit_buffer >> self.bit_count) & ((1u64 << n) - 1)) as u32)
    }

    /// Reads the next `n` bits (1..=32) as a two's-complement signed
    /// integer, sign-extending from bit `n - 1`.
    pub fn read_signed_int(&mut self, n: u32) -> Result<i32, ScanError> {
        debug_assert!((1..=32).contains(&n));
        let shift = 32 - n;
        Ok(((self.read_uint(n)? << shift) as i32) >> shift)
    }

    /// Reads the next 8 bits as a byte.
    pub fn read_byte(&mut self) -> Result<u8, ScanError> {
        Ok(self.read_uint(8)? as u8)
    }

    /// Repositions the source at absolute byte offset `pos` and empties the
    /// accumulator. Buffered bits that were never consumed are discarded.
    pub fn seek_to(&mut self, pos: u64) -> Result<(), ScanError> {
        self.source.seek(SeekFrom::Start(pos))?;
        self.position = pos;
        self.bit_buffer = 0;
        self.bit_count = 0;
        Ok(())
    }

    /// The offset of the next byte the source will deliver. Whole bytes
    /// already pulled into the accumulator count as delivered even while
    /// their bits sit unconsumed.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Rounds the buffered bit count down to a whole number of bytes,
    /// discarding any partial byte of unconsumed bits. The source itself is
    /// not touched.
    pub fn align_to_byte(&mut self) {
        self.bit_count -= self.bit_count % 8;
    }

    fn next_source_byte(&mut self) -> Result<u8, ScanError> {
        let mut byte = [0u8; 1];
        self.source.read_exact(&mut byte).map_err(|e| {
            if e.kind() == ErrorKind::UnexpectedEof {
                ScanError::NeedMoreData
            } else {
                ScanError::Io(e)
            }
        })?;
        self.position += 1;
        Ok(byte[0])
    }
}

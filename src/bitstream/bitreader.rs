//! BitReader: reads a packed bitstream produced by [`BitWriter`](super::bitwriter::BitWriter).
//!
//! The last byte of the buffer is the trailer: the number of significant bits in the byte
//! before it, with 0 standing for a full byte. Reads never cross that boundary.
//!

/// Reads a finalized bitstream, most significant bit first.
#[derive(Debug)]
pub struct BitReader {
    buffer: Vec<u8>,
    cursor: usize,
    bit_index: usize,
    /// Significant bits in the last content byte (1-8).
    last_bits: usize,
}

impl BitReader {
    /// Creates a new BitReader, consuming the trailer byte of the stream.
    pub fn new(mut buffer: Vec<u8>) -> Self {
        let last_bits = match buffer.pop() {
            Some(0) | None => 8,
            Some(bits) => (bits as usize).min(8),
        };
        Self {
            buffer,
            cursor: 0,
            bit_index: 0,
            last_bits,
        }
    }

    /// Count of significant bits not yet read.
    pub fn remaining(&self) -> usize {
        if self.buffer.is_empty() {
            return 0;
        }
        let total = (self.buffer.len() - 1) * 8 + self.last_bits;
        total.saturating_sub(self.cursor * 8 + self.bit_index)
    }

    /// Return the next bit, *true* for 1, or None if there is no more data to read
    pub fn read_bit(&mut self) -> Option<bool> {
        self.bint(1).map(|bit| bit == 1)
    }

    /// Returns a byte, or None if there is no more data to read. The byte may span two
    /// bytes of the buffer.
    pub fn read_byte(&mut self) -> Option<u8> {
        self.bint(8).map(|byte| byte as u8)
    }

    /// Returns a 32 bit word stored most significant byte first, or None if the stream
    /// ends before all four bytes are read.
    pub fn read_u32(&mut self) -> Option<u32> {
        self.bint(32)
    }

    /// Return the next n bits (0-32), or None if fewer than n significant bits are left.
    /// Nothing is consumed when None is returned.
    pub fn bint(&mut self, mut n: usize) -> Option<u32> {
        if n > 32 || self.remaining() < n {
            return None;
        }
        let mut result = 0_u32;

        // Take what we need from the current byte, moving on to the next as each one empties.
        while n > 0 {
            let available = 8 - self.bit_index;
            let needed = n.min(available);
            let bits = (self.buffer[self.cursor] as u32 >> (available - needed)) & ((1 << needed) - 1);
            result = result << needed | bits;
            self.bit_index += needed;
            if self.bit_index == 8 {
                self.cursor += 1;
                self.bit_index = 0;
            }
            n -= needed;
        }
        Some(result)
    }

    /// Debugging function. Report current position in the buffer.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor, self.bit_index)
    }
}

#[cfg(test)]
mod test {
    use super::BitReader;
    use crate::bitstream::bitwriter::BitWriter;

    #[test]
    fn basic_test() {
        let mut br = BitReader::new(vec![0b10000001, 0]);
        assert_eq!(br.read_bit(), Some(true));
        for _ in 0..6 {
            assert_eq!(br.read_bit(), Some(false));
        }
        assert_eq!(br.read_bit(), Some(true));
        assert_eq!(br.read_bit(), None);
    }

    #[test]
    fn trailer_limits_bits_test() {
        // Only 3 bits of the last byte are significant
        let mut br = BitReader::new(vec![0b1010_0000, 3]);
        assert_eq!(br.remaining(), 3);
        assert_eq!(br.read_bit(), Some(true));
        assert_eq!(br.read_bit(), Some(false));
        assert_eq!(br.read_bit(), Some(true));
        assert_eq!(br.read_bit(), None);
        assert_eq!(br.loc(), "[0.3]");
    }

    #[test]
    fn bint_test() {
        let mut br = BitReader::new(vec![0b00011011, 0]);
        assert_eq!(br.bint(5), Some(3));
        assert_eq!(br.bint(1), Some(0));
        assert_eq!(br.bint(2), Some(3));
        assert_eq!(br.bint(1), None);
    }

    #[test]
    fn byte_test() {
        let mut data = "Hello".as_bytes().to_vec();
        data.push(0);
        let mut br = BitReader::new(data);
        assert_eq!(br.read_byte(), Some(b'H'));
        assert_eq!(br.read_byte(), Some(b'e'));
        assert_eq!(br.read_byte(), Some(b'l'));
        assert_eq!(br.read_byte(), Some(b'l'));
        assert_eq!(br.read_byte(), Some(b'o'));
        assert_eq!(br.read_byte(), None);
    }

    #[test]
    fn spanning_byte_test() {
        let mut br = BitReader::new(vec![0b1011_1110, 0b0000_0000, 3]);
        assert_eq!(br.read_bit(), Some(true));
        assert_eq!(br.read_bit(), Some(false));
        assert_eq!(br.read_bit(), Some(true));
        assert_eq!(br.read_byte(), Some(0b1111_0000));
        assert_eq!(br.read_byte(), None);
    }

    #[test]
    fn short_byte_is_not_consumed_test() {
        let mut br = BitReader::new(vec![0b1100_0000, 2]);
        assert_eq!(br.read_byte(), None);
        assert_eq!(br.read_bit(), Some(true));
        assert_eq!(br.read_bit(), Some(true));
        assert_eq!(br.read_bit(), None);
    }

    #[test]
    fn u32_test() {
        let mut br = BitReader::new(vec![0xde, 0xad, 0xbe, 0xef, 0]);
        assert_eq!(br.read_u32(), Some(0xdead_beef));
        assert_eq!(br.read_u32(), None);

        let mut br = BitReader::new(vec![0xde, 0xad, 0xbe, 0]);
        assert_eq!(br.read_u32(), None);
    }

    #[test]
    fn empty_test() {
        let mut br = BitReader::new(vec![]);
        assert_eq!(br.read_bit(), None);
        let mut br = BitReader::new(vec![0]);
        assert_eq!(br.read_bit(), None);
        assert_eq!(br.read_byte(), None);
    }

    #[test]
    fn writer_reader_test() {
        let mut bw = BitWriter::new(16);
        bw.write_bit(true);
        bw.write_u32(123_456_789);
        bw.write_bit(false);
        bw.write_byte(0xa5);
        bw.write_code(&[true, true, false]);

        let mut br = BitReader::new(bw.finalize());
        assert_eq!(br.read_bit(), Some(true));
        assert_eq!(br.read_u32(), Some(123_456_789));
        assert_eq!(br.read_bit(), Some(false));
        assert_eq!(br.read_byte(), Some(0xa5));
        assert_eq!(br.read_bit(), Some(true));
        assert_eq!(br.read_bit(), Some(true));
        assert_eq!(br.read_bit(), Some(false));
        assert_eq!(br.read_bit(), None);
        assert_eq!(br.remaining(), 0);
    }
}

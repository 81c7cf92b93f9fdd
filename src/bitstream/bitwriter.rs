use log::trace;

/// Writes a bitstream into an in-memory buffer, most significant bit first.
///
/// The stream is closed with [`BitWriter::finalize`], which pads the last partial byte
/// with zeros and appends a trailer byte holding the number of significant bits in it.
/// A trailer of 0 means the last content byte was full.
#[derive(Debug, Default)]
pub struct BitWriter {
    /// Output buffer used to write the bitstream.
    output: Vec<u8>,
    /// Private queue to hold bits that are waiting to be put as bytes into the output buffer.
    queue: u64,
    /// Count of valid bits in the queue.
    q_bits: u8,
}

impl BitWriter {
    /// Create a new BitWriter with an output buffer of the capacity specified.
    pub fn new(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
            queue: 0,
            q_bits: 0,
        }
    }

    /// Internal bitstream write function common to all write_XX functions.
    fn push_queue(&mut self) {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte); //push the packed byte out
            self.q_bits -= 8; //adjust the count of bits left in the queue
        }
    }

    /// Puts the lowest `depth` bits of `data` (0-32) on the stream.
    fn write_bits(&mut self, data: u32, depth: u8) {
        if depth == 0 {
            return;
        }
        self.queue <<= depth; //shift queue by bit length
        self.queue |= data as u64 & ((1_u64 << depth) - 1); //add data portion to queue
        self.q_bits += depth; //update depth of queue bits
        self.push_queue();
    }

    /// Put a single bit on the stream.
    pub fn write_bit(&mut self, bit: bool) {
        self.write_bits(bit as u32, 1);
    }

    /// Put a byte on the stream, spliced against whatever partial byte is pending.
    pub fn write_byte(&mut self, data: u8) {
        self.write_bits(data as u32, 8);
    }

    /// Put a 32 bit word on the stream, most significant byte first.
    pub fn write_u32(&mut self, data: u32) {
        self.write_bits(data, 32);
    }

    /// Put a sequence of bits (such as a huffman code) on the stream.
    pub fn write_code(&mut self, code: &[bool]) {
        code.iter().for_each(|&bit| self.write_bit(bit));
    }

    /// Flushes the remaining bits (1-7) from the queue, padding with 0s in the least
    /// significant bits, then appends the trailer byte. This is the only way to get the output.
    pub fn finalize(mut self) -> Vec<u8> {
        // Any full bytes are already out, so what is left is the partial byte.
        let last_bits = self.q_bits % 8;
        if self.q_bits > 0 {
            self.queue <<= 8 - self.q_bits; //pad the queue with zeros
            self.q_bits = 8;
            self.push_queue();
        }
        trace!(
            "\r\x1b[43mFinalized stream at {}, trailer is {}.    \x1b[0m",
            self.loc(),
            last_bits
        );
        self.output.push(last_bits);
        self.output
    }

    /// Debugging function to return the number of bytes.bits output so far
    pub fn loc(&self) -> String {
        let bits = self.output.len() * 8 + self.q_bits as usize;
        format!("[{}.{}]", bits / 8, bits % 8)
    }
}

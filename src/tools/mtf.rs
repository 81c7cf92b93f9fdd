/// The Move To Front symbol list: always a permutation of all 256 byte values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MtfAlphabet {
    index: [u8; 256],
}

impl MtfAlphabet {
    /// Create the list in ascending order, 0..=255.
    pub fn new() -> Self {
        Self {
            index: std::array::from_fn(|i| i as u8),
        }
    }

    /// Current position of a byte in the list.
    pub fn position(&self, byte: u8) -> usize {
        // Every byte value is always present, so the fallback is never taken.
        self.index.iter().position(|&c| c == byte).unwrap_or(0)
    }

    /// Byte currently stored at a position.
    pub fn symbol_at(&self, idx: usize) -> u8 {
        self.index[idx]
    }

    /// Move the byte at idx to the front, shifting everything in front of it back by one.
    pub fn move_to_front(&mut self, idx: usize) {
        let temp_sym = self.index[idx];
        self.index.copy_within(0..idx, 1);
        self.index[0] = temp_sym;
    }

    /// View the list in its current order.
    #[cfg(test)]
    pub fn symbols(&self) -> &[u8; 256] {
        &self.index
    }
}

impl Default for MtfAlphabet {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode data using the Move To Front transform, starting from a fresh alphabet.
pub fn mtf_encode(data: &[u8]) -> Vec<u8> {
    mtf_encode_with(&mut MtfAlphabet::new(), data)
}

/// Decode Move To Front indices, starting from a fresh alphabet.
pub fn mtf_decode(data: &[u8]) -> Vec<u8> {
    mtf_decode_with(&mut MtfAlphabet::new(), data)
}

/// Encode data using the Move To Front transform, continuing from the alphabet given.
pub fn mtf_encode_with(alphabet: &mut MtfAlphabet, data: &[u8]) -> Vec<u8> {
    data.iter()
        .map(|&byte| {
            let idx = alphabet.position(byte);
            alphabet.move_to_front(idx);
            idx as u8
        })
        .collect()
}

/// Decode Move To Front indices, continuing from the alphabet given. Applies exactly the
/// same mutation as the encoder.
pub fn mtf_decode_with(alphabet: &mut MtfAlphabet, data: &[u8]) -> Vec<u8> {
    data.iter()
        .map(|&idx| {
            let byte = alphabet.symbol_at(idx as usize);
            alphabet.move_to_front(idx as usize);
            byte
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn is_permutation(alphabet: &MtfAlphabet) -> bool {
        let mut seen = [false; 256];
        alphabet.symbols().iter().for_each(|&s| seen[s as usize] = true);
        seen.iter().all(|&s| s)
    }

    #[test]
    fn encode_test() {
        assert_eq!(mtf_encode(b"nnbaaa"), vec![110, 0, 99, 99, 0, 0]);
        assert_eq!(mtf_encode(&[0, 0, 1, 1, 0]), vec![0, 0, 1, 0, 1]);
    }

    #[test]
    fn decode_test() {
        assert_eq!(mtf_decode(&[110, 0, 99, 99, 0, 0]), b"nnbaaa".to_vec());
    }

    #[test]
    fn roundtrip_test() {
        let data = b"If Peter Piper picked a peck of pickled peppers, where's the peck of pickled peppers Peter Piper picked?";
        assert_eq!(mtf_decode(&mtf_encode(data)), data.to_vec());

        let all = (0..=255_u8).rev().chain(0..=255_u8).collect::<Vec<u8>>();
        assert_eq!(mtf_decode(&mtf_encode(&all)), all);
    }

    #[test]
    fn alphabet_stays_a_permutation_test() {
        let mut enc = MtfAlphabet::new();
        let mut dec = MtfAlphabet::new();
        let data = (0..5000_u32).map(|i| (i * 31 % 256) as u8 ^ (i % 7) as u8).collect::<Vec<u8>>();

        let encoded = mtf_encode_with(&mut enc, &data);
        assert!(is_permutation(&enc));
        assert_eq!(mtf_decode_with(&mut dec, &encoded), data);
        assert!(is_permutation(&dec));
        // Both sides end in the same state
        assert_eq!(enc, dec);
    }

    #[test]
    fn move_to_front_test() {
        let mut alphabet = MtfAlphabet::new();
        alphabet.move_to_front(3);
        assert_eq!(&alphabet.symbols()[..5], &[3, 0, 1, 2, 4]);
        assert_eq!(alphabet.position(3), 0);
        assert_eq!(alphabet.position(2), 3);
        alphabet.move_to_front(0);
        assert_eq!(&alphabet.symbols()[..5], &[3, 0, 1, 2, 4]);
    }

    #[test]
    fn empty_test() {
        assert!(mtf_encode(&[]).is_empty());
        assert!(mtf_decode(&[]).is_empty());
    }
}

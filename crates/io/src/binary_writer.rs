use crate::{IoError, IoResult, Serializable};

/// A binary writer that appends little-endian values to an owned buffer.
pub struct BinaryWriter {
    inner: Vec<u8>,
}

impl BinaryWriter {
    /// Creates a writer with an empty buffer.
    pub fn new() -> Self {
        Self { inner: Vec::new() }
    }

    /// Creates a writer with the given capacity pre-allocated.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Vec::with_capacity(capacity),
        }
    }

    /// Consumes the writer and returns the written bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.inner
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Borrows the written bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.inner
    }

    pub fn write_bool(&mut self, value: bool) {
        self.inner.push(value as u8);
    }

    pub fn write_u8(&mut self, value: u8) {
        self.inner.push(value);
    }

    pub fn write_u16(&mut self, value: u16) {
        self.inner.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_u32(&mut self, value: u32) {
        self.inner.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_u64(&mut self, value: u64) {
        self.inner.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_i64(&mut self, value: i64) {
        self.inner.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_bytes(&mut self, buffer: &[u8]) {
        self.inner.extend_from_slice(buffer);
    }

    /// Writes a Bitcoin-style variable-length integer.
    pub fn write_var_int(&mut self, value: u64) {
        if value < 0xFD {
            self.inner.push(value as u8);
        } else if value <= 0xFFFF {
            self.inner.push(0xFD);
            self.write_u16(value as u16);
        } else if value <= 0xFFFF_FFFF {
            self.inner.push(0xFE);
            self.write_u32(value as u32);
        } else {
            self.inner.push(0xFF);
            self.write_u64(value);
        }
    }

    /// Writes a length-prefixed byte string.
    pub fn write_var_bytes(&mut self, buffer: &[u8]) {
        self.write_var_int(buffer.len() as u64);
        self.write_bytes(buffer);
    }

    /// Writes a length-prefixed UTF-8 string.
    pub fn write_var_string(&mut self, value: &str) {
        self.write_var_bytes(value.as_bytes());
    }

    /// Writes a UTF-8 string into exactly `length` bytes, padded with NULs.
    ///
    /// Fails if the encoded string does not fit.
    pub fn write_fixed_string(&mut self, value: &str, length: usize) -> IoResult<()> {
        let bytes = value.as_bytes();
        if bytes.len() > length {
            return Err(IoError::ValueOutOfRange {
                what: "fixed string length",
                value: bytes.len() as u64,
                max: length as u64,
            });
        }
        self.write_bytes(bytes);
        self.inner.extend(std::iter::repeat(0u8).take(length - bytes.len()));
        Ok(())
    }

    /// Serializes the given object into this writer.
    pub fn write_serializable<T: Serializable>(&mut self, value: &T) -> IoResult<()> {
        value.serialize(self)
    }

    /// Serializes a var-int count followed by each item.
    pub fn write_serializable_list<T: Serializable>(&mut self, items: &[T]) -> IoResult<()> {
        self.write_var_int(items.len() as u64);
        for item in items {
            item.serialize(self)?;
        }
        Ok(())
    }
}

impl Default for BinaryWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn little_endian_integers() {
        let mut w = BinaryWriter::new();
        w.write_u16(0x0102);
        w.write_u32(0x03040506);
        w.write_i64(-1);
        assert_eq!(
            w.into_bytes(),
            [
                0x02, 0x01, 0x06, 0x05, 0x04, 0x03, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
                0xFF
            ]
        );
    }

    #[test]
    fn var_int_encodings() {
        let mut w = BinaryWriter::new();
        w.write_var_int(0xFC);
        w.write_var_int(0xFD);
        w.write_var_int(0x10000);
        assert_eq!(
            w.into_bytes(),
            [0xFC, 0xFD, 0xFD, 0x00, 0xFE, 0x00, 0x00, 0x01, 0x00]
        );
    }

    #[test]
    fn fixed_string_pads_with_nuls() {
        let mut w = BinaryWriter::new();
        w.write_fixed_string("neo", 6).unwrap();
        assert_eq!(w.into_bytes(), [b'n', b'e', b'o', 0, 0, 0]);
    }

    #[test]
    fn fixed_string_rejects_overflow() {
        let mut w = BinaryWriter::new();
        assert!(w.write_fixed_string("too long", 4).is_err());
    }
}

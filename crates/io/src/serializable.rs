use crate::{BinaryWriter, IoResult, MemoryReader};

/// Binary wire-format support for a type.
///
/// Implementors must keep `size` consistent with the bytes `serialize`
/// produces, since fee calculation relies on it.
pub trait Serializable: Sized {
    /// Serialized size in bytes.
    fn size(&self) -> usize;

    /// Writes the wire representation into `writer`.
    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()>;

    /// Reads the wire representation from `reader`.
    fn deserialize(reader: &mut MemoryReader<'_>) -> IoResult<Self>;
}

/// Owned-buffer conveniences for any [`Serializable`] type.
pub trait SerializableExt: Serializable {
    /// Serializes into a fresh byte vector.
    fn to_array(&self) -> IoResult<Vec<u8>> {
        let mut writer = BinaryWriter::with_capacity(self.size());
        self.serialize(&mut writer)?;
        Ok(writer.into_bytes())
    }

    /// Deserializes from a byte slice, requiring the whole slice to be
    /// consumed.
    fn from_array(data: &[u8]) -> IoResult<Self> {
        let mut reader = MemoryReader::new(data);
        let value = Self::deserialize(&mut reader)?;
        if reader.remaining() != 0 {
            return Err(crate::IoError::invalid(
                "serialized object",
                format!("{} trailing bytes after value", reader.remaining()),
            ));
        }
        Ok(value)
    }
}

impl<T: Serializable> SerializableExt for T {}

/// Serialized size of a var-int count followed by each item.
pub fn list_size<T: Serializable>(items: &[T]) -> usize {
    crate::var_size(items.len() as u64) + items.iter().map(Serializable::size).sum::<usize>()
}

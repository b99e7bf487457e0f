//! Binary serialization/deserialization trait for wire objects.
use crate::util::Result;
use std::io;
use std::io::{Read, Write};

/// An object that may be serialized and deserialized.
pub trait Serializable<T> {
    /// Reads the object from serialized form.
    ///
    /// # Errors
    /// Propagates IO errors or invalid data.
    fn read(reader: &mut dyn Read) -> Result<T>
    where
        Self: Sized;
    /// Writes the object to serialized form.
    ///
    /// # Errors
    /// IO errors.
    fn write(&self, writer: &mut dyn Write) -> io::Result<()>;
}

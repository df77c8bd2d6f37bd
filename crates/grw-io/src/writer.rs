//! Pretty-printed JSON writing.
//!
//! This module provides an async writer that serializes one JSON document
//! with 2-space indentation into a buffered sink.

use crate::Result;
use serde::Serialize;
use tokio::io::{AsyncWrite, AsyncWriteExt, BufWriter};

/// Async writer for indented JSON documents.
///
/// `JsonWriter` wraps an async writer in a [`BufWriter`], so a whole
/// document is handed to the operating system in few large writes.
///
/// # Examples
///
/// ```no_run
/// use grw_io::JsonWriter;
/// use tokio::fs::File;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let file = File::create("out.json").await?;
/// let mut writer = JsonWriter::new(file);
/// writer.write_pretty(&vec!["a", "b"]).await?;
/// writer.flush().await?;
/// # Ok(())
/// # }
/// ```
pub struct JsonWriter<W> {
    /// Buffered writer wrapping the underlying async writer.
    writer: BufWriter<W>,
}

impl<W: AsyncWrite + Unpin> JsonWriter<W> {
    /// Creates a new `JsonWriter` wrapping the given async writer.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }

    /// Serializes `value` with 2-space indentation followed by a newline.
    ///
    /// The value is serialized fully before anything is written, so a
    /// serialization error leaves the sink untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the sink rejects the write.
    pub async fn write_pretty<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        let mut bytes = serde_json::to_vec_pretty(value)?;
        bytes.push(b'\n');
        self.writer.write_all(&bytes).await?;
        Ok(())
    }

    /// Flushes buffered data to the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails to flush.
    pub async fn flush(&mut self) -> Result<()> {
        self.writer.flush().await?;
        Ok(())
    }

    /// Consumes the writer, returning the underlying buffered writer.
    ///
    /// Note: This does not flush the buffer. Call [`flush`](Self::flush)
    /// first.
    #[must_use]
    pub fn into_inner(self) -> BufWriter<W> {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use std::io::Cursor;

    #[derive(Serialize)]
    struct Entry {
        name: &'static str,
        imports: Vec<&'static str>,
    }

    async fn render<T: Serialize + ?Sized>(value: &T) -> String {
        let mut writer = JsonWriter::new(Cursor::new(Vec::new()));
        writer.write_pretty(value).await.unwrap();
        writer.flush().await.unwrap();
        String::from_utf8(writer.into_inner().into_inner().into_inner()).unwrap()
    }

    #[tokio::test]
    async fn writes_two_space_indentation() {
        let entries = [Entry {
            name: "root.mit.ann",
            imports: vec!["root.mit.bob"],
        }];
        let expected = "[\n  {\n    \"name\": \"root.mit.ann\",\n    \"imports\": [\n      \"root.mit.bob\"\n    ]\n  }\n]\n";
        assert_eq!(render(&entries[..]).await, expected);
    }

    #[tokio::test]
    async fn empty_array() {
        let entries: Vec<Entry> = Vec::new();
        assert_eq!(render(&entries).await, "[]\n");
    }

    #[tokio::test]
    async fn nothing_reaches_sink_before_flush() {
        let mut writer = JsonWriter::new(Cursor::new(Vec::new()));
        writer.write_pretty(&["x"]).await.unwrap();
        assert!(writer.into_inner().into_inner().into_inner().is_empty());
    }
}

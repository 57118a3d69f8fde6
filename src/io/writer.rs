/*! JSON Lines writer.

Serializes items as one JSON object per line.
Files ending with `.gz` are gzip-compressed.
!*/
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use flate2::{write::GzEncoder, Compression};
use serde::Serialize;

use super::reader::is_gzip;
use crate::error::Error;

/// Output sink, plain or gzipped.
pub enum Sink {
    Plain(BufWriter<File>),
    Gz(GzEncoder<BufWriter<File>>),
}

impl Sink {
    pub fn create(path: &Path) -> Result<Self, Error> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let f = BufWriter::new(File::create(path)?);
        if is_gzip(path) {
            Ok(Sink::Gz(GzEncoder::new(f, Compression::default())))
        } else {
            Ok(Sink::Plain(f))
        }
    }

    fn finish(self) -> Result<(), Error> {
        let mut inner = match self {
            Sink::Plain(w) => w,
            Sink::Gz(gz) => gz.finish()?,
        };
        inner.flush()?;
        Ok(())
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            Sink::Plain(w) => w.write(buf),
            Sink::Gz(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            Sink::Plain(w) => w.flush(),
            Sink::Gz(w) => w.flush(),
        }
    }
}

pub struct JsonLinesWriter {
    handle: Sink,
    nb_written: usize,
}

impl JsonLinesWriter {
    /// Create a writer at `dst`, creating parent directories if needed.
    pub fn from_path(dst: &Path) -> Result<Self, Error> {
        Ok(Self {
            handle: Sink::create(dst)?,
            nb_written: 0,
        })
    }

    /// write a batch of items.
    pub fn write<T: Serialize>(&mut self, items: &[T]) -> Result<(), Error> {
        let mut buf = String::new();
        for item in items {
            buf += &serde_json::to_string(item)?;
            buf.push('\n');
        }
        self.handle.write_all(buf.as_bytes())?;
        self.nb_written += items.len();
        Ok(())
    }

    /// Number of lines written so far.
    pub fn nb_written(&self) -> usize {
        self.nb_written
    }

    /// Flush and close the file, writing the gzip footer if needed.
    pub fn close(self) -> Result<(), Error> {
        self.handle.finish()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use flate2::read::MultiGzDecoder;
    use serde_json::json;

    use super::*;

    #[test]
    fn write_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jsonl");

        let mut w = JsonLinesWriter::from_path(&path).unwrap();
        w.write(&[json!({"a": 1}), json!({"a": 2})]).unwrap();
        w.write(&[json!("b")]).unwrap();
        w.write::<serde_json::Value>(&[]).unwrap();
        assert_eq!(w.nb_written(), 3);
        w.close().unwrap();

        let out = std::fs::read_to_string(&path).unwrap();
        assert_eq!(out, "{\"a\":1}\n{\"a\":2}\n\"b\"\n");
    }

    #[test]
    fn write_gz() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("out.jsonl.gz");

        let mut w = JsonLinesWriter::from_path(&path).unwrap();
        w.write(&[json!({"text": "foo"})]).unwrap();
        w.close().unwrap();

        let mut out = String::new();
        MultiGzDecoder::new(File::open(&path).unwrap())
            .read_to_string(&mut out)
            .unwrap();
        assert_eq!(out, "{\"text\":\"foo\"}\n");
    }
}

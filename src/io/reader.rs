/*! Reading facilities

Corpus files are read document by document. The format is guessed from the extension,
after stripping an eventual `.gz`:

- `.jsonl`/`.ndjson`/`.json`: one JSON object per line. A `.json` file holding a single
  array is not supported. The text field is either a string (raw text) or an array of
  strings and nulls (segmented text). An optional `id` field is used as document id.
- `.csv`: a header row, then one document per row.
- anything else: plain text, one document per non-empty line.

Malformed records are yielded as errors and reading goes on. A read error (truncated or
corrupt file) is yielded once, and ends the iteration.

!*/
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use flate2::read::MultiGzDecoder;
use log::debug;
use serde_json::Value;

use crate::error::Error;
use crate::triplets::TextInput;

/// A document read from a corpus file.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDocument {
    pub id: String,
    pub input: TextInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    JsonLines,
    Csv,
    Text,
}

impl Format {
    pub fn from_path(path: &Path) -> Self {
        let path = if is_gzip(path) {
            path.with_extension("")
        } else {
            path.to_path_buf()
        };
        match path.extension().and_then(|e| e.to_str()) {
            Some("jsonl") | Some("json") | Some("ndjson") => Format::JsonLines,
            Some("csv") => Format::Csv,
            _ => Format::Text,
        }
    }
}

pub(crate) fn is_gzip(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("gz")
}

/// Open a (possibly gzipped) file.
pub fn open(path: &Path) -> Result<Box<dyn BufRead + Send>, Error> {
    let f = File::open(path)?;
    if is_gzip(path) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(f))))
    } else {
        Ok(Box::new(BufReader::new(f)))
    }
}

/// List input files.
///
/// `src` can be a file, a directory (its files are listed in name order) or a glob pattern.
pub fn input_paths(src: &Path) -> Result<Vec<PathBuf>, Error> {
    let mut paths = if src.is_dir() {
        std::fs::read_dir(src)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .filter(|p| p.is_file())
            .collect()
    } else if src.is_file() {
        vec![src.to_path_buf()]
    } else {
        let pattern = src
            .to_str()
            .ok_or_else(|| Error::Custom(format!("invalid path {src:?}")))?;
        glob::glob(pattern)?.collect::<Result<Vec<_>, _>>()?
    };

    if paths.is_empty() {
        return Err(Error::Custom(format!("no input file found at {src:?}")));
    }
    paths.sort();
    debug!("input files: {:?}", paths);
    Ok(paths)
}

type DocIter = Box<dyn Iterator<Item = Result<RawDocument, Error>> + Send>;

/// Read documents of a corpus file.
///
/// `field` is the JSON field/CSV column holding the text, ignored for plain text.
pub fn read_documents(path: &Path, field: &str) -> Result<DocIter, Error> {
    let prefix = path
        .file_name()
        .and_then(|f| f.to_str())
        .unwrap_or_default()
        .to_string();
    let reader = open(path)?;

    let documents = match Format::from_path(path) {
        Format::JsonLines => json_documents(reader, field.to_string(), prefix),
        Format::Csv => csv_documents(reader, field, prefix)?,
        Format::Text => text_documents(reader, prefix),
    };
    Ok(until_read_error(documents))
}

/// Stop after the first read error.
///
/// A failing reader (e.g. a truncated gzip stream) fails on every subsequent call.
fn until_read_error(documents: DocIter) -> DocIter {
    let mut failed = false;
    Box::new(documents.map_while(move |doc| {
        if failed {
            return None;
        }
        if let Err(e) = &doc {
            failed = e.is_read_error();
        }
        Some(doc)
    }))
}

fn json_documents(reader: Box<dyn BufRead + Send>, field: String, prefix: String) -> DocIter {
    let iter = reader
        .lines()
        .enumerate()
        .filter(|(_, line)| match line {
            Ok(l) => !l.trim().is_empty(),
            Err(_) => true,
        })
        .map(move |(idx, line)| {
            let line = line?;
            let value: Value = serde_json::from_str(&line)?;
            json_document(value, &field, format!("{prefix}:{idx}"))
        });
    Box::new(iter)
}

fn json_document(value: Value, field: &str, default_id: String) -> Result<RawDocument, Error> {
    let mut obj = match value {
        Value::Object(obj) => obj,
        _ => {
            return Err(Error::InvalidInputType(
                "a JSON line that is not an object".to_string(),
            ))
        }
    };

    let id = match obj.remove("id") {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => default_id,
    };

    let text = obj
        .remove(field)
        .ok_or_else(|| Error::InvalidInputType(format!("a document without field {field:?}")))?;

    Ok(RawDocument {
        id,
        input: TextInput::try_from(text)?,
    })
}

fn csv_documents(
    reader: Box<dyn BufRead + Send>,
    field: &str,
    prefix: String,
) -> Result<DocIter, Error> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = rdr.headers()?.clone();

    let text_idx = headers
        .iter()
        .position(|h| h == field)
        .ok_or_else(|| Error::Custom(format!("no column {field:?} in {headers:?}")))?;
    let id_idx = headers.iter().position(|h| h == "id");

    let iter = rdr.into_records().enumerate().map(move |(idx, record)| {
        let record = record?;
        let id = id_idx
            .and_then(|i| record.get(i))
            .map(String::from)
            .unwrap_or_else(|| format!("{prefix}:{idx}"));
        let text = record
            .get(text_idx)
            .ok_or_else(|| Error::InvalidInputType(format!("row {idx} without text column")))?;
        Ok(RawDocument {
            id,
            input: TextInput::Raw(text.to_string()),
        })
    });
    Ok(Box::new(iter))
}

fn text_documents(reader: Box<dyn BufRead + Send>, prefix: String) -> DocIter {
    let iter = reader
        .lines()
        .enumerate()
        .filter(|(_, line)| match line {
            Ok(l) => !l.trim().is_empty(),
            Err(_) => true,
        })
        .map(move |(idx, line)| {
            Ok(RawDocument {
                id: format!("{prefix}:{idx}"),
                input: TextInput::Raw(line?),
            })
        });
    Box::new(iter)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::{write::GzEncoder, Compression};

    use super::*;
    use crate::triplets::SentenceSlot;

    fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn formats() {
        assert_eq!(Format::from_path(Path::new("a.jsonl")), Format::JsonLines);
        assert_eq!(Format::from_path(Path::new("a.jsonl.gz")), Format::JsonLines);
        assert_eq!(Format::from_path(Path::new("a.json")), Format::JsonLines);
        assert_eq!(Format::from_path(Path::new("a.csv")), Format::Csv);
        assert_eq!(Format::from_path(Path::new("a.txt.gz")), Format::Text);
        assert_eq!(Format::from_path(Path::new("a")), Format::Text);
    }

    #[test]
    fn jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "docs.jsonl",
            r#"{"id": "a", "content": "Raw text."}

{"content": ["one", null, "two"]}
{"content": 3}
"#,
        );

        let docs: Vec<_> = read_documents(&path, "content").unwrap().collect();
        assert_eq!(docs.len(), 3);

        let first = docs[0].as_ref().unwrap();
        assert_eq!(first.id, "a");
        assert_eq!(first.input, TextInput::Raw("Raw text.".to_string()));

        let second = docs[1].as_ref().unwrap();
        assert_eq!(second.id, "docs.jsonl:2");
        assert_eq!(
            second.input,
            TextInput::Segmented(vec![
                SentenceSlot::from("one"),
                SentenceSlot::Gap,
                SentenceSlot::from("two")
            ])
        );

        assert!(matches!(docs[2], Err(Error::InvalidInputType(_))));
    }

    #[test]
    fn jsonl_missing_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "docs.jsonl", r#"{"text": "foo"}"#);
        let docs: Vec<_> = read_documents(&path, "content").unwrap().collect();
        assert!(matches!(docs[0], Err(Error::InvalidInputType(_))));
    }

    #[test]
    fn csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "docs.csv",
            "id,content\n7,\"First, with a comma.\"\n8,Second.\n",
        );

        let docs: Vec<RawDocument> = read_documents(&path, "content")
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].id, "7");
        assert_eq!(
            docs[0].input,
            TextInput::Raw("First, with a comma.".to_string())
        );

        assert!(read_documents(&path, "missing").is_err());
    }

    #[test]
    fn gzipped_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs.txt.gz");
        let mut gz = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        gz.write_all(b"first document\n\nsecond document\n").unwrap();
        gz.finish().unwrap();

        let docs: Vec<RawDocument> = read_documents(&path, "content")
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[1].id, "docs.txt.gz:2");
    }

    #[test]
    fn truncated_gzip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs.txt.gz");
        let mut gz = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        for idx in 0..2000 {
            writeln!(gz, "document number {idx}, with a bit of text {}", idx * 7919).unwrap();
        }
        gz.finish().unwrap();

        // cut the file in half
        let bytes = std::fs::read(&path).unwrap();
        std::fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();

        let docs: Vec<_> = read_documents(&path, "content").unwrap().take(10_000).collect();
        assert!(docs.len() < 2000);
        let last = docs.last().unwrap();
        assert!(matches!(last, Err(e) if e.is_read_error()));
        assert_eq!(docs.iter().filter(|d| d.is_err()).count(), 1);
    }

    #[test]
    fn discovery() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "b.jsonl", "");
        write_file(dir.path(), "a.jsonl", "");
        write_file(dir.path(), "c.txt", "");

        let paths = input_paths(dir.path()).unwrap();
        assert_eq!(paths.len(), 3);
        assert!(paths[0].ends_with("a.jsonl"));

        let pattern = dir.path().join("*.jsonl");
        assert_eq!(input_paths(&pattern).unwrap().len(), 2);

        let pattern = dir.path().join("*.csv");
        assert!(input_paths(&pattern).is_err());
    }
}

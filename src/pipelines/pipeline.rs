//! Pipeline trait.
use std::path::Path;

use itertools::Itertools;
use log::{error, info};

use crate::error::Error;
use crate::io::{input_paths, read_documents, RawDocument};

/// This trait must be implemented for each Pipeline,
/// and is generic over the return type so that
/// any custom pipeline that needs a return type can use the
/// trait aswell.
pub trait Pipeline<T> {
    fn run(&self) -> Result<T, Error>;
}

/// Read every input file of `src` and feed `f` with chunks of at most `chunk_size` documents.
///
/// Malformed records are logged and skipped. Returns their number.
/// A file that can't be read to its end (truncated or corrupt) aborts with its read error.
pub(crate) fn for_each_chunk<F>(
    src: &Path,
    field: &str,
    chunk_size: usize,
    mut f: F,
) -> Result<usize, Error>
where
    F: FnMut(Vec<RawDocument>) -> Result<(), Error>,
{
    let chunk_size = chunk_size.max(1);
    let mut nb_errors = 0;

    for path in input_paths(src)? {
        info!("processing {:?}", path);
        let chunks = read_documents(&path, field)?.chunks(chunk_size);

        for (idx, chunk) in chunks.into_iter().enumerate() {
            let mut documents = Vec::with_capacity(chunk_size);
            for doc in chunk {
                match doc {
                    Ok(doc) => documents.push(doc),
                    Err(e) if e.is_read_error() => {
                        error!("{:?}: could not read file: {:?}", path, e);
                        return Err(e);
                    }
                    Err(e) => {
                        error!("{:?}: skipping record: {:?}", path, e);
                        nb_errors += 1;
                    }
                }
            }

            info!("{:?}: chunk {} ({} documents)", path, idx, documents.len());
            f(documents)?;
        }
    }

    Ok(nb_errors)
}

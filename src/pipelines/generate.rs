//! Example generation pipeline
//!
//! Reads prepared documents (or raw text, which gets segmented) and writes
//! the example groups of the chosen [Task], one document per line:
//!
//! ```json
//! {"id": "doc-0", "task": "sop", "groups": [[{"text": "a b c", "label": true}, ...]]}
//! ```
//!
//! In flat mode, examples are written one per line, without grouping.
//! Documents yielding no group are not written.
use std::path::PathBuf;

use log::{debug, error, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::TripletConfig;
use crate::error::Error;
use crate::io::{JsonLinesWriter, RawDocument};
use crate::segmenter::UnicodeSentences;
use crate::triplets::{Example, ExampleGroup, Generate, Task};

use super::pipeline::{for_each_chunk, Pipeline};

/// Example groups of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentExamples {
    pub id: String,
    pub task: Task,
    pub groups: Vec<ExampleGroup>,
}

impl DocumentExamples {
    pub fn nb_examples(&self) -> usize {
        self.groups.iter().map(ExampleGroup::len).sum()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateStats {
    pub documents: usize,
    pub groups: usize,
    pub examples: usize,
    /// malformed or failing records
    pub errors: usize,
}

pub struct GenerateExamples {
    src: PathBuf,
    dst: PathBuf,
    field: String,
    chunk_size: usize,
    flat: bool,
    task: Task,
    generator: Box<dyn Generate + Sync>,
    segmenter: UnicodeSentences,
}

impl GenerateExamples {
    pub fn new(src: PathBuf, dst: PathBuf, task: Task, config: &TripletConfig) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self {
            src,
            dst,
            field: "sentences".to_string(),
            chunk_size: 500,
            flat: false,
            task,
            generator: task.generator(config),
            segmenter: UnicodeSentences,
        })
    }

    /// Set the JSON field/CSV column holding the text.
    pub fn with_field(mut self, field: &str) -> Self {
        self.field = field.to_string();
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Write one example per line.
    pub fn with_flat(mut self, flat: bool) -> Self {
        self.flat = flat;
        self
    }

    /// Generate the example groups of a single document.
    pub fn process(&self, doc: RawDocument) -> Result<DocumentExamples, Error> {
        let slots = doc.input.into_slots(&self.segmenter);
        let groups = self.generator.generate(slots)?;
        debug!("{}: {} groups", doc.id, groups.len());
        Ok(DocumentExamples {
            id: doc.id,
            task: self.task,
            groups,
        })
    }
}

impl Pipeline<GenerateStats> for GenerateExamples {
    fn run(&self) -> Result<GenerateStats, Error> {
        let mut writer = JsonLinesWriter::from_path(&self.dst)?;
        let mut stats = GenerateStats::default();

        let nb_errors = for_each_chunk(&self.src, &self.field, self.chunk_size, |chunk| {
            stats.documents += chunk.len();

            let results: Vec<Result<DocumentExamples, Error>> = chunk
                .into_par_iter()
                .map(|doc| self.process(doc))
                .collect();

            let mut documents = Vec::with_capacity(results.len());
            for result in results {
                match result {
                    Ok(doc) if doc.groups.is_empty() => (),
                    Ok(doc) => {
                        stats.groups += doc.groups.len();
                        stats.examples += doc.nb_examples();
                        documents.push(doc);
                    }
                    Err(e) => {
                        error!("skipping document: {:?}", e);
                        stats.errors += 1;
                    }
                }
            }

            if self.flat {
                let examples: Vec<Example> = documents
                    .into_iter()
                    .flat_map(|doc| doc.groups)
                    .flatten()
                    .collect();
                writer.write(&examples)
            } else {
                writer.write(&documents)
            }
        })?;

        stats.errors += nb_errors;
        let nb_written = writer.nb_written();
        writer.close()?;

        info!(
            "{}: {} documents, {} groups, {} examples, {} errors",
            self.task, stats.documents, stats.groups, stats.examples, stats.errors
        );
        info!("{} lines written to {:?}", nb_written, self.dst);
        Ok(stats)
    }
}

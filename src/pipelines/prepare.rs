//! Corpus preparation pipeline
//!
//! Turns a raw corpus into documents of sentences of the target language family,
//! ready for example generation.
//!
//! # Processing
//! 1. Raw text is normalized (line breaks, missing spaces after dots, whitespace) and segmented into sentences.
//!    Already segmented documents skip this step.
//! 1. Each sentence is cleaned from markup leftovers and emoticons. Sentences that end up empty are dropped.
//! 1. Each sentence is identified and scored against the language family.
//! 1. Sentences are filtered, rescuing low scoring sentences surrounded by valid ones.
//!    Existing gaps are kept, and no rescue happens across them.
//! 1. Documents that are too small are dropped, others are written.
use std::path::PathBuf;

use log::{debug, error, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::LanguageFilterConfig;
use crate::error::Error;
use crate::filtering::{ContextFilter, FilteredDocument, ScoredSentence};
use crate::identifiers::{LanguageFamily, Predict};
use crate::io::{JsonLinesWriter, RawDocument};
use crate::segmenter::{Segment, UnicodeSentences};
use crate::transformers::{MarkupArtifacts, Normalizer, Transform};
use crate::triplets::{SentenceSlot, TextInput};

use super::pipeline::{for_each_chunk, Pipeline};

/// Output of the preparation, input of the generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreparedDocument {
    pub id: String,
    pub sentences: Vec<SentenceSlot>,
    /// at least one sentence has been removed
    pub processed: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrepareStats {
    pub read: usize,
    pub kept: usize,
    pub dropped: usize,
    /// kept documents where sentences have been removed
    pub processed: usize,
    /// malformed or failing records
    pub errors: usize,
}

pub struct Prepare<P: Predict> {
    src: PathBuf,
    dst: PathBuf,
    field: String,
    chunk_size: usize,
    model: P,
    family: LanguageFamily,
    filter: ContextFilter,
    document: Normalizer,
    sentence: Normalizer,
    segmenter: UnicodeSentences,
}

impl<P: Predict> Prepare<P> {
    pub fn new(
        src: PathBuf,
        dst: PathBuf,
        model: P,
        config: &LanguageFilterConfig,
        markup: MarkupArtifacts,
    ) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self {
            src,
            dst,
            field: "text".to_string(),
            chunk_size: 500,
            model,
            family: LanguageFamily::new(&config.languages)?,
            filter: ContextFilter::new(config),
            document: Normalizer::document(),
            sentence: Normalizer::sentence(markup),
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

    /// Split the document into runs of clean sentences, runs being separated by gaps.
    fn sentence_runs(&self, input: TextInput) -> Vec<Vec<String>> {
        let slots = match input {
            TextInput::Raw(text) => {
                let text = self.document.transform_own(text);
                self.segmenter
                    .segment(&text)
                    .into_iter()
                    .map(SentenceSlot::from)
                    .collect()
            }
            TextInput::Segmented(slots) => slots,
        };

        let mut runs = vec![Vec::new()];
        for slot in slots {
            match slot {
                SentenceSlot::Present(sentence) => {
                    let text = self.sentence.transform_own(sentence.into_inner());
                    if !text.is_empty() {
                        if let Some(run) = runs.last_mut() {
                            run.push(text);
                        }
                    }
                }
                SentenceSlot::Gap => runs.push(Vec::new()),
            }
        }
        runs.retain(|run| !run.is_empty());
        runs
    }

    fn score(&self, text: String) -> Result<ScoredSentence, Error> {
        let identifications = self.model.predict(&text)?;
        let score = self.family.score(&identifications);
        Ok(ScoredSentence::new(text, score))
    }

    /// Filter each run, then join non-empty results with gaps.
    fn filter_runs(&self, runs: Vec<Vec<ScoredSentence>>) -> FilteredDocument {
        let mut slots = Vec::new();
        let mut processed = false;
        for run in runs {
            let filtered = self.filter.filter(run);
            processed |= filtered.processed;
            if filtered.slots.is_empty() {
                continue;
            }
            if !slots.is_empty() {
                slots.push(SentenceSlot::Gap);
            }
            slots.extend(filtered.slots);
        }
        FilteredDocument { slots, processed }
    }

    /// Prepare a single document.
    ///
    /// Returns [None] if the document is dropped.
    pub fn process(&self, doc: RawDocument) -> Result<Option<PreparedDocument>, Error> {
        let runs = self
            .sentence_runs(doc.input)
            .into_iter()
            .map(|run| {
                run.into_iter()
                    .map(|sentence| self.score(sentence))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        let filtered = self.filter_runs(runs);
        if !self.filter.keep(&filtered) {
            debug!("{}: dropped ({} slots)", doc.id, filtered.slots.len());
            return Ok(None);
        }

        debug!(
            "{}: kept {} sentences, processed: {}",
            doc.id,
            filtered.nb_present(),
            filtered.processed
        );
        Ok(Some(PreparedDocument {
            id: doc.id,
            sentences: filtered.slots,
            processed: filtered.processed,
        }))
    }
}

impl<P: Predict> Pipeline<PrepareStats> for Prepare<P> {
    fn run(&self) -> Result<PrepareStats, Error> {
        let mut writer = JsonLinesWriter::from_path(&self.dst)?;
        let mut stats = PrepareStats::default();

        let nb_errors = for_each_chunk(&self.src, &self.field, self.chunk_size, |chunk| {
            stats.read += chunk.len();

            let results: Vec<Result<Option<PreparedDocument>, Error>> = chunk
                .into_par_iter()
                .map(|doc| self.process(doc))
                .collect();

            let mut kept = Vec::with_capacity(results.len());
            for result in results {
                match result {
                    Ok(Some(doc)) => {
                        if doc.processed {
                            stats.processed += 1;
                        }
                        kept.push(doc);
                    }
                    Ok(None) => stats.dropped += 1,
                    Err(e) => {
                        error!("skipping document: {:?}", e);
                        stats.errors += 1;
                    }
                }
            }

            stats.kept += kept.len();
            writer.write(&kept)
        })?;

        stats.errors += nb_errors;
        let nb_written = writer.nb_written();
        writer.close()?;

        info!(
            "prepared {} documents: {} kept ({} processed), {} dropped, {} errors",
            stats.read, stats.kept, stats.processed, stats.dropped, stats.errors
        );
        info!("{} lines written to {:?}", nb_written, self.dst);
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifiers::{parse_label, Identification};

    /// Identifies sentences starting with "Foreign" as english, others as kazakh.
    struct Mock;

    impl Predict for Mock {
        fn predict(&self, sentence: &str) -> Result<Vec<Identification>, Error> {
            let (label, prob) = if sentence.starts_with("Foreign") {
                ("en", 0.9)
            } else {
                ("__label__kk", 0.9)
            };
            Ok(vec![Identification::new(parse_label(label)?, prob)])
        }
    }

    fn prepare() -> Prepare<Mock> {
        Prepare::new(
            PathBuf::from("in.jsonl"),
            PathBuf::from("out.jsonl"),
            Mock,
            &LanguageFilterConfig::default(),
            MarkupArtifacts::default(),
        )
        .unwrap()
    }

    fn raw(text: &str) -> RawDocument {
        RawDocument {
            id: "doc".to_string(),
            input: TextInput::Raw(text.to_string()),
        }
    }

    fn texts(doc: &PreparedDocument) -> Vec<Option<&str>> {
        doc.sentences
            .iter()
            .map(|s| s.sentence().map(|s| s.text()))
            .collect()
    }

    #[test]
    fn raw_document() {
        let p = prepare();
        let doc = p
            .process(raw(
                "Бірінші сөйлем.Екінші <b>сөйлем</b>. Foreign text here. Foreign again. Үшінші сөйлем. Төртінші.",
            ))
            .unwrap()
            .unwrap();

        assert!(doc.processed);
        assert_eq!(
            texts(&doc),
            vec![
                Some("Бірінші сөйлем."),
                Some("Екінші сөйлем."),
                None,
                Some("Үшінші сөйлем."),
                Some("Төртінші.")
            ]
        );
    }

    #[test]
    fn rescue() {
        let p = prepare();
        let doc = p
            .process(raw("Бір. Foreign. Екі."))
            .unwrap()
            .unwrap();
        assert!(!doc.processed);
        assert_eq!(doc.sentences.len(), 3);
    }

    #[test]
    fn segmented_keeps_gaps() {
        let p = prepare();
        let doc = RawDocument {
            id: "seg".to_string(),
            input: TextInput::Segmented(vec![
                SentenceSlot::from("Бір."),
                SentenceSlot::from("Екі."),
                SentenceSlot::Gap,
                SentenceSlot::from("  😀  "),
                SentenceSlot::from("Үш."),
            ]),
        };
        let doc = p.process(doc).unwrap().unwrap();
        assert!(!doc.processed);
        assert_eq!(
            texts(&doc),
            vec![Some("Бір."), Some("Екі."), None, Some("Үш.")]
        );
    }

    #[test]
    fn dropped() {
        let p = prepare();
        assert!(p.process(raw("Foreign only. Foreign again.")).unwrap().is_none());
        assert!(p.process(raw("Бір. Екі.")).unwrap().is_none());
        assert!(p.process(raw("")).unwrap().is_none());
    }
}

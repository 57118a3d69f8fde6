/*! # Triplets

Mining of sentence triplets in pretraining corpora,
and generation of Sentence Order Prediction (SOP) and Next Sentence Prediction (NSP) examples.

The crate provides two pipelines:

- [pipelines::Prepare] cleans a raw corpus, segments it into sentences and removes
  sentences that are not in the target language family, leaving gaps where text was removed.
- [pipelines::GenerateExamples] finds triplets of consecutive sentences of similar length
  and turns them into labeled examples.

Both can be used from the `triplets` command line tool, or as a library.
!*/
pub mod config;
pub mod error;
pub mod filtering;
pub mod identifiers;
pub mod io;
pub mod pipelines;
pub mod segmenter;
pub mod transformers;
pub mod triplets;

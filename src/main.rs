//! # Triplets
//!
//! Sentence triplet mining and SOP/NSP example generation.
//!
//! ```sh
//! triplets 0.1.0
//! SOP/NSP example generation from corpora.
//!
//! USAGE:
//!     triplets <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     generate    Generate SOP/NSP examples from a prepared corpus
//!     help        Prints this message or the help of the given subcommand(s)
//!     prepare     Clean, segment and filter a corpus by language family
//! ```
//!
//! Logging is controlled with `RUST_LOG` (e.g. `RUST_LOG=triplets=info`).
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

use triplets::error::Error;
use triplets::identifiers::FastTextBuilder;
use triplets::pipelines::{GenerateExamples, Pipeline, Prepare};
use triplets::transformers::MarkupArtifacts;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Triplets::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Triplets::Prepare(p) => {
            let config = p.language_config()?;
            let markup = match &p.rules {
                Some(rules) => MarkupArtifacts::from_path(rules)?,
                None => MarkupArtifacts::default(),
            };
            let model = FastTextBuilder::default()
                .path(&p.lid_path)
                .k(config.top_k)
                .build()?;

            let pipeline = Prepare::new(p.src, p.dst, model, &config, markup)?
                .with_field(&p.field)
                .with_chunk_size(p.chunk_size);
            let stats = pipeline.run()?;
            info!("{:?}", stats);
        }

        cli::Triplets::Generate(g) => {
            let config = g.triplet_config()?;
            let pipeline = GenerateExamples::new(g.src, g.dst, g.task, &config)?
                .with_field(&g.field)
                .with_chunk_size(g.chunk_size)
                .with_flat(g.flat);
            let stats = pipeline.run()?;
            info!("{:?}", stats);
        }
    };
    Ok(())
}

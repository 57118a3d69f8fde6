//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use triplets::config::{Config, LanguageFilterConfig, TripletConfig};
use triplets::error::Error;
use triplets::triplets::Task;

#[derive(Debug, StructOpt)]
#[structopt(name = "triplets", about = "SOP/NSP example generation from corpora.")]
/// Holds every command that is callable by the `triplets` command.
pub enum Triplets {
    #[structopt(about = "Clean, segment and filter a corpus by language family")]
    Prepare(Prepare),
    #[structopt(about = "Generate SOP/NSP examples from a prepared corpus")]
    Generate(Generate),
}

/// Load the config file if any, defaults otherwise.
fn load_config(path: &Option<PathBuf>) -> Result<Config, Error> {
    match path {
        Some(p) => Config::from_path(p),
        None => Ok(Config::default()),
    }
}

#[derive(Debug, StructOpt)]
pub struct Prepare {
    #[structopt(parse(from_os_str), help = "source corpus location (file, folder or glob)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination file (.jsonl or .jsonl.gz)")]
    pub dst: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "lid-path",
        help = "Path to lid.176.bin",
        default_value = "lid.176.bin"
    )]
    pub lid_path: PathBuf,
    #[structopt(long = "p-valid", help = "family probability above which a sentence is kept")]
    pub p_valid: Option<f32>,
    #[structopt(long = "top-k", help = "number of identifications per sentence")]
    pub top_k: Option<i32>,
    #[structopt(long = "keep-small", help = "keep documents with few sentences")]
    pub keep_small: bool,
    #[structopt(long = "min-slots", help = "minimum number of slots of a document")]
    pub min_slots: Option<usize>,
    #[structopt(
        long = "languages",
        use_delimiter = true,
        help = "comma-separated target languages (default: turkic languages)"
    )]
    pub languages: Option<Vec<String>>,
    #[structopt(parse(from_os_str), long = "rules", help = "markup cleaning rules (JSON)")]
    pub rules: Option<PathBuf>,
    #[structopt(long = "field", default_value = "text", help = "JSON field/CSV column holding the text")]
    pub field: String,
    #[structopt(parse(from_os_str), long = "config", help = "JSON configuration file")]
    pub config: Option<PathBuf>,
    #[structopt(
        help = "number of documents processed at once.",
        long = "chunk_size",
        default_value = "500",
        short = "s"
    )]
    pub chunk_size: usize,
}

impl Prepare {
    /// Config file values, overridden by command line flags.
    pub fn language_config(&self) -> Result<LanguageFilterConfig, Error> {
        let mut config = load_config(&self.config)?.language;
        if let Some(p_valid) = self.p_valid {
            config.p_valid = p_valid;
        }
        if let Some(top_k) = self.top_k {
            config.top_k = top_k;
        }
        if self.keep_small {
            config.drop_small = false;
        }
        if let Some(min_slots) = self.min_slots {
            config.small_text_range = min_slots;
        }
        if let Some(languages) = &self.languages {
            config.languages = languages.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, StructOpt)]
pub struct Generate {
    #[structopt(parse(from_os_str), help = "prepared corpus location (file, folder or glob)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination file (.jsonl or .jsonl.gz)")]
    pub dst: PathBuf,
    #[structopt(long = "task", help = "sop or nsp")]
    pub task: Task,
    #[structopt(short = "k", help = "maximum relative deviation from the mean length")]
    pub k: Option<f64>,
    #[structopt(long = "min-length", help = "minimum mean sentence length (characters)")]
    pub min_length: Option<usize>,
    #[structopt(long = "max-length", help = "maximum mean sentence length (characters)")]
    pub max_length: Option<usize>,
    #[structopt(
        long = "field",
        default_value = "sentences",
        help = "JSON field/CSV column holding the text"
    )]
    pub field: String,
    #[structopt(long = "flat", help = "write one example per line")]
    pub flat: bool,
    #[structopt(parse(from_os_str), long = "config", help = "JSON configuration file")]
    pub config: Option<PathBuf>,
    #[structopt(
        help = "number of documents processed at once.",
        long = "chunk_size",
        default_value = "500",
        short = "s"
    )]
    pub chunk_size: usize,
}

impl Generate {
    /// Config file values, overridden by command line flags.
    pub fn triplet_config(&self) -> Result<TripletConfig, Error> {
        let mut config = load_config(&self.config)?.triplets;
        if let Some(k) = self.k {
            config.k = k;
        }
        if let Some(min_length) = self.min_length {
            config.min_l_sent = min_length;
        }
        if let Some(max_length) = self.max_length {
            config.max_l_sent = max_length;
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn prepare_overrides() {
        let cmd = Triplets::from_iter(&[
            "triplets",
            "prepare",
            "src",
            "dst.jsonl",
            "--p-valid",
            "0.5",
            "--keep-small",
            "--languages",
            "kk,ky",
        ]);
        let p = match cmd {
            Triplets::Prepare(p) => p,
            _ => panic!("wrong subcommand"),
        };
        assert_eq!(p.chunk_size, 500);
        assert_eq!(p.field, "text");

        let config = p.language_config().unwrap();
        assert_eq!(config.p_valid, 0.5);
        assert!(!config.drop_small);
        assert_eq!(config.languages, vec!["kk".to_string(), "ky".to_string()]);
        assert_eq!(config.top_k, 20);
    }

    #[test]
    fn generate_config_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, r#"{{"triplets": {{"k": 0.1, "min_l_sent": 10}}}}"#).unwrap();
        let config_path = f.path().to_str().unwrap().to_string();

        let cmd = Triplets::from_iter(&[
            "triplets",
            "generate",
            "src",
            "dst.jsonl",
            "--task",
            "nsp",
            "--max-length",
            "50",
            "--config",
            config_path.as_str(),
        ]);
        let g = match cmd {
            Triplets::Generate(g) => g,
            _ => panic!("wrong subcommand"),
        };
        assert_eq!(g.task, Task::Nsp);

        let config = g.triplet_config().unwrap();
        assert_eq!(config.k, 0.1);
        assert_eq!(config.min_l_sent, 10);
        assert_eq!(config.max_l_sent, 50);
    }

    #[test]
    fn generate_invalid() {
        let cmd = Triplets::from_iter(&[
            "triplets",
            "generate",
            "src",
            "dst.jsonl",
            "--task",
            "sop",
            "--min-length",
            "80",
            "--max-length",
            "50",
        ]);
        if let Triplets::Generate(g) = cmd {
            assert!(g.triplet_config().is_err());
        } else {
            panic!("wrong subcommand");
        }
    }
}

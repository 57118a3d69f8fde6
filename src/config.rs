/*! Configuration

Every tunable of the crate lives here. All structs implement [Default] and
can be (partially) loaded from a JSON file, missing fields falling back to defaults.

```json
{
    "triplets": {"k": 0.2, "min_l_sent": 30, "max_l_sent": 100},
    "language": {"p_valid": 0.3, "languages": ["kk", "ky"]}
}
```
!*/
use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Triplet length constraints.
///
/// - `k`: max relative deviation of a sentence length from the triplet mean length
/// - `min_l_sent`/`max_l_sent`: inclusive bounds on the triplet mean length
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripletConfig {
    pub k: f64,
    pub min_l_sent: usize,
    pub max_l_sent: usize,
}

impl TripletConfig {
    /// Build a validated configuration.
    pub fn new(k: f64, min_l_sent: usize, max_l_sent: usize) -> Result<Self, Error> {
        let config = Self {
            k,
            min_l_sent,
            max_l_sent,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if !self.k.is_finite() || self.k <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "k must be a positive number, got {}",
                self.k
            )));
        }
        if self.max_l_sent < self.min_l_sent {
            return Err(Error::InvalidConfig(format!(
                "max_l_sent ({}) is lower than min_l_sent ({})",
                self.max_l_sent, self.min_l_sent
            )));
        }
        Ok(())
    }
}

impl Default for TripletConfig {
    fn default() -> Self {
        Self {
            k: 0.2,
            min_l_sent: 30,
            max_l_sent: 100,
        }
    }
}

/// Language family filtering parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageFilterConfig {
    /// family probability above which a sentence is kept
    pub p_valid: f32,
    /// number of predictions requested to the identifier
    pub top_k: i32,
    /// drop documents having less than `small_text_range` slots
    pub drop_small: bool,
    pub small_text_range: usize,
    /// language tags (BCP47 or fasttext-style) of the target family
    pub languages: Vec<String>,
}

impl LanguageFilterConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if !(0.0..=1.0).contains(&self.p_valid) {
            return Err(Error::InvalidConfig(format!(
                "p_valid must be within [0, 1], got {}",
                self.p_valid
            )));
        }
        if self.top_k < 1 {
            return Err(Error::InvalidConfig(format!(
                "top_k must be at least 1, got {}",
                self.top_k
            )));
        }
        if self.languages.is_empty() {
            return Err(Error::InvalidConfig(
                "at least one target language is needed".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LanguageFilterConfig {
    fn default() -> Self {
        Self {
            p_valid: 0.3,
            top_k: 20,
            drop_small: true,
            small_text_range: 3,
            languages: ["ba", "kk", "tt", "ky", "tr", "az", "tk", "uz", "ug", "cv", "krc"]
                .iter()
                .map(|l| l.to_string())
                .collect(),
        }
    }
}

/// Whole configuration, as found in a config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub triplets: TripletConfig,
    pub language: LanguageFilterConfig,
}

impl Config {
    /// Load and validate a JSON configuration file.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let f = File::open(path)?;
        let config: Config = serde_json::from_reader(BufReader::new(f))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        self.triplets.validate()?;
        self.language.validate()
    }
}

/*! FastText model.

Sentence-level language identification, returning the top-k identifications.
* !*/
use std::path::Path;

use fasttext::FastText as FastTextLib;
use log::error;

use crate::error::Error;

use super::identification::Identification;

/// Prediction trait.
///
/// Gives the ranked identifications of a sentence.
/// An empty [Vec] means that nothing passed the model threshold.
pub trait Predict: Sync {
    fn predict(&self, sentence: &str) -> Result<Vec<Identification>, Error>;
}

/// FastText model, with its top-k and threshold.
pub struct FastText {
    inner: FastTextLib,
    pub k: i32,
    pub threshold: f32,
}

impl Predict for FastText {
    fn predict(&self, sentence: &str) -> Result<Vec<Identification>, Error> {
        // filter out unicode null chars
        // this prevents fasttext errors
        let sentence = sentence.replace(char::from(0), "");

        let predictions = self
            .inner
            .predict(&sentence, self.k, self.threshold)
            .map_err(Error::FastText)?;

        let identifications = predictions
            .into_iter()
            .filter_map(|pred| match Identification::try_from(pred) {
                Ok(id) => Some(id),
                Err(e) => {
                    error!("Error with tag: {e:?}");
                    None
                }
            })
            .collect();

        Ok(identifications)
    }
}

/// Fasttext builder.
pub struct FastTextBuilder<'a> {
    path: Option<&'a Path>,
    k: Option<i32>,
    threshold: Option<f32>,
}

impl<'a> FastTextBuilder<'a> {
    fn init_fasttextlib(path: &str) -> Result<FastTextLib, Error> {
        let mut ft = FastTextLib::new();
        ft.load_model(path).map_err(Error::FastText)?;
        Ok(ft)
    }

    /// attempt to build, resort to the following defaults if not set:
    /// - path: "./lid.176.bin"
    /// - k: 20
    /// - threshold: 0.0
    pub fn build_or_default(&self) -> Result<FastText, Error> {
        let inner = {
            let path = match self.path {
                Some(p) => p
                    .to_str()
                    .ok_or_else(|| Error::Custom(format!("Could not parse path {p:?}")))?,
                None => "lid.176.bin",
            };
            Self::init_fasttextlib(path)?
        };

        Ok(FastText {
            inner,
            k: self.k.unwrap_or(20),
            threshold: self.threshold.unwrap_or(0.0),
        })
    }

    pub fn build(&self) -> Result<FastText, Error> {
        match (self.path, self.k, self.threshold) {
            (Some(_), Some(_), Some(_)) => self.build_or_default(),
            (None, _, _) => Err(Error::Custom("No path provided".to_string())),
            (_, None, _) => Err(Error::Custom("No k provided".to_string())),
            (_, _, None) => Err(Error::Custom("No threshold provided".to_string())),
        }
    }

    pub fn path<'b>(&'b mut self, path: &'a Path) -> &'b mut FastTextBuilder<'a> {
        self.path = Some(path);
        self
    }

    pub fn k<'b>(&'b mut self, k: i32) -> &'b mut FastTextBuilder<'a> {
        self.k = Some(k);
        self
    }

    pub fn threshold<'b>(&'b mut self, threshold: f32) -> &'b mut FastTextBuilder<'a> {
        self.threshold = Some(threshold);
        self
    }
}

impl<'a> Default for FastTextBuilder<'a> {
    fn default() -> Self {
        Self {
            path: Some(Path::new("lid.176.bin")),
            k: Some(20),
            threshold: Some(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FastTextBuilder;
    use crate::error::Error;

    #[test]
    fn missing_parameters() {
        let mut b = FastTextBuilder::default();
        b.path = None;
        assert!(matches!(b.build(), Err(Error::Custom(_))));

        let mut b = FastTextBuilder::default();
        b.k = None;
        assert!(matches!(b.build(), Err(Error::Custom(_))));
    }
}

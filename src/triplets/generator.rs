//! Generate trait and task selection.
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::config::TripletConfig;
use crate::error::Error;

use super::example::ExampleGroup;
use super::finder::TripletFinder;
use super::nsp::Nsp;
use super::sop::Sop;
use super::types::SentenceSlot;

/// Turns a document into example groups.
///
/// Takes ownership of the slots: each document owns its own sequence,
/// and generators are free to mutate it.
pub trait Generate {
    fn generate(&self, slots: Vec<SentenceSlot>) -> Result<Vec<ExampleGroup>, Error>;
}

/// Pretraining task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Task {
    /// Sentence Order Prediction
    Sop,
    /// Next Sentence Prediction
    Nsp,
}

impl Task {
    /// Get the generator of this task.
    pub fn generator(&self, config: &TripletConfig) -> Box<dyn Generate + Sync> {
        let finder = TripletFinder::new(config);
        match self {
            Task::Sop => Box::new(Sop::new(finder)),
            Task::Nsp => Box::new(Nsp::new(finder)),
        }
    }

    /// Number of examples in each group.
    pub fn group_size(&self) -> usize {
        match self {
            Task::Sop => 6,
            Task::Nsp => 4,
        }
    }
}

impl FromStr for Task {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sop" => Ok(Task::Sop),
            "nsp" => Ok(Task::Nsp),
            other => Err(Error::InvalidConfig(format!(
                "unknown task {other:?}, expected sop or nsp"
            ))),
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Task::Sop => write!(f, "sop"),
            Task::Nsp => write!(f, "nsp"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triplets::testing::slots;

    #[test]
    fn parse() {
        assert_eq!("sop".parse::<Task>().unwrap(), Task::Sop);
        assert_eq!("NSP".parse::<Task>().unwrap(), Task::Nsp);
        assert!("mlm".parse::<Task>().is_err());
        assert_eq!(Task::Nsp.to_string(), "nsp");
    }

    #[test]
    fn group_sizes() {
        let config = TripletConfig::default();
        let doc = slots(&[Some(40); 7]);
        for task in [Task::Sop, Task::Nsp] {
            let groups = task.generator(&config).generate(doc.clone()).unwrap();
            assert!(!groups.is_empty());
            assert!(groups.iter().all(|g| g.len() == task.group_size()));
        }
    }
}

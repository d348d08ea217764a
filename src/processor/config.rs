use crate::observability::labels::Labels;
use crate::processor::RutProcessor;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;

#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RutConfig {
    /// Verify the checksum before formatting or cleaning
    #[serde(default = "default_validate")]
    pub validate: bool,

    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub labels: Labels,
}

fn default_validate() -> bool {
    true
}

impl Default for RutConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RutConfig {
    pub fn new() -> Self {
        Self {
            validate: default_validate(),
            labels: Labels::empty(),
        }
    }

    pub fn validate(&self, validate: bool) -> Self {
        self.mutate_clone(|x| x.validate = validate)
    }

    pub fn labels(&self, labels: Labels) -> Self {
        self.mutate_clone(|x| x.labels = labels)
    }

    pub fn build(&self) -> RutProcessor {
        RutProcessor::new(self)
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}

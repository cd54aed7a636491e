use pcbplace::io::ext_repr::{ExtInstance, ExtSolution};
use serde::{Deserialize, Serialize};

use crate::config::PlacerConfig;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PlacerOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub config: PlacerConfig,
}

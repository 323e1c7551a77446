use crate::config::FFDConfig;
use cutsheet::io::ext_repr::{ExtInstance, ExtSolution};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct FFDOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub config: FFDConfig,
    /// Wall-clock time spent packing, in seconds
    pub run_time_sec: f64,
}

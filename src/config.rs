use crate::Result;
use confique::Config as _;

/// Settings read from `QUERYSTUDIO_*` environment variables.
#[derive(Debug, Clone, confique::Config)]
pub struct Config {
    /// Spaces per indent level in formatted output.
    #[config(env = "QUERYSTUDIO_TAB_SIZE", default = 2)]
    pub tab_size: usize,
    /// Print lint diagnostics from `check`.
    #[config(env = "QUERYSTUDIO_SHOW_VALIDATION", default = true)]
    pub show_validation: bool,
    /// Print the structural summary from `check`.
    #[config(env = "QUERYSTUDIO_SHOW_EXPLAIN", default = true)]
    pub show_explain: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self::builder().env().load()?)
    }
}

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// First year offered by the year selector.
    #[serde(default = "default_min_year")]
    pub min_year: i32,
    /// Last year offered by the year selector.
    #[serde(default = "default_max_year")]
    pub max_year: i32,
    /// Date to start from, in `YYYY-MM-DD` form. Empty means no date.
    #[serde(default)]
    pub value: Option<String>,
}

// The span the stock widget ships with.
fn default_min_year() -> i32 {
    1960
}

fn default_max_year() -> i32 {
    2000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_year: default_min_year(),
            max_year: default_max_year(),
            value: None,
        }
    }
}

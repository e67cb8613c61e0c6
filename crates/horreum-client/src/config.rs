/// Bar colours assigned to datasets by column index.
pub const DEFAULT_PALETTE: [&str; 10] = [
    "#0066cc", "#4cb140", "#009596", "#5752d1", "#f4c145", "#ec7a08", "#7d1007", "#b8bbbe",
    "#8bc1f7", "#23511e",
];

/// Name of the view shown next to the label comparison.
pub const DEFAULT_VIEW_NAME: &str = "Default";

/// What a comparison does when some of its per-dataset fetches fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Any failure fails the comparison; no table is produced.
    #[default]
    AllOrNothing,
    /// Failed datasets become missing columns and are reported next to the
    /// table. The comparison still fails when every fetch fails.
    Partial,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonConfig {
    pub palette: Vec<String>,
    pub failure_policy: FailurePolicy,
    pub default_view: String,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE.iter().map(|c| (*c).to_owned()).collect(),
            failure_policy: FailurePolicy::default(),
            default_view: DEFAULT_VIEW_NAME.to_owned(),
        }
    }
}

impl ComparisonConfig {
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn with_palette<I, S>(mut self, palette: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.palette = palette.into_iter().map(Into::into).collect();
        self
    }

    /// Colour of column `index`. An empty palette falls back to
    /// [`DEFAULT_PALETTE`].
    pub fn color(&self, index: usize) -> &str {
        if self.palette.is_empty() {
            DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()]
        } else {
            &self.palette[index % self.palette.len()]
        }
    }
}

//! Filter pipeline configuration types

use crate::image_pipeline::filters::{FilterOp, Schedule};

/// Configuration for a decode, filter, encode run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Filters applied in order
    pub filters: Vec<FilterOp>,
    /// Work partitioning used by every filter
    pub schedule: Schedule,
    /// Size of a dedicated worker pool; `None` uses rayon's global pool
    pub num_threads: Option<usize>,
    /// Whether to validate image dimensions after decoding
    pub validate_dimensions: bool,
    /// Largest accepted width or height when validating
    pub max_dimension: Option<u32>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            filters: Vec::new(),
            schedule: Schedule::default(),
            num_threads: None,
            validate_dimensions: true,
            max_dimension: None,
        }
    }
}

impl PipelineConfig {
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }
}

/// Builder for PipelineConfig
#[derive(Default)]
pub struct PipelineConfigBuilder {
    filters: Vec<FilterOp>,
    schedule: Option<Schedule>,
    num_threads: Option<Option<usize>>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<u32>>,
}

impl PipelineConfigBuilder {
    pub fn filter(mut self, op: FilterOp) -> Self {
        self.filters.push(op);
        self
    }

    pub fn filters(mut self, ops: impl IntoIterator<Item = FilterOp>) -> Self {
        self.filters.extend(ops);
        self
    }

    pub fn negate(self) -> Self {
        self.filter(FilterOp::Negate)
    }

    pub fn mirror(self) -> Self {
        self.filter(FilterOp::Mirror)
    }

    pub fn blur(self, radius: u32, sigma: f64) -> Self {
        self.filter(FilterOp::Blur { radius, sigma })
    }

    pub fn schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = Some(schedule);
        self
    }

    pub fn num_threads(mut self, num_threads: Option<usize>) -> Self {
        self.num_threads = Some(num_threads);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<u32>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn build(self) -> PipelineConfig {
        let default = PipelineConfig::default();
        PipelineConfig {
            filters: self.filters,
            schedule: self.schedule.unwrap_or(default.schedule),
            num_threads: self.num_threads.unwrap_or(default.num_threads),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
        }
    }
}

use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{info, instrument, warn};
use std::io::Write;
use std::path::Path;

use crate::image_pipeline::{
    common::{PipelineError, PipelineTimings, Result, Timer},
    conversions::types::PipelineConfig,
    filters::{Filter, FilterOp, Schedule},
    ppm::{BinaryPpmReader, BinaryPpmWriter, PpmReader, PpmWriter, RgbImage},
};

pub struct FilterPipeline<R: PpmReader, W: PpmWriter> {
    reader: R,
    writer: W,
    config: PipelineConfig,
    filters: Vec<Filter>,
    pool: Option<ThreadPool>,
}

impl FilterPipeline<BinaryPpmReader, BinaryPpmWriter> {
    pub fn new(config: PipelineConfig) -> Result<Self> {
        Self::with_custom(BinaryPpmReader, BinaryPpmWriter, config)
    }
}

impl<R: PpmReader, W: PpmWriter> FilterPipeline<R, W> {
    /// Validates every configured filter and sets up the worker pool, so
    /// parameter errors surface before any input is read.
    pub fn with_custom(reader: R, writer: W, config: PipelineConfig) -> Result<Self> {
        let filters = config
            .filters
            .iter()
            .map(FilterOp::prepare)
            .collect::<Result<Vec<_>>>()?;
        let pool = config.num_threads.map(build_pool).transpose()?;

        Ok(Self {
            reader,
            writer,
            config,
            filters,
            pool,
        })
    }

    fn validate_dimensions(&self, width: u32, height: u32) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(PipelineError::InvalidDimensions(width, height));
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                warn!(
                    "Image dimensions {}x{} exceed maximum {}",
                    width, height, max
                );
                return Err(PipelineError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    /// Runs the configured filters over `image` in order.
    pub fn apply(&self, image: RgbImage) -> (RgbImage, PipelineTimings) {
        let filters = &self.filters;
        let schedule = self.config.schedule;
        let parent = tracing::Span::current();
        let run = move || run_filters(filters, schedule, image, &parent);

        match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        }
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<PipelineTimings> {
        let mut timings = PipelineTimings::new();
        info!("Starting PPM filter run with {} filter(s)", self.filters.len());

        let image = {
            let _span = tracing::info_span!("decode_ppm").entered();
            let timer = Timer::start("decode");
            let image = self.reader.read_ppm(input_data)?;
            timings.record(timer.stop());
            image
        };

        {
            let _span = tracing::info_span!("validate_dimensions",
                width = image.width(),
                height = image.height()
            ).entered();
            self.validate_dimensions(image.width(), image.height())?;
        }

        let (image, filter_timings) = self.apply(image);
        timings.extend(filter_timings);

        {
            let _span = tracing::info_span!("encode_ppm").entered();
            let timer = Timer::start("encode");
            self.writer.write_ppm(&image, output)?;
            timings.record(timer.stop());
        }

        info!(
            width = image.width(),
            height = image.height(),
            "Filter run complete in {:.3}ms",
            timings.total_duration().as_secs_f64() * 1000.0
        );
        Ok(timings)
    }

    /// Reads `input_path`, filters it and writes the result to
    /// `output_path`. The output file is only created once the whole image
    /// has been processed.
    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<PipelineTimings> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Filtering file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                PipelineError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let mut encoded = Vec::new();
        let timings = self.convert(&input_data, &mut encoded)?;

        {
            let _span = tracing::info_span!("write_output_file").entered();
            std::fs::write(output_path, &encoded).map_err(|e| {
                PipelineError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?;
        }

        Ok(timings)
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Replaces the configuration, re-validating filters and rebuilding the
    /// worker pool. The current configuration is kept on error.
    pub fn set_config(&mut self, config: PipelineConfig) -> Result<()> {
        let filters = config
            .filters
            .iter()
            .map(FilterOp::prepare)
            .collect::<Result<Vec<_>>>()?;
        let pool = config.num_threads.map(build_pool).transpose()?;

        self.filters = filters;
        self.pool = pool;
        self.config = config;
        Ok(())
    }
}

fn build_pool(num_threads: usize) -> Result<ThreadPool> {
    if num_threads == 0 {
        return Err(PipelineError::InvalidParameter {
            name: "num_threads",
            reason: "must be positive".to_string(),
        });
    }

    ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .thread_name(|i| format!("ppm-filter-{}", i))
        .build()
        .map_err(|e| PipelineError::ThreadPool(e.to_string()))
}

fn run_filters(
    filters: &[Filter],
    schedule: Schedule,
    mut image: RgbImage,
    parent: &tracing::Span,
) -> (RgbImage, PipelineTimings) {
    let mut timings = PipelineTimings::new();
    for filter in filters {
        let _span = tracing::info_span!(parent: parent, "filter", name = filter.name()).entered();
        let timer = Timer::start(filter.name());
        image = filter.apply(image, schedule);
        timings.record(timer.stop());
    }
    (image, timings)
}

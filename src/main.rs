use anyhow::{Context, bail};
use ppm_filter_rs::image_pipeline::{FilterOp, FilterPipeline, PipelineConfig};
use ppm_filter_rs::logger;

use tracing::info;

const USAGE: &str = "usage: ppm_filter_rs <input.ppm> <output.ppm> <filter>...\n\
                     filters: negate | mirror | blur:<radius>:<sigma>";

fn main() -> anyhow::Result<()> {
    logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [input, output, filters @ ..] = args.as_slice() else {
        bail!(USAGE);
    };
    if filters.is_empty() {
        bail!(USAGE);
    }

    let ops = filters
        .iter()
        .map(|f| f.parse::<FilterOp>())
        .collect::<Result<Vec<_>, _>>()
        .context("invalid filter argument")?;

    info!("Starting ppm_filter...");
    info!(
        "Filters: {}",
        ops.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
    );

    let config = PipelineConfig::builder().filters(ops).build();
    let pipeline = FilterPipeline::new(config)?;

    let timings = pipeline
        .convert_file(input, output)
        .with_context(|| format!("failed to filter {}", input))?;
    timings.log_summary();

    info!("Wrote {}", output);
    Ok(())
}

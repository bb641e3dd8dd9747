use anyhow::{bail, Context};
use clap::Parser;
use generator::profile::{build_channel_record, GeneratorConfig};
use log::info;
use std::fs;
use std::path::PathBuf;
use workflow::config::WorkflowConfig;
use workflow::input::load_record;
use workflow::runner::Runner;

mod generator;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Recompute baseline and region integrals for a channel record")]
struct Args {
    /// Channel record to process (JSON, or YAML with a .yaml/.yml extension)
    #[arg(long)]
    record: Option<PathBuf>,
    /// Process a synthetic channel instead of a stored record
    #[arg(long, default_value_t = false)]
    demo: bool,
    /// Generator settings for --demo, as YAML
    #[arg(long)]
    generator: Option<PathBuf>,
    /// Load a workflow config from YAML
    #[arg(long)]
    workflow: Option<PathBuf>,
    /// Conversion constant dividing every integrated area
    #[arg(long)]
    conversion_constant: Option<f64>,
    /// Drop anchors that match no sample instead of failing
    #[arg(long, default_value_t = false)]
    drop_invalid_anchors: bool,
    #[arg(long, default_value_t = false)]
    pretty: bool,
    /// Write the processed output here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
    /// Also save the processed record (e.g. the generated demo channel)
    #[arg(long)]
    save_record: Option<PathBuf>,
}

fn load_generator(path: Option<&PathBuf>) -> anyhow::Result<GeneratorConfig> {
    let Some(path) = path else {
        return Ok(GeneratorConfig::default());
    };
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading generator config {}", path.display()))?;
    serde_yaml::from_str(&contents)
        .with_context(|| format!("parsing generator config {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let overrides =
        WorkflowConfig::from_args(args.conversion_constant, args.drop_invalid_anchors, args.pretty);
    let workflow_config = match &args.workflow {
        Some(path) => WorkflowConfig::load(path)?.with_overrides(&overrides),
        None => overrides,
    };

    let record = match (&args.record, args.demo) {
        (Some(path), false) => load_record(path)?,
        (None, true) => build_channel_record(&load_generator(args.generator.as_ref())?)?,
        (Some(_), true) => bail!("--record and --demo are mutually exclusive"),
        (None, false) => bail!("nothing to process: pass --record <path> or --demo"),
    };

    let runner = Runner::new(workflow_config.clone());
    let result = runner.execute(&record)?;
    let metrics = runner.metrics();
    info!(
        "processed {} channel(s), {} region(s), {} anchor(s) dropped",
        metrics.processed, metrics.regions, metrics.dropped_anchors
    );

    let rendered = if workflow_config.pretty {
        serde_json::to_string_pretty(&result.output)?
    } else {
        serde_json::to_string(&result.output)?
    };
    match &args.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("writing output {}", path.display()))?,
        None => println!("{}", rendered),
    }

    if let Some(path) = &args.save_record {
        let mut saved = record.clone();
        if let Some(k) = workflow_config.conversion_constant {
            saved.k = k;
        }
        saved
            .anchors
            .retain(|anchor| !result.dropped_anchors.contains(anchor));
        let contents = serde_json::to_string_pretty(&saved)?;
        fs::write(path, contents)
            .with_context(|| format!("writing channel record {}", path.display()))?;
    }

    Ok(())
}

use anyhow::{ensure, Context};
use chancore::{build_baseline, build_corrected, AnchorSet, ChannelRecord, RegionPair, TimeSeries};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Gaussian peak added on top of the drifting baseline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeakSpec {
    pub center: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub label: Option<String>,
}

/// Configuration for generating a synthetic channel trace.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub name: String,
    pub samples: usize,
    pub duration: f64,
    pub offset: f64,
    pub drift: f64,
    pub noise: f64,
    pub seed: u64,
    pub k: f64,
    pub peaks: Vec<PeakSpec>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            name: "synthetic".into(),
            samples: 600,
            duration: 60.0,
            offset: 0.2,
            drift: 0.005,
            noise: 0.002,
            seed: 0,
            k: 1.0,
            peaks: vec![
                PeakSpec {
                    center: 18.0,
                    width: 1.5,
                    height: 1.0,
                    label: None,
                },
                PeakSpec {
                    center: 40.0,
                    width: 2.5,
                    height: 0.6,
                    label: None,
                },
            ],
        }
    }
}

fn build_series(config: &GeneratorConfig) -> anyhow::Result<TimeSeries> {
    ensure!(config.samples >= 2, "generator needs at least two samples");
    ensure!(config.duration > 0.0, "generator duration must be positive");

    let step = config.duration / (config.samples - 1) as f64;
    let mut rng = StdRng::seed_from_u64(config.seed);
    let samples = (0..config.samples).map(|index| {
        let time = index as f64 * step;
        let peaks: f64 = config
            .peaks
            .iter()
            .map(|peak| {
                let z = (time - peak.center) / peak.width;
                peak.height * (-0.5 * z * z).exp()
            })
            .sum();
        let jitter = if config.noise > 0.0 {
            rng.gen_range(-config.noise..config.noise)
        } else {
            0.0
        };
        (time, config.offset + config.drift * time + peaks + jitter)
    });

    TimeSeries::from_pairs(samples.collect::<Vec<_>>()).context("building synthetic series")
}

/// Builds a record with end-point anchors and one region per peak (±3σ).
pub fn build_channel_record(config: &GeneratorConfig) -> anyhow::Result<ChannelRecord> {
    let series = build_series(config)?;
    let last = series.len() - 1;
    let endpoints = [series.point(0), series.point(last)];
    let anchors = AnchorSet::from_points(&series, endpoints.into_iter().flatten())
        .context("anchoring synthetic series")?;
    let corrected = build_corrected(&series, &build_baseline(&series, &anchors)?);

    let nearest = |time: f64| {
        let index = corrected.times().partition_point(|&t| t < time);
        index.min(last)
    };
    let pairs = config
        .peaks
        .iter()
        .enumerate()
        .filter_map(|(index, peak)| {
            let start = nearest(peak.center - 3.0 * peak.width);
            let end = nearest(peak.center + 3.0 * peak.width);
            if start == end {
                return None;
            }
            let label = peak
                .label
                .clone()
                .unwrap_or_else(|| format!("Peak {}", index + 1));
            Some(RegionPair::complete(
                corrected.as_series().point(start)?,
                corrected.as_series().point(end)?,
                label,
            ))
        })
        .collect();

    Ok(ChannelRecord {
        name: config.name.clone(),
        times: series.times().to_vec(),
        values: series.values().to_vec(),
        anchors: anchors.points().to_vec(),
        pairs,
        k: config.k,
    })
}

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use ans_analysis::{
    CohortFilter, ComparisonMetric, Network, build_map_layer, join_gates, mean_by_landmark,
    network_means, network_means_by_landmark, summarize_metrics,
};
use ans_ingest::{list_csv_files, load_gate_registry, parse_raw_sample_file, read_combined, unify_tables, write_combined};
use ans_model::{AIRPORT_CENTER, MetricKind, SampleTable, selectable_metrics};

use crate::cli::{AggregateArgs, CohortArgs, CombineArgs, CompareArgs, MapArgs, MetricsArgs};
use crate::summary::{
    print_group_means, print_metric_catalog, print_network_comparison,
    print_network_landmark_means, print_stat_summaries,
};

/// Outcome of the offline combine step, for the final report line.
pub struct CombineSummary {
    pub file_count: usize,
    pub row_count: usize,
    pub column_count: usize,
    pub out: PathBuf,
}

/// Batch step: parse every raw sample file, unify, write the combined CSV.
///
/// Malformed raw files are fatal here; downstream analysis assumes one
/// consistent schema.
pub fn run_combine(args: &CombineArgs) -> Result<CombineSummary> {
    let span = info_span!("combine", samples_dir = %args.samples_dir.display());
    let _guard = span.enter();
    let start = Instant::now();

    let files = list_csv_files(&args.samples_dir)
        .with_context(|| format!("list sample files in {}", args.samples_dir.display()))?;
    let mut tables = Vec::with_capacity(files.len());
    for path in &files {
        let table = parse_raw_sample_file(path)
            .with_context(|| format!("parse raw sample file {}", path.display()))?;
        tables.push(table);
    }
    let combined = unify_tables(&tables).context("unify sample tables")?;
    write_combined(&combined, &args.out)
        .with_context(|| format!("write combined samples to {}", args.out.display()))?;

    info!(
        file_count = files.len(),
        row_count = combined.row_count(),
        duration_ms = start.elapsed().as_millis(),
        "combine complete"
    );
    Ok(CombineSummary {
        file_count: files.len(),
        row_count: combined.row_count(),
        column_count: combined.columns.len(),
        out: args.out.clone(),
    })
}

pub fn run_metrics(args: &MetricsArgs) -> Result<()> {
    let combined = read_combined(&args.combined)
        .with_context(|| format!("read combined samples {}", args.combined.display()))?;
    let metrics = selectable_metrics(&combined);
    if metrics.is_empty() {
        warn!("no metric columns found in {}", args.combined.display());
        return Ok(());
    }
    let catalog: Vec<(String, Option<&str>)> = metrics
        .into_iter()
        .map(|column| {
            let description = MetricKind::describe_column(&column);
            (column, description)
        })
        .collect();
    print_metric_catalog(&catalog);
    Ok(())
}

pub fn run_summary(args: &CohortArgs) -> Result<()> {
    let (cohort, _) = load_cohort(args)?;
    if cohort.row_count() == 0 {
        warn!("no data available for the selected filters");
        return Ok(());
    }
    let summaries = summarize_metrics(&cohort);
    print_stat_summaries(cohort.row_count(), &summaries);
    Ok(())
}

pub fn run_aggregate(args: &AggregateArgs) -> Result<()> {
    let (cohort, _) = load_cohort(&args.cohort)?;
    if cohort.row_count() == 0 {
        warn!("no data available for the selected filters");
    }
    let means = mean_by_landmark(&cohort, &args.metric)?;
    print_group_means(&args.metric, &means);
    Ok(())
}

/// Side-by-side Wi-Fi vs. cellular means for the paired Ookla metrics,
/// optionally broken down per landmark.
///
/// Pairs whose columns are not both present in the cohort are skipped, so
/// a Wi-Fi-only survey still produces the comparison it can support.
pub fn run_compare(args: &CompareArgs) -> Result<()> {
    let (cohort, _) = load_cohort(&args.cohort)?;
    if cohort.row_count() == 0 {
        warn!("no data available for the selected filters");
        return Ok(());
    }

    let paired: Vec<ComparisonMetric> = [
        ComparisonMetric::Download,
        ComparisonMetric::Upload,
        ComparisonMetric::Latency,
    ]
    .into_iter()
    .filter(|metric| {
        [Network::WiFi, Network::Cellular]
            .iter()
            .all(|network| cohort.has_column(metric.column(*network)))
    })
    .collect();
    if paired.is_empty() {
        warn!("no paired Wi-Fi/cellular metric columns in the cohort");
        return Ok(());
    }

    let mut rows = Vec::new();
    for metric in &paired {
        let means = network_means(&cohort, *metric)?;
        rows.push((
            metric.title(),
            means[&Network::WiFi],
            means[&Network::Cellular],
        ));
    }
    print_network_comparison(&rows);

    if args.by_landmark {
        for metric in &paired {
            let split = network_means_by_landmark(&cohort, *metric)?;
            print_network_landmark_means(
                metric.title(),
                &split[&Network::WiFi],
                &split[&Network::Cellular],
            );
        }
    }
    Ok(())
}

pub fn run_map(args: &MapArgs) -> Result<()> {
    let span = info_span!("map", metric = %args.metric);
    let _guard = span.enter();

    let (cohort, _) = load_cohort(&args.cohort)?;
    let gates = load_gate_registry(&args.gates)
        .with_context(|| format!("load gate registry {}", args.gates.display()))?;
    info!(gates = gates.len(), "gate registry loaded");

    let means = mean_by_landmark(&cohort, &args.metric)?;
    let joined = join_gates(&means, &gates);
    let layer = build_map_layer(&joined);
    if layer.excluded > 0 {
        warn!(
            excluded = layer.excluded,
            "sampled landmark(s) missing lat/lng or metric data are excluded from the map"
        );
    }

    let document = serde_json::json!({
        "metric": args.metric,
        "center": { "lat": AIRPORT_CENTER.0, "lng": AIRPORT_CENTER.1 },
        "layer": &layer,
    });
    let rendered = serde_json::to_string_pretty(&document)?;
    match &args.out {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("write map layer to {}", path.display()))?;
            info!(path = %path.display(), points = layer.points.len(), "map layer written");
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

/// Read the combined table and apply the cohort filter.
///
/// Omitted filter flags admit every value present in the table, matching
/// the dashboard's select-all default. Explicit flags are literal
/// inclusion sets.
fn load_cohort(args: &CohortArgs) -> Result<(SampleTable, CohortFilter)> {
    let combined = read_combined(&args.combined)
        .with_context(|| format!("read combined samples {}", args.combined.display()))?;

    let defaults = CohortFilter::all(&combined);
    let filter = CohortFilter {
        datasets: if args.datasets.is_empty() {
            defaults.datasets
        } else {
            args.datasets.iter().cloned().collect::<BTreeSet<_>>()
        },
        device_types: if args.devices.is_empty() {
            defaults.device_types
        } else {
            args.devices.iter().cloned().collect::<BTreeSet<_>>()
        },
    };
    let cohort = filter.apply(&combined);
    info!(
        rows = cohort.row_count(),
        of = combined.row_count(),
        "cohort selected"
    );
    Ok((cohort, filter))
}

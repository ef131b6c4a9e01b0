use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};

use roiscore_core::models::Region;
use roiscore_core::utils::scored_output_path;
use roiscore_io::{GffWrite, check_region_file, read_gff, read_score_intervals};
use roiscore_scoring::{Discretization, RoiScorer, ScoringConfig};

const SCORED_TAG: &str = "scored";

///
/// Merge the config file (if any) with the command line. Flags switch settings on,
/// a discretization mode on the command line replaces the one from the config.
///
fn resolve_config(matches: &ArgMatches) -> Result<ScoringConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => ScoringConfig::try_from(Path::new(path))
            .with_context(|| format!("Failed to load scoring config {}", path))?,
        None => ScoringConfig::default(),
    };

    config.ignore_negative |= matches.get_flag("ignore-negative");
    config.ignore_zero |= matches.get_flag("ignore-zero");
    config.count_bins |= matches.get_flag("count-bins");
    config.discretize_ignored |= matches.get_flag("discretize-ignored");

    if let Some(bounds) = matches.get_many::<f64>("bounds") {
        config.discretization = Some(Discretization::Bounds(bounds.copied().collect()));
    } else if let Some(classes) = matches.get_one::<u32>("quantile") {
        config.discretization = Some(Discretization::Quantiles(*classes));
    } else if let Some(classes) = matches.get_one::<u32>("interval") {
        config.discretization = Some(Discretization::Intervals(*classes));
    }

    Ok(config)
}

fn output_path(regions: &Path, tag: &str, output_dir: Option<&Path>, gzip: bool) -> Result<PathBuf> {
    let mut path = scored_output_path(regions, tag)?;

    if let Some(dir) = output_dir {
        let filename = path
            .file_name()
            .map(|name| name.to_os_string())
            .with_context(|| format!("No file name in {}", path.display()))?;
        path = dir.join(filename);
    }

    if gzip {
        let mut name = path.into_os_string();
        name.push(".gz");
        path = PathBuf::from(name);
    }

    Ok(path)
}

fn write_regions(regions: &[Region], path: &Path, gzip: bool) -> Result<()> {
    let written = match gzip {
        true => regions.write_gff_gz(path),
        false => regions.write_gff(path),
    };
    written.with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Wrote {} regions to {}", regions.len(), path.display());

    Ok(())
}

///
/// Discretize a copy of the scored regions and write it next to the scored output.
///
fn run_discretization(
    scored: &[Region],
    discretization: &Discretization,
    config: &ScoringConfig,
    regions_path: &Path,
    output_dir: Option<&Path>,
    gzip: bool,
) -> Result<()> {
    let scorer = RoiScorer::new(config.discretization_options());
    let mut regions = scored.to_vec();

    match discretization {
        Discretization::Bounds(bounds) => {
            scorer.discretize_by_bounds(&mut regions, bounds)?;
        }
        Discretization::Quantiles(classes) => {
            let bounds = scorer.discretize_by_quantiles(&mut regions, *classes)?;
            info!("Quantile class bounds: {:?}", bounds);
        }
        Discretization::Intervals(classes) => {
            let bounds = scorer.discretize_by_intervals(&mut regions, *classes)?;
            info!("Interval class bounds: {:?}", bounds);
        }
    }

    let path = output_path(regions_path, discretization.output_tag(), output_dir, gzip)?;
    write_regions(&regions, &path, gzip)
}

///
/// Run `stage` with a spinner drawn, clearing it whether the stage succeeds or not.
///
fn with_spinner<T>(
    spinner: ProgressBar,
    stage: impl FnOnce(&ProgressBar) -> Result<T>,
) -> Result<T> {
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed}] {msg}")?
            .tick_strings(&["-", "\\", "|", "/"]),
    );

    let result = stage(&spinner);
    spinner.finish_and_clear();

    result
}

///
/// Read both inputs and score the regions, reporting each stage on the spinner.
///
fn read_and_score(
    regions_path: &Path,
    scores_path: &Path,
    config: &ScoringConfig,
    spinner: &ProgressBar,
) -> Result<Vec<Region>> {
    spinner.set_message(format!("Reading regions from {}", regions_path.display()));
    let mut regions = read_gff(regions_path)
        .with_context(|| format!("Failed to read regions from {}", regions_path.display()))?;

    spinner.set_message(format!("Reading scores from {}", scores_path.display()));
    let mut intervals = read_score_intervals(scores_path)
        .with_context(|| format!("Failed to read scores from {}", scores_path.display()))?;

    spinner.set_message(format!(
        "Scoring {} regions against {} intervals",
        regions.len(),
        intervals.len()
    ));
    let scorer = RoiScorer::new(config.scoring_options());
    let report = scorer.score_regions(&mut regions, &mut intervals)?;

    if !report.warnings.is_empty() {
        warn!(
            "{} regions had more overlapping bases than their length. Check the score track for overlapping intervals.",
            report.warnings.len()
        );
    }

    Ok(regions)
}

pub fn run_score(matches: &ArgMatches) -> Result<()> {
    let regions_path = matches
        .get_one::<String>("regions")
        .map(Path::new)
        .context("A path to a regions file is required.")?;

    let scores_path = matches
        .get_one::<String>("scores")
        .map(Path::new)
        .context("A path to a score file is required.")?;

    let output_dir = matches.get_one::<String>("output-dir").map(Path::new);
    let gzip = matches.get_flag("gzip");

    let config = resolve_config(matches)?;

    check_region_file(regions_path)?;

    let regions = with_spinner(ProgressBar::new_spinner(), |spinner| {
        read_and_score(regions_path, scores_path, &config, spinner)
    })?;

    let scored_path = output_path(regions_path, SCORED_TAG, output_dir, gzip)?;
    write_regions(&regions, &scored_path, gzip)?;

    if let Some(discretization) = &config.discretization {
        run_discretization(
            &regions,
            discretization,
            &config,
            regions_path,
            output_dir,
            gzip,
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::score::cli::create_score_cli;

    fn parse(args: &[&str]) -> ArgMatches {
        let mut argv = vec!["score", "--regions", "r.gff", "--scores", "s.bedgraph"];
        argv.extend_from_slice(args);
        create_score_cli().get_matches_from(argv)
    }

    #[test]
    fn test_flags_without_config() {
        let config = resolve_config(&parse(&["-n", "-c"])).unwrap();

        assert!(config.ignore_negative);
        assert!(config.count_bins);
        assert!(!config.ignore_zero);
        assert_eq!(config.discretization, None);
    }

    #[test]
    fn test_discretization_from_command_line() {
        let config = resolve_config(&parse(&["--bounds", "-1", "0.5", "2"])).unwrap();
        assert_eq!(
            config.discretization,
            Some(Discretization::Bounds(vec![-1.0, 0.5, 2.0]))
        );

        let config = resolve_config(&parse(&["--quantile", "4"])).unwrap();
        assert_eq!(config.discretization, Some(Discretization::Quantiles(4)));
    }

    #[test]
    fn test_discretization_modes_conflict() {
        let result = create_score_cli().try_get_matches_from([
            "score",
            "--regions",
            "r.gff",
            "--scores",
            "s.bedgraph",
            "--quantile",
            "4",
            "--interval",
            "3",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_spinner_cleared_on_error() {
        let spinner = ProgressBar::hidden();

        let result: Result<()> = with_spinner(spinner.clone(), |spinner| {
            spinner.set_message("Reading regions");
            anyhow::bail!("unreadable")
        });

        assert!(result.is_err());
        assert!(spinner.is_finished());
    }

    #[test]
    fn test_spinner_cleared_on_success() {
        let spinner = ProgressBar::hidden();

        let result = with_spinner(spinner.clone(), |_| Ok(3)).unwrap();

        assert_eq!(result, 3);
        assert!(spinner.is_finished());
    }

    #[test]
    fn test_output_path() {
        let regions = Path::new("data/promoters.gff.gz");

        let path = output_path(regions, "scored", None, false).unwrap();
        assert_eq!(path, PathBuf::from("data/promoters_scored.gff"));

        let path = output_path(regions, "scored_discrete_by_bounds", Some(Path::new("out")), true)
            .unwrap();
        assert_eq!(
            path,
            PathBuf::from("out/promoters_scored_discrete_by_bounds.gff.gz")
        );
    }
}

use std::path::{Path, PathBuf};

use clap::Args;
use dispatch_engine::{
    json::types::JsonAssignmentOutcome, solver::greedy_scheduler::assign_orders,
};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing::{info, warn};

use crate::{
    assign::{RunArgs, load_problem},
    file_utils::read_batch_files,
    output,
};

#[derive(Args)]
pub struct AssignFolderArgs {
    /// Folder searched recursively for .json batch files
    #[arg(short, long)]
    dataset: PathBuf,

    #[command(flatten)]
    run: RunArgs,
}

pub async fn run(args: AssignFolderArgs) -> Result<(), anyhow::Error> {
    info!("Assigning batches in {:?}", args.dataset);
    let paths = if args.dataset.is_file() {
        vec![args.dataset.clone()]
    } else {
        read_batch_files(&args.dataset)?
    };

    let client = args.run.traffic_client()?;
    let provider = args.run.provider();
    let params = args.run.scheduler_params();

    let bar = ProgressBar::new(paths.len() as u64);
    bar.set_style(ProgressStyle::default_bar().template("[{bar:40}] {pos}/{len} {msg}")?);

    // Inputs are gathered first; every run then owns its own roster and tracker
    let mut problems = Vec::with_capacity(paths.len());
    for path in paths {
        bar.set_message(format!("loading {}", path.display()));
        match load_problem(&path, &client, provider).await {
            Ok(problem) => problems.push((path, problem)),
            Err(err) => warn!("Skipping {:?}: {}", path, err),
        }
        bar.inc(1);
    }
    bar.finish_and_clear();

    let outcomes = problems
        .par_iter()
        .map(|(path, problem)| {
            let outcome = assign_orders(problem, params.clone());
            (path, JsonAssignmentOutcome::from_outcome(outcome, problem))
        })
        .collect::<Vec<_>>();

    for (path, outcome) in outcomes {
        let out = batch_output_dir(&args.run.out, &args.dataset, path);
        output::write_outcome(&out, &outcome)?;

        info!(
            "{:?}: assigned = {}, unassigned = {}",
            path,
            outcome.assignments.len(),
            outcome.unassigned.len()
        );
    }

    Ok(())
}

/// Output folder of one batch: its path below the dataset folder without
/// the extension, so equally named batches in different folders stay apart.
fn batch_output_dir(out: &Path, dataset: &Path, batch: &Path) -> PathBuf {
    let relative = batch
        .strip_prefix(dataset)
        .ok()
        .filter(|relative| !relative.as_os_str().is_empty())
        .map(|relative| relative.with_extension(""))
        .or_else(|| batch.file_stem().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("batch"));

    out.join(relative)
}

#[cfg(test)]
mod tests {
    use std::{env, fs};

    use dispatch_engine::problem::minutes::Minutes;
    use dispatch_traffic::{
        traffic_provider::TrafficProvider,
        weather::{DEFAULT_TIMEZONE, OPEN_METEO_FORECAST_API_URL},
    };
    use serde_json::Value;

    use super::*;
    use crate::output::ASSIGNED_ORDERS_FILE;

    #[test]
    fn test_batch_output_dir_keeps_subfolders() {
        let out = Path::new("out");
        let dataset = Path::new("data");

        assert_eq!(
            batch_output_dir(out, dataset, Path::new("data/week_1/monday.json")),
            PathBuf::from("out/week_1/monday")
        );
        assert_eq!(
            batch_output_dir(out, dataset, Path::new("data/week_2/monday.json")),
            PathBuf::from("out/week_2/monday")
        );
        assert_eq!(
            batch_output_dir(out, Path::new("data/friday.json"), Path::new("data/friday.json")),
            PathBuf::from("out/friday")
        );
    }

    #[tokio::test]
    async fn test_same_named_batches_keep_their_results() {
        let out = tempfile::tempdir().unwrap();
        let dataset = env::current_dir()
            .unwrap()
            .join("tests/fixtures/same_name_batches");

        let args = AssignFolderArgs {
            dataset,
            run: RunArgs {
                out: out.path().to_path_buf(),
                offline: true,
                model: None,
                weather_url: String::from(OPEN_METEO_FORECAST_API_URL),
                timezone: String::from(DEFAULT_TIMEZONE),
                work_time_ceiling: Minutes::new(720),
            },
        };
        assert_eq!(args.run.provider(), TrafficProvider::Neutral);

        run(args).await.unwrap();

        for (week, order) in [("week_1", "W1"), ("week_2", "W2")] {
            let file = out.path().join(week).join("monday").join(ASSIGNED_ORDERS_FILE);
            let assigned: Value = serde_json::from_str(&fs::read_to_string(file).unwrap()).unwrap();

            assert_eq!(assigned[0]["order"], Value::from(order), "{week}");
        }
    }
}

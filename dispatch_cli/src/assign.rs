use std::{fs::File, io::BufReader, path::Path, path::PathBuf};

use anyhow::bail;
use clap::Args;
use dispatch_engine::{
    json::types::{JsonAssignmentBatch, JsonAssignmentOutcome},
    problem::{assignment_problem::AssignmentProblem, minutes::Minutes},
    solver::{greedy_scheduler::assign_orders, scheduler_params::SchedulerParams},
};
use dispatch_traffic::{
    NEUTRAL_TRAFFIC_VOLUME,
    traffic_client::TrafficClient,
    traffic_model::{ConstantTrafficModel, LinearTrafficModel, TrafficModel},
    traffic_provider::TrafficProvider,
    weather::{
        DEFAULT_TIMEZONE, OPEN_METEO_FORECAST_API_URL, WeatherClient, WeatherClientParams,
    },
};
use tracing::info;

use crate::{output, parsers};

#[derive(Args)]
pub struct AssignArgs {
    /// Batch file with orders, drivers and deviations
    #[arg(short, long)]
    input: PathBuf,

    #[command(flatten)]
    run: RunArgs,
}

#[derive(Args)]
pub struct RunArgs {
    /// Output folder for the assigned and unassigned order files
    #[arg(short, long, default_value = ".")]
    pub out: PathBuf,

    /// Use the neutral traffic volume for every zone instead of asking the weather service
    #[arg(long)]
    pub offline: bool,

    /// Linear traffic model file
    #[arg(long, env = "DISPATCH_TRAFFIC_MODEL")]
    pub model: Option<PathBuf>,

    #[arg(long, env = "DISPATCH_WEATHER_URL", default_value = OPEN_METEO_FORECAST_API_URL)]
    pub weather_url: String,

    /// Timezone used for the weather request and the model's hour/day features
    #[arg(long, env = "DISPATCH_TIMEZONE", default_value = DEFAULT_TIMEZONE)]
    pub timezone: String,

    /// Maximum work time per driver (e.g. "12h", "PT10H", "600m")
    #[arg(long, value_parser = parsers::parse_minutes, default_value = "12h")]
    pub work_time_ceiling: Minutes,
}

impl RunArgs {
    pub fn provider(&self) -> TrafficProvider {
        if self.offline {
            TrafficProvider::Neutral
        } else {
            TrafficProvider::WeatherModel
        }
    }

    pub fn scheduler_params(&self) -> SchedulerParams {
        SchedulerParams {
            work_time_ceiling: self.work_time_ceiling,
        }
    }

    pub fn traffic_client(&self) -> Result<TrafficClient<Box<dyn TrafficModel>>, anyhow::Error> {
        let model: Box<dyn TrafficModel> = match (&self.model, self.offline) {
            (Some(path), false) => {
                info!("Loading traffic model {:?}", path);
                Box::new(LinearTrafficModel::from_file(path)?)
            }
            (None, false) => {
                bail!("A traffic model is required, pass --model or set --offline")
            }
            (_, true) => Box::new(ConstantTrafficModel::new(NEUTRAL_TRAFFIC_VOLUME)),
        };

        let weather_client = WeatherClient::new(WeatherClientParams {
            base_url: self.weather_url.clone(),
            timezone: self.timezone.clone(),
            ..WeatherClientParams::default()
        });

        Ok(TrafficClient::new(weather_client, model))
    }
}

pub async fn load_problem(
    input: &Path,
    client: &TrafficClient<Box<dyn TrafficModel>>,
    provider: TrafficProvider,
) -> Result<AssignmentProblem, anyhow::Error> {
    let f = File::open(input)?;
    let batch: JsonAssignmentBatch = serde_json::from_reader(BufReader::new(f))?;
    batch.build_problem(client, provider).await
}

pub async fn run(args: AssignArgs) -> Result<(), anyhow::Error> {
    let client = args.run.traffic_client()?;
    let params = args.run.scheduler_params();

    let problem = load_problem(&args.input, &client, args.run.provider()).await?;
    let outcome = assign_orders(&problem, params.clone());
    let outcome = JsonAssignmentOutcome::from_outcome(outcome, &problem);

    output::write_outcome(&args.run.out, &outcome)?;

    info!(
        "Finished: assigned = {}, unassigned = {}, results in {:?}",
        outcome.assignments.len(),
        outcome.unassigned.len(),
        args.run.out
    );
    println!("{}", output::summary_table(&outcome, &params));

    Ok(())
}

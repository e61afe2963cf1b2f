use clap::Parser;
use itertools::Itertools;
use rand::Rng;
use rand::rngs::ThreadRng;
use stepflow::prelude::*;
use tracing_subscriber::EnvFilter;

/// A CLI tool to generate random onboarding flows for the stepflow engine
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_flow.json")]
    output: String,

    /// The number of stages after the root stage
    #[arg(long, default_value_t = 6)]
    stages: usize,

    /// The maximum number of substeps per phase
    #[arg(long, default_value_t = 3)]
    max_substeps: usize,

    /// Probability that a stage is split into two parallel phases
    #[arg(long, default_value_t = 0.3)]
    fan_out_chance: f64,
}

/// A phase to generate, with its substep count and per-substep estimate.
struct PhasePlan {
    id: String,
    substeps: usize,
    minutes_per_substep: u32,
    status: Status,
}

/// Stages of phases; every phase of a stage blocks every phase of the next one.
struct Blueprint {
    stages: Vec<Vec<PhasePlan>>,
}

impl IntoFlow for Blueprint {
    fn into_flow(self) -> Result<Flow, FlowConversionError> {
        let root_id = match self.stages.first().map(Vec::as_slice) {
            Some([root]) => root.id.clone(),
            _ => {
                return Err(FlowConversionError::ValidationError(
                    "the first stage must hold exactly one root phase".to_string(),
                ));
            }
        };
        let last_id = self
            .stages
            .last()
            .and_then(|stage| stage.last())
            .map(|phase| phase.id.clone())
            .unwrap_or_else(|| root_id.clone());

        let mut steps = Vec::new();
        for (index, stage) in self.stages.iter().enumerate() {
            let previous = index
                .checked_sub(1)
                .map(|i| self.stages[i].iter().map(|p| p.id.clone()).collect_vec())
                .unwrap_or_default();
            let next = self
                .stages
                .get(index + 1)
                .map(|s| s.iter().map(|p| p.id.clone()).collect_vec())
                .unwrap_or_default();

            for (position, phase) in stage.iter().enumerate() {
                let step_type = if index == 0 { StepType::Root } else { StepType::Main };
                let child_ids = (1..=phase.substeps)
                    .map(|n| format!("{}-substep-{}", phase.id, n))
                    .collect_vec();

                for (n, child_id) in child_ids.iter().enumerate() {
                    steps.push(Step {
                        parent_step_id: Some(phase.id.clone()),
                        name: Some(format!("Task {} of {}", n + 1, phase.id)),
                        position: Some(n as i64 + 1),
                        time_needed: Some(Eta::new(0, phase.minutes_per_substep, 0).to_string()),
                        ..Step::new(child_id.clone(), StepType::Sub, phase.status)
                    });
                }

                steps.push(Step {
                    blocked_by_step_ids: (!previous.is_empty()).then(|| previous.clone()),
                    blocking_step_ids: (!next.is_empty()).then(|| next.clone()),
                    child_step_ids: (!child_ids.is_empty()).then_some(child_ids),
                    name: Some(format!("Phase {}", phase.id)),
                    position: Some(position as i64 + 1),
                    time_needed: Some(
                        Eta::new(0, phase.minutes_per_substep * phase.substeps as u32, 0)
                            .to_string(),
                    ),
                    ..Step::new(phase.id.clone(), step_type, phase.status)
                });
            }
        }

        Ok(Flow {
            id: "generated-flow".to_string(),
            merchant_id: "generated-merchant".to_string(),
            flow_id: "generated-flow".to_string(),
            scenario: "generated".to_string(),
            root_step_id: root_id,
            last_step_id: last_id,
            product_info_id: "generated-product-info".to_string(),
            steps,
        })
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut rng = rand::rng();

    if !(0.0..=1.0).contains(&cli.fan_out_chance) {
        eprintln!(
            "Error: --fan-out-chance ({}) must be between 0 and 1",
            cli.fan_out_chance
        );
        std::process::exit(1);
    }

    println!(
        "Generating a flow with {} stages (up to {} substeps per phase)...",
        cli.stages + 1,
        cli.max_substeps
    );

    let blueprint = generate_blueprint(&mut rng, &cli);
    let flow = blueprint.into_flow()?;
    flow.save(&cli.output)?;

    let lookup = StepLookup::from_flow(&flow);
    let traversal = flow_bfs(&lookup, &flow);
    println!(
        "Successfully generated {} steps ({} reachable phases, ETA {}) and saved them to '{}'",
        flow.steps.len(),
        traversal.step_count,
        traversal.eta,
        cli.output
    );

    Ok(())
}

/// Lays out the stages and decides how far the flow has progressed.
fn generate_blueprint(rng: &mut ThreadRng, cli: &Cli) -> Blueprint {
    let done_stages = rng.random_range(0..=cli.stages);
    let mut stages = vec![vec![generate_phase(rng, "root".to_string(), cli, Status::Done)]];

    for index in 1..=cli.stages {
        let status = if index < done_stages {
            Status::Done
        } else if index == done_stages.max(1) {
            Status::Pending
        } else {
            Status::Upcoming
        };
        let width = if rng.random_bool(cli.fan_out_chance) { 2 } else { 1 };
        let stage = (0..width)
            .map(|lane| {
                let id = if width == 1 {
                    format!("stage-{}", index)
                } else {
                    format!("stage-{}-{}", index, (b'a' + lane as u8) as char)
                };
                generate_phase(rng, id, cli, status)
            })
            .collect();
        stages.push(stage);
    }

    tracing::debug!(done_stages, "Generated blueprint");
    Blueprint { stages }
}

fn generate_phase(rng: &mut ThreadRng, id: String, cli: &Cli, status: Status) -> PhasePlan {
    PhasePlan {
        id,
        substeps: rng.random_range(0..=cli.max_substeps),
        minutes_per_substep: rng.random_range(5..=30),
        status,
    }
}

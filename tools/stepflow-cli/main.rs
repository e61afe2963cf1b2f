use clap::Parser;
use itertools::Itertools;
use std::fs;
use std::time::Instant;
use stepflow::prelude::*;
use tracing_subscriber::EnvFilter;

/// Inspect the layout, progress and active step of an onboarding flow
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the flow JSON file; the built-in default flow is used when omitted
    flow_path: Option<String>,

    /// Path to a layout configuration JSON file
    #[arg(short, long)]
    config: Option<String>,

    /// Print the traversal as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Fail on repeated step ids instead of keeping the last definition
    #[arg(long)]
    strict: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let total_start = Instant::now();

    // --- 1. Loading ---
    let flow = match &cli.flow_path {
        Some(path) => Flow::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load flow: {}", e))),
        None => {
            tracing::info!("No flow file provided, using the built-in default flow");
            default_flow()
        }
    };
    let config = match &cli.config {
        Some(path) => {
            let json = fs::read_to_string(path).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to read config file '{}': {}", path, e))
            });
            LayoutConfig::from_json(&json)
                .unwrap_or_else(|e| exit_with_error(&format!("Invalid layout config: {}", e)))
        }
        None => LayoutConfig::default(),
    };

    // --- 2. Traversal ---
    let traverse_start = Instant::now();
    let engine = LayoutEngine::builder(&flow)
        .with_config(config)
        .strict_ids(cli.strict)
        .build()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to index flow: {}", e)));
    let traversal = engine.traverse();
    let active = first_active_substep(traversal.flattened(), engine.lookup());
    let traverse_duration = traverse_start.elapsed();

    for dangling in engine.lookup().dangling_references(&flow) {
        tracing::warn!(
            from = %dangling.from,
            to = %dangling.to,
            edge = %dangling.kind,
            "Dangling step reference"
        );
    }

    if cli.json {
        match serde_json::to_string_pretty(&traversal) {
            Ok(json) => println!("{}", json),
            Err(e) => exit_with_error(&format!("Failed to serialize traversal: {}", e)),
        }
        return;
    }

    // --- 3. Report ---
    println!("Flow '{}' ({})", flow.flow_id, flow.scenario);
    println!("{}", LayoutFormatter::format_traversal(&traversal));

    let (parents_done, parents_total) = parent_steps_summary(&traversal.levels);
    println!("--- Progress ---");
    println!("Overall:       {}%", flow_progress(&flow));
    println!("Parent steps:  {}/{}", parents_done, parents_total);
    println!(
        "Connected:     {}",
        traversal.connected_step_ids.iter().join(", ")
    );
    match &active {
        Some(step) => {
            let parent = parent_of(&flow.steps, &step.id);
            println!(
                "Active step:   {} ({}){}",
                step.title(),
                step.id,
                parent.map_or(String::new(), |p| format!(" in '{}'", p.title()))
            );
            if let Some(parent) = parent {
                println!("Phase done:    {}%", substep_progress(&flow, parent));
            }
        }
        None => println!("Active step:   none"),
    }

    println!("\nTraversal:     {:?}", traverse_duration);
    println!("Total:         {:?}", total_start.elapsed());
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}

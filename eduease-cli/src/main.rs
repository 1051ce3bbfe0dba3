use anyhow::Result;
use clap::{Parser, Subcommand};
use eduease_core::{signals_from_tasks, workload, PrioritizationResult, StressResult, Task};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod auth;
mod config;
mod model;
mod offline;
mod state;
mod taskfile;

#[derive(Parser, Debug)]
#[command(name = "eduease", version, about = "EduEase AI study-assist CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the working task list (sample set unless --tasks is given)
    Tasks {
        /// Optional TOML task file ([[tasks]] entries)
        #[arg(long)]
        tasks: Option<PathBuf>,
    },

    /// Ask the model for a priority order over the task list
    Prioritize {
        /// Optional TOML task file ([[tasks]] entries)
        #[arg(long)]
        tasks: Option<PathBuf>,

        /// Skip the model and use the deterministic local ordering
        #[arg(long)]
        offline: bool,
    },

    /// Score workload stress and suggest deadline adjustments
    Stress {
        /// Optional TOML task file ([[tasks]] entries)
        #[arg(long)]
        tasks: Option<PathBuf>,

        /// Batch load 0-100 (default: estimated from the task list)
        #[arg(long)]
        batch_load: Option<f64>,

        /// Skip the model and use the deterministic local estimate
        #[arg(long)]
        offline: bool,
    },

    /// Manage ~/.eduease/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// Store API keys under ~/.eduease/auth.json
    Auth {
        #[command(subcommand)]
        command: AuthCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config if none exists
    Init,
    /// Print the effective config
    Show,
}

#[derive(Subcommand, Debug)]
enum AuthCommand {
    /// Paste an Anthropic token (sk-ant-...)
    PasteAnthropicToken,
    /// Paste an OpenAI API key (sk-...)
    PasteOpenaiApiKey,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Tasks { tasks } => {
            let list = taskfile::load_tasks(tasks.as_deref())?;
            print_tasks(&list);
        }

        Command::Prioritize { tasks, offline } => {
            let list = taskfile::load_tasks(tasks.as_deref())?;
            let result = if offline {
                offline::prioritize_offline(&list)
            } else {
                let cfg = config::load_config()?;
                let model = model::resolve_model(&cfg)?;
                eduease_ai::prioritize(model.as_ref(), list.clone()).await
            };
            print_prioritization(&list, &result);
        }

        Command::Stress {
            tasks,
            batch_load,
            offline,
        } => {
            let list = taskfile::load_tasks(tasks.as_deref())?;
            let load = batch_load.unwrap_or_else(|| {
                if list.is_empty() {
                    workload::DEFAULT_BATCH_LOAD
                } else {
                    workload::estimate_batch_load(&list)
                }
            });

            let result = if offline {
                offline::stress_offline(&list, load)
            } else {
                let cfg = config::load_config()?;
                let model = model::resolve_model(&cfg)?;
                eduease_ai::reduce_stress(model.as_ref(), signals_from_tasks(&list), load).await
            };
            print_stress(&result);
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                let cfg = config::load_config()?;
                println!("{}", toml::to_string_pretty(&cfg)?);
            }
        },

        Command::Auth { command } => match command {
            AuthCommand::PasteAnthropicToken => auth::anthropic_paste_token()?,
            AuthCommand::PasteOpenaiApiKey => auth::openai_paste_api_key()?,
        },
    }

    Ok(())
}

fn print_tasks(tasks: &[Task]) {
    println!("{} task(s)\n", tasks.len());
    for t in tasks {
        println!(
            "{} | due {} | {} | weightage {}% | {}",
            t.name, t.deadline, t.subject, t.weightage, t.difficulty
        );
    }
}

fn print_prioritization(tasks: &[Task], result: &PrioritizationResult) {
    if result.prioritized_tasks.is_empty() {
        println!("{}", result.reasoning);
        return;
    }

    println!("Priority list:\n");
    for (i, name) in result.prioritized_tasks.iter().enumerate() {
        match tasks.iter().find(|t| &t.name == name) {
            Some(t) => println!(
                "{:>2}. {} (due {}, {})",
                i + 1,
                name,
                t.deadline,
                t.difficulty
            ),
            None => println!("{:>2}. {}", i + 1, name),
        }
    }
    println!("\nReasoning:\n{}", result.reasoning);
}

fn print_stress(result: &StressResult) {
    println!(
        "Stress score: {:.0}/100 ({})",
        result.stress_score,
        stress_band(result.stress_score)
    );

    if result.suggestions.is_empty() {
        println!("Workload looks balanced. No deadline changes recommended.");
        return;
    }

    println!("\nSuggestions:");
    for s in &result.suggestions {
        println!("- {} -> {}", s.task_name, s.new_deadline);
        println!("  Reason: {}", s.reason);
    }
}

// Bands mirror the dashboard's progress-bar thresholds.
fn stress_band(score: f64) -> &'static str {
    if score > 75.0 {
        "High"
    } else if score > 50.0 {
        "Moderate"
    } else {
        "Low"
    }
}

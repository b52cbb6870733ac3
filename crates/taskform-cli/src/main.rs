use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use taskform_core::app::{App, AppBuilder};
use taskform_core::domain::{FormAction, SubmittedData, TaskInfo};
use taskform_core::impls::FlashMessages;

mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "taskform", version, about = "Render, validate and save scheduler task fields")]
struct Cli {
    /// TOML file with available sites/controllers and translated messages.
    #[arg(long, global = true, env = "TASKFORM_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the registered task types.
    Types,

    /// Render the additional fields of a task type.
    Fields {
        #[arg(long)]
        task_type: String,

        /// Stored task record (JSON). Implies edit mode.
        #[arg(long)]
        task: Option<PathBuf>,

        /// In-progress form state (JSON object).
        #[arg(long)]
        info: Option<PathBuf>,
    },

    /// Validate submitted form data (JSON object).
    Validate {
        #[arg(long)]
        task_type: String,

        #[arg(long)]
        data: PathBuf,
    },

    /// Validate submitted form data and, on success, save it onto a task record.
    Save {
        #[arg(long)]
        task_type: String,

        #[arg(long)]
        data: PathBuf,

        /// Task record to update; a new record is created when omitted.
        #[arg(long)]
        task: Option<PathBuf>,

        /// Write the updated record here instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let app = AppBuilder::with_aimeos_providers()?.build()?;

    match cli.command {
        Commands::Types => {
            for task_type in app.registry.registered_types() {
                println!("{task_type}");
            }
        }
        Commands::Fields { task_type, task, info } => {
            fields(&app, &config, &task_type, task.as_deref(), info.as_deref())?
        }
        Commands::Validate { task_type, data } => {
            let data: SubmittedData = read_json(&data)?;
            let mut flash = FlashMessages::new();
            let ctx = config.form_context(FormAction::Add);
            let valid = app
                .validate(&task_type, &data, &ctx, &config.messages, &mut flash)?
                .is_some();
            print_json(&json!({ "valid": valid, "messages": flash.messages() }))?;
            if !valid {
                warn!(task_type = %task_type, "submission rejected");
                std::process::exit(1);
            }
        }
        Commands::Save { task_type, data, task, output } => {
            let data: SubmittedData = read_json(&data)?;
            let mut record: Value = match &task {
                Some(path) => read_json(path)?,
                None => Value::Null,
            };
            let action = if task.is_some() { FormAction::Edit } else { FormAction::Add };

            let mut flash = FlashMessages::new();
            let ctx = config.form_context(action);
            let Some(submission) =
                app.validate(&task_type, &data, &ctx, &config.messages, &mut flash)?
            else {
                warn!(task_type = %task_type, "submission rejected, nothing saved");
                for message in flash.messages() {
                    eprintln!("{}", message.text);
                }
                bail!("submission for {task_type} rejected, nothing saved");
            };

            app.save(&submission, &mut record)?;
            let rendered = serde_json::to_string_pretty(&record)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, rendered)
                        .with_context(|| format!("write {}", path.display()))?;
                    info!(task_type = %task_type, path = %path.display(), "task record written");
                }
                None => println!("{rendered}"),
            }
        }
    }

    Ok(())
}

fn fields(
    app: &App,
    config: &Config,
    task_type: &str,
    task: Option<&Path>,
    info: Option<&Path>,
) -> anyhow::Result<()> {
    let record = task.map(read_json::<Value>).transpose()?;
    let mut task_info: TaskInfo = match info {
        Some(path) => read_json(path)?,
        None => TaskInfo::new(),
    };
    let action = if record.is_some() { FormAction::Edit } else { FormAction::Add };

    let mut flash = FlashMessages::new();
    let fields = app.get_fields(
        task_type,
        &mut task_info,
        record.as_ref(),
        &config.form_context(action),
        &mut flash,
    )?;

    print_json(&json!({
        "fields": fields,
        "task_info": task_info,
        "messages": flash.messages(),
    }))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))
}

fn print_json(value: &Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use jobboard_client::{
    init_page, ApiClient, ClientConfig, FileInput, JobFilter, JobFormView, PageBindings,
    SelectedFile, TextField, UploadView,
};

#[derive(Parser)]
#[command(name = "jobboard-client")]
#[command(about = "Drive the job board backend from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Post a new job offer
    PostJob {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        location: String,
    },
    /// Send resume metadata for a local file
    UploadResume { file: PathBuf },
    /// List published jobs
    ListJobs {
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        keywords: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::PostJob {
            title,
            description,
            location,
        } => {
            let bindings = PageBindings {
                job_form: Some(JobFormView {
                    title: Some(TextField::with_value(&title)),
                    description: Some(TextField::with_value(&description)),
                    location: Some(TextField::with_value(&location)),
                }),
                upload: None,
            };

            let controller = init_page(bindings)?;
            controller.submit_job().await;

            if let Some(region) = controller.job_message() {
                println!("{}", region.text());
            }
        }

        Command::UploadResume { file } => {
            anyhow::ensure!(file.exists(), "file not found: {}", file.display());

            let name = file
                .file_name()
                .and_then(|n| n.to_str())
                .with_context(|| format!("invalid file name: {}", file.display()))?
                .to_string();
            let mime = mime_for(&name);

            let input = FileInput::new();
            let bindings = PageBindings {
                job_form: None,
                upload: Some(UploadView {
                    input: input.clone(),
                }),
            };

            let controller = init_page(bindings)?;
            controller.open_file_picker();
            input.select(vec![SelectedFile { name, mime }]);
            controller.resume_selected().await;

            if let Some(region) = controller.upload_message() {
                println!("{}", region.text());
            }
        }

        Command::ListJobs { location, keywords } => {
            let config = ClientConfig::load()?;
            let api = ApiClient::new(config.api_base_url)?;
            let jobs = api
                .list_jobs(&JobFilter { location, keywords })
                .await
                .context("failed to list jobs")?;

            println!("{}", serde_json::to_string_pretty(&jobs.0)?);
        }
    }

    Ok(())
}

/// MIME type for a resume file, from its extension. Unknown extensions
/// return an empty string; the payload then falls back to
/// `application/octet-stream`.
fn mime_for(file_name: &str) -> String {
    let lower = file_name.to_lowercase();
    if lower.ends_with(".pdf") {
        "application/pdf".to_string()
    } else if lower.ends_with(".docx") {
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document".to_string()
    } else if lower.ends_with(".doc") {
        "application/msword".to_string()
    } else if lower.ends_with(".txt") {
        "text/plain".to_string()
    } else {
        String::new()
    }
}

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use summarizer_client::config::{self, Config};
use summarizer_client::controller::FormController;
use summarizer_client::view;

#[derive(Parser)]
#[command(name = "summarizer-client", about = "Terminal client for a text summarization service")]
struct Cli {
    /// Base URL of the summarization service
    #[arg(long)]
    url: Option<String>,

    /// Number of summary sentences to request
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    sentences: Option<u32>,

    /// Submit the contents of this file once and exit
    file: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // Load configuration, then apply command-line overrides
    let mut config = Config::load()?;
    if let Some(url) = cli.url {
        config.summarizer_url = url.trim_end_matches('/').to_string();
    }
    if let Some(n) = cli.sentences {
        config.num_sentences = n;
    }

    let mut controller = FormController::new(&config);

    if let Some(path) = cli.file {
        let text = tokio::fs::read_to_string(&path).await?;
        controller.set_text(&text);
        view::paint(&view::DisplayState::loading());
        let outcome = controller.submit().await;
        view::paint(&view::render(&outcome));
        return Ok(());
    }

    run_form(&mut controller).await;
    Ok(())
}

/// The interactive form. Text lines accumulate in the input buffer; an
/// empty line (or `:submit`) submits it. Every failure repaints and
/// returns to the prompt.
async fn run_form(controller: &mut FormController) {
    println!("Summarizer client: paste text, then a blank line to submit.");
    println!("Commands: :submit  :example  :clear  :sentences N  :quit");
    view::paint(&view::DisplayState::hidden());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Ok(Some(line)) = lines.next_line().await {
        let trimmed = line.trim();
        match trimmed {
            "" | ":submit" => {
                if trimmed.is_empty() && controller.text().trim().is_empty() {
                    continue;
                }
                view::paint(&view::DisplayState::loading());
                let outcome = controller.submit().await;
                view::paint(&view::render(&outcome));
            }
            ":example" => {
                controller.insert_example();
                println!("Example text inserted ({} chars).", controller.text().len());
            }
            ":clear" => {
                controller.clear();
                view::paint(&view::DisplayState::hidden());
                println!("Input cleared.");
            }
            ":quit" | ":q" => break,
            _ if trimmed.starts_with(":sentences") => {
                let raw = trimmed.trim_start_matches(":sentences").trim();
                match config::parse_num_sentences(raw) {
                    Ok(n) => {
                        controller.set_num_sentences(n);
                        println!("Summary length set to {} sentences.", n);
                    }
                    Err(e) => println!("{}", e),
                }
            }
            _ if trimmed.starts_with(':') => {
                println!("Unknown command: {}", trimmed);
            }
            _ => controller.push_line(&line),
        }
    }
}

use anyhow::{Context, Result};
use parking_lot::Mutex;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use starscan::{
    ClientConfig, FormInput, FormSource, HttpBackend, LocalClock, Place, RequestOrchestrator,
    Struggle, TerminalPresenter, Trigger,
};

// Holds the answers from the latest round of prompts
#[derive(Default)]
struct PromptedForm(Mutex<FormInput>);

impl FormSource for PromptedForm {
    fn read(&self) -> FormInput {
        self.0.lock().clone()
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr, the reading itself to stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let config = ClientConfig::from_env().context("Invalid client configuration")?;
    let backend = HttpBackend::new(&config)?;
    info!(url = backend.url(), timeout = ?config.timeout, "report backend configured");

    let form = Arc::new(PromptedForm::default());
    let orchestrator = RequestOrchestrator::new(
        form.clone(),
        Arc::new(LocalClock),
        Arc::new(backend),
        Arc::new(TerminalPresenter),
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        *form.0.lock() = read_form(&mut input)?;
        orchestrator.submit(Trigger::Keyboard).await;

        let again = prompt(&mut input, "\nAsk again? [y/N]")?;
        if !again.eq_ignore_ascii_case("y") {
            break;
        }
    }

    Ok(())
}

fn prompt(input: &mut impl BufRead, label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read from stdin")?;
    Ok(line.trim().to_string())
}

fn read_form(input: &mut impl BufRead) -> Result<FormInput> {
    let name = prompt(input, "Name")?;
    let date = prompt(input, "Birth date")?;
    let time = prompt(input, "Birth time")?;

    let city = prompt(input, "Birth city (optional)")?;
    let city = if city.is_empty() { None } else { Some(Place::new(city)) };

    let options = Struggle::ALL.map(|s| s.as_str()).join("/");
    let struggle = prompt(input, &format!("Struggle [{}] (optional)", options))?;
    let struggle = if struggle.is_empty() {
        None
    } else {
        match struggle.parse::<Struggle>() {
            Ok(choice) => Some(choice),
            Err(e) => {
                warn!("{}, using the default", e);
                None
            }
        }
    };

    Ok(FormInput {
        name,
        date,
        time,
        city,
        struggle,
    })
}

//! Interest Cost CLI
//!
//! Terminal front end for the calculator. The rate table is fetched in the
//! background while the prompt keeps accepting amounts.

use anyhow::{bail, Result};
use clap::Parser;
use interest_cost::calculator::{
    format_loan_amount, format_monthly_cost, format_rate_heading, format_rate_option,
    monthly_rate_fraction,
};
use interest_cost::{DisplayMode, RateRepository, RateSet, RateSourceConfig, Session};
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser, Debug)]
#[command(name = "interest-cost", version, about = "Mortgage interest cost calculator")]
struct Cli {
    /// Rate table URL (falls back to MORTGAGE_RATES_URL, then the built-in endpoint)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Compute once for this loan amount and exit
    #[arg(short, long)]
    amount: Option<String>,

    /// Binding period in months to use with --amount
    #[arg(short, long, requires = "amount")]
    binding: Option<u32>,

    /// Print the one-shot result as JSON
    #[arg(long, requires = "amount")]
    json: bool,
}

#[derive(Serialize)]
struct OneShotOutput<'a> {
    rates: Option<&'a RateSet>,
    error: Option<&'a str>,
    selected_rate_percent: Option<f64>,
    monthly_rate_fraction: Option<f64>,
    loan_amount: f64,
    monthly_cost: f64,
    show_result: bool,
}

const HELP: &str = "Ange lånebelopp, 'v N' för bindningstid N, 'jämför', 'tillbaka' eller 'q'.";

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = match cli.endpoint {
        Some(url) => RateSourceConfig::new(url),
        None => RateSourceConfig::from_env(),
    };

    let mut session = Session::new(RateRepository::new(config)?);

    match cli.amount {
        Some(amount) => run_once(&mut session, &amount, cli.binding, cli.json).await,
        None => run_interactive(&mut session).await,
    }
}

async fn run_once(
    session: &mut Session,
    amount: &str,
    binding: Option<u32>,
    json: bool,
) -> Result<()> {
    // Failure is held by the session and reported in the output
    let _ = session.start().await;

    if let Some(months) = binding {
        if session.select_binding_period(months).is_none() {
            bail!("no rate offered for a {} month binding period", months);
        }
    }

    session.set_amount_text(amount);

    if json {
        let state = session.state();
        let output = OneShotOutput {
            rates: session.rates(),
            error: session.error_message(),
            selected_rate_percent: state.selected_rate_percent(),
            monthly_rate_fraction: state.selected_rate_percent().map(monthly_rate_fraction),
            loan_amount: state.loan_amount(),
            monthly_cost: state.monthly_cost(),
            show_result: state.show_result(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        render(session);
    }

    Ok(())
}

async fn run_interactive(session: &mut Session) -> Result<()> {
    let fetcher = session.fetcher();
    let mut fetch = tokio::spawn(async move { fetcher.fetch().await });
    let mut fetch_done = false;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", HELP);
    render(session);

    loop {
        tokio::select! {
            joined = &mut fetch, if !fetch_done => {
                fetch_done = true;
                let _ = session.apply_load(joined?);
                render(session);
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if !handle_command(session, line.trim()) {
                    break;
                }
                render(session);
            }
        }
    }

    Ok(())
}

/// Apply one input line. Returns `false` when the user quits.
fn handle_command(session: &mut Session, input: &str) -> bool {
    match input {
        "q" | "quit" | "avsluta" => return false,
        "jämför" | "compare" => session.request_comparison(),
        "tillbaka" | "back" => session.return_to_calculator(),
        _ => match input.strip_prefix("v ") {
            Some(choice) => match choice.trim().parse::<usize>() {
                Ok(n) if n > 0 && session.select_entry(n - 1).is_some() => {}
                _ => println!("Ingen bindningstid med nummer {}", choice.trim()),
            },
            None => session.set_amount_text(input),
        },
    }
    true
}

fn render(session: &Session) {
    println!();

    if session.display_mode() == DisplayMode::Comparison {
        println!("Jämförelse");
        println!("Skriv 'tillbaka' för att återgå till räknaren.");
        return;
    }

    let state = session.state();
    println!("Din räntekostnad");
    println!("Önskat lånebelopp: {}", format_loan_amount(state.loan_amount()));

    match session.rates() {
        Some(rates) => {
            println!("Välj bindningstid:");
            for (i, entry) in rates.iter().enumerate() {
                let marker = if state.selected_rate_percent() == Some(entry.annual_rate_percent()) {
                    '*'
                } else {
                    ' '
                };
                println!(" {} {}. {}", marker, i + 1, format_rate_option(entry));
            }
        }
        None if session.failure().is_none() => println!("Hämtar bolåneräntor..."),
        None => {}
    }

    if let Some(message) = session.error_message() {
        println!("! {}", message);
    }

    if session.show_result() {
        let heading = state
            .selected_rate_percent()
            .map(format_rate_heading)
            .unwrap_or_default();
        println!("Din räntekostnad - {}", heading);
        println!("  {}", format_monthly_cost(state.monthly_cost()));
    }
}

mod report;

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Args, CommandFactory, Parser};
use log::{debug, info, warn};
use payday_core::{
    annual_equivalent, earnings_per_payday, project_paydays, project_paydays_for_year, ConfigRepository,
    FileConfigRepository, PayFrequency, PaydayConfig, SalaryBasis,
};

#[derive(Parser)]
#[command(name = "payday")]
#[command(about = "Project remaining paydays and earnings for the year", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Defaults file (JSON). Falls back to ~/.payday/config.json
    #[arg(long, global = true, env = "PAYDAY_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Show every remaining payday of the year, month by month
    Report {
        #[command(flatten)]
        pay: PayArgs,

        /// Known pay dates, MM/DD/YYYY or YYYY-MM-DD, comma separated
        #[arg(short, long, env = "PAYDAY_DATES", value_delimiter = ',')]
        dates: Vec<String>,

        /// Year to project instead of the current one
        #[arg(short, long)]
        year: Option<i32>,
    },
    /// Show the amount paid on each payday
    Earnings {
        #[command(flatten)]
        pay: PayArgs,
    },
}

#[derive(Args)]
struct PayArgs {
    /// 'hourly' or 'salary'
    #[arg(short, long, env = "PAYDAY_BASIS")]
    basis: Option<SalaryBasis>,

    /// Hourly rate or annual salary
    #[arg(short, long, env = "PAYDAY_RATE", allow_negative_numbers = true)]
    rate: Option<f64>,

    /// 'weekly', 'bi-weekly' or 'monthly' (or 1, 2, 3)
    #[arg(short, long, env = "PAYDAY_FREQUENCY")]
    frequency: Option<PayFrequency>,
}

struct PaySettings {
    basis: SalaryBasis,
    rate: f64,
    frequency: PayFrequency,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();
}

fn resolve_settings(pay: PayArgs, config_path: Option<PathBuf>) -> Result<PaySettings> {
    let repo = FileConfigRepository::new(config_path)?;
    let file_config = repo.load()?;

    let merged = file_config.merge(PaydayConfig {
        salary_basis: pay.basis,
        pay_rate: pay.rate,
        frequency: pay.frequency,
    });
    debug!("Resolved settings: {:?}", merged);

    let basis = merged
        .salary_basis
        .ok_or_else(|| anyhow!("Salary basis is required (--basis hourly|salary)"))?;
    let rate = merged
        .pay_rate
        .ok_or_else(|| anyhow!("Pay rate is required (--rate <RATE>)"))?;
    let frequency = merged.frequency.unwrap_or_else(|| {
        info!("No pay frequency given, using {}", PayFrequency::default());
        PayFrequency::default()
    });

    Ok(PaySettings { basis, rate, frequency })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Report { pay, dates, year }) => {
            let settings = resolve_settings(pay, cli.config)?;
            if dates.is_empty() {
                warn!("No pay dates given; the report will be empty");
            }

            let report = match year {
                Some(year) => {
                    project_paydays_for_year(year, &dates, settings.frequency, settings.rate, settings.basis)?
                }
                None => project_paydays(&dates, settings.frequency, settings.rate, settings.basis)?,
            };

            println!("{}", report::render_report(&report));
        }
        Some(Commands::Earnings { pay }) => {
            let settings = resolve_settings(pay, cli.config)?;
            let per_payday = earnings_per_payday(settings.frequency, settings.rate, settings.basis)?;
            let annual = annual_equivalent(settings.frequency, settings.rate, settings.basis)?;

            println!(
                "{}",
                report::render_earnings(settings.frequency, settings.basis, per_payday, annual)
            );
        }
        None => {
            Cli::command().print_help()?;
        }
    }
    Ok(())
}

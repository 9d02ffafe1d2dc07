use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use signup::cli::{
    handle_plans_command, handle_quote_command, handle_submit_command, BillingArgs, SelectionArgs,
    SubmitArgs,
};
use signup::config::{Settings, SignupPaths};
use signup::logging::init_logging;
use signup::submission::render_submission;

#[derive(Parser)]
#[command(
    name = "signup",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based multi-step subscription sign-up",
    long_about = "SignupCLI walks you through a subscription sign-up: personal info, \
                  plan, add-ons and a priced summary. Run it without arguments for the \
                  interactive wizard, or use the subcommands from scripts."
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive wizard
    #[command(alias = "ui")]
    Tui,

    /// List plans and add-ons
    Plans(BillingArgs),

    /// Price a selection
    Quote(SelectionArgs),

    /// Sign up in one shot and print the submission
    Submit(SubmitArgs),

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SignupPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let is_tui = matches!(cli.command, None | Some(Commands::Tui));
    let _logging = init_logging(&settings, &paths, is_tui, cli.debug)?;
    debug!(config_dir = %paths.base_dir().display(), "Settings loaded");

    match cli.command {
        None | Some(Commands::Tui) => {
            if let Some(submission) = signup::tui::run_tui(&settings)? {
                println!(
                    "{}",
                    render_submission(&submission, settings.submission_format)?.trim_end()
                );
            }
        }
        Some(Commands::Plans(billing)) => {
            handle_plans_command(&billing, &settings)?;
        }
        Some(Commands::Quote(selection)) => {
            handle_quote_command(&selection, &settings)?;
        }
        Some(Commands::Submit(args)) => {
            handle_submit_command(&args, &settings)?;
        }
        Some(Commands::Init) => {
            println!("Initializing SignupCLI at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Settings written to {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("SignupCLI Configuration");
            println!("=======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Logs directory:   {}", paths.logs_dir().display());
            println!(
                "Initialized:      {}",
                if paths.is_initialized() { "Yes" } else { "No" }
            );
            println!();
            println!("Settings:");
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Default billing:   {}", settings.default_billing);
            println!("  Submission format: {}", settings.submission_format);
            println!("  Log level:         {}", settings.log_level);
            println!("  Log to file:       {}", settings.log_to_file);
            println!("  Tick rate:         {}ms", settings.tick_rate_ms);
            println!("  Animations:        {}", settings.animate_transitions);
        }
    }

    Ok(())
}

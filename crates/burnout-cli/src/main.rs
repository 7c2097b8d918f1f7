use clap::{CommandFactory, Parser, Subcommand};

mod commands;
mod logger;

#[derive(Parser)]
#[command(name = "burnout-cli", version, about = "Burnout risk self-assessment CLI")]
struct Cli {
    /// Verbose logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate inputs and show the full results card
    Assess(commands::assess::AssessArgs),
    /// Print only the 0-10 risk score
    Score(commands::assess::ScoreArgs),
    /// Classify a score into a risk tier
    Classify(commands::assess::ClassifyArgs),
    /// Print recommendations for the inputs
    Recommend(commands::assess::ScoreArgs),
    /// Share results (falls back to clipboard, then the terminal)
    Share(commands::share::ShareArgs),
    /// Export the results card to a file
    Export(commands::share::ExportArgs),
    /// Manage the stored webhook URL
    Webhook {
        #[command(subcommand)]
        action: commands::share::WebhookAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let result = match cli.command {
        Commands::Assess(args) => commands::assess::run_assess(args),
        Commands::Score(args) => commands::assess::run_score(args),
        Commands::Classify(args) => commands::assess::run_classify(args),
        Commands::Recommend(args) => commands::assess::run_recommend(args),
        Commands::Share(args) => commands::share::run_share(args).await,
        Commands::Export(args) => commands::share::run_export(args).await,
        Commands::Webhook { action } => commands::share::run_webhook(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "burnout-cli",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

use clap::{CommandFactory, Parser, Subcommand};

mod commands;
mod common;

#[derive(Parser)]
#[command(name = "prospect", version, about = "Prospect Challenge CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log an outreach action (calls, meetings, recommendations, emails,
    /// comments, messages)
    Log {
        /// Action category to log
        category: String,
    },
    /// Publish a LinkedIn post for a rotation category
    Post {
        /// Post category (info, humor, testimonial, news)
        category: String,
    },
    /// Skip a LinkedIn post category for this cycle
    Skip {
        /// Post category (info, humor, testimonial, news)
        category: String,
    },
    /// Print challenge status as JSON
    Status,
    /// Sync control
    Sync {
        #[command(subcommand)]
        action: commands::sync::SyncAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Log { category } => commands::log::run(&category),
        Commands::Post { category } => commands::post::publish(&category),
        Commands::Skip { category } => commands::post::skip(&category),
        Commands::Status => commands::status::run(),
        Commands::Sync { action } => commands::sync::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "prospect",
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

use clap::Parser;
use zipvault::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // Reject nonexistent input paths before any flow runs, so a typo
    // never leaves a half-written session behind.
    if let Commands::Create { ref files } = cli.command {
        if let Err(e) = zipvault::cli::validate_input_files(files) {
            zipvault::cli::output::error(&e.to_string());
            std::process::exit(1);
        }
    }

    let result = match cli.command {
        Commands::Create { ref files } => zipvault::cli::commands::create::execute(&cli, files),
        Commands::Decrypt => zipvault::cli::commands::decrypt::execute(&cli),
        Commands::Completions { ref shell } => zipvault::cli::commands::completions::execute(shell),
    };

    if let Err(e) = result {
        zipvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}

use clap::{Parser, Subcommand};
use ui::OutputFormat;

#[derive(Debug, Parser)]
#[command(
    name = "vinck",
    about = "Vehicle Identification Number checksum validator",
    version,
    long_about = "Validates a 17-character VIN (ISO 3779): length, character set and the modulo-11 check digit.\n\nExamples:\n  vinck validate 1M8GDM9AXKP042788               # Validate a VIN\n  vinck validate --format json 1M8GDM9AXKP042788 # Print the result as JSON\n  vinck --debug validate 1M8GDM9AXKP042788       # Show checksum diagnostics\n  vinck check-digit 1M8GDM9A0KP042788            # Compute the check digit"
)]
struct Vinck {
    #[command(subcommand)]
    command: Commands,

    /// Run in verbose mode with detailed output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Run in debug mode with checksum diagnostics
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate a VIN (exit status 1 when any check fails)
    Validate {
        /// The VIN to validate
        vin: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Compute the check digit for a 17-character VIN
    CheckDigit {
        /// The VIN; its current check digit is ignored
        vin: String,
    },
}

fn main() {
    let cli = Vinck::parse();
    let verbose = cli.verbose;
    let debug = cli.debug;

    logging::set_log_level(logging::LogLevel::from_flags(verbose, debug));
    if debug {
        logging::debug("Debug mode enabled - showing checksum diagnostics");
    }

    match &cli.command {
        Commands::Validate { vin, format } => {
            match ui::validate_vin_cli(vin, *format, verbose || debug) {
                Ok(true) => {}
                Ok(false) => std::process::exit(1),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::CheckDigit { vin } => {
            if let Err(e) = ui::print_check_digit(vin) {
                logging::error(&format!("Cannot compute check digit: {}", e));
                std::process::exit(1);
            }
        }
    }
}

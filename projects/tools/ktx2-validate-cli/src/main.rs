mod commands;
mod error;
mod report;

use argh::FromArgs;

#[derive(FromArgs, Debug)]
/// Validation tool for KTX2 texture container files
struct TopLevel {
    /// print version information and exit
    #[argh(switch, short = 'v')]
    version: bool,

    #[argh(subcommand)]
    command: Option<Commands>,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Validate(commands::validate::ValidateCmd),
}

fn main() {
    let cli: TopLevel = argh::from_env();

    if cli.version {
        println!("ktx {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let exit_code = match cli.command {
        Some(Commands::Validate(cmd)) => {
            match commands::validate::handle_validate_command(cmd) {
                Ok(exit_code) => exit_code,
                Err(e) => {
                    eprintln!("ktx: {e}");
                    1
                }
            }
        }
        None => {
            eprintln!("ktx: missing subcommand; run with --help for usage");
            1
        }
    };

    std::process::exit(exit_code);
}

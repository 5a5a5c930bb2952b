use anyhow::Result;
use clap::{ArgAction, CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use wordcase::cli::output::{self, OutputFormat};
use wordcase::naming::CaseRule;
use wordcase::{cli, Config, Convention, Preset};

#[derive(Parser, Debug)]
#[command(name = "wordcase")]
#[command(version, about = "Split identifiers into words and convert between naming conventions", long_about = None)]
struct Cli {
    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text", global = true)]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Configuration file (overrides .wordcase.toml and the global config)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Print the words each name splits into
    Split {
        /// Names to split (read from stdin, one per line, when omitted)
        #[arg(value_name = "NAMES")]
        names: Vec<String>,
    },
    /// Reformat names under a naming convention
    Convert {
        /// Convention name or alias (e.g. snake_case, kebab, pascal, or a custom one)
        #[arg(short, long, conflicts_with_all = ["first", "rest"])]
        to: Option<String>,

        /// Rule for the first word of an ad hoc convention (lower, upper, title, keep)
        #[arg(long, requires = "rest")]
        first: Option<CaseRule>,

        /// Rule for the following words of an ad hoc convention
        #[arg(long, requires = "first")]
        rest: Option<CaseRule>,

        /// Separator placed between words of an ad hoc convention
        #[arg(short, long, default_value = "", requires = "first")]
        separator: String,

        /// Names to convert (read from stdin, one per line, when omitted)
        #[arg(value_name = "NAMES")]
        names: Vec<String>,
    },
    /// List the available naming conventions
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "wordcase", &mut io::stdout());
        return Ok(());
    }

    let Some(command) = cli.command else {
        anyhow::bail!("No command specified. Use --help for usage information.");
    };

    let colored = !cli.no_color && io::stdout().is_terminal();
    if !colored {
        colored::control::set_override(false);
    }

    let config = Config::load(cli.config.as_deref())?;
    let mut stdout = io::stdout().lock();

    match command {
        Commands::Split { names } => {
            let names = cli::collect_names(names, io::stdin().lock())?;
            let splits = cli::split_all(&names);
            output::write_splits(&mut stdout, &names, &splits, cli.format, colored)?;
        }
        Commands::Convert {
            to,
            first,
            rest,
            separator,
            names,
        } => {
            let convention = match (to, first, rest) {
                (_, Some(first), Some(rest)) => {
                    Convention::new("custom", first.rule(), rest.rule(), separator)
                }
                (Some(name), _, _) => config.resolve(&name)?,
                _ => config.default_convention()?,
            };
            log::info!("converting to {}", convention);

            let names = cli::collect_names(names, io::stdin().lock())?;
            let conversions = cli::convert_all(&names, &convention);
            output::write_conversions(&mut stdout, &conversions, &convention, cli.format, colored)?;
        }
        Commands::List => {
            let builtin: Vec<&Convention> = Preset::ALL.iter().map(|p| p.convention()).collect();
            output::write_conventions(
                &mut stdout,
                &builtin,
                &config.custom_conventions(),
                cli.format,
                colored,
            )?;
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();
}

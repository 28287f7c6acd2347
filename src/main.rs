use adsquery::cli::{self, CliError};
use adsquery::dump;
use clap::{Parser as ClapParser, Subcommand};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

#[derive(ClapParser)]
#[command(name = "adsq")]
#[command(about = "adsq - Inspect and validate boolean ad-targeting query trees")]
#[command(version)]
struct Cli {
    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the sample targeting tree, walk it, and run validation
    Demo {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'adsq docs' to list categories)
        category: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let result = match cli.command {
        Commands::Demo { json } => run_demo(json),
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => match cli::get_doc_category(&category) {
            Ok(content) => {
                print!("{}", content);
                Ok(())
            }
            Err(e) => Err(e),
        },
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .expect("logger");
}

fn run_demo(json: bool) -> Result<(), CliError> {
    let result = cli::execute_demo();

    if json {
        let payload = serde_json::json!({
            "tree": dump::to_json(&result.lines),
            "errors": result.errors.iter().map(|e| e.to_string()).collect::<Vec<_>>(),
        });
        let text = if atty::is(atty::Stream::Stdout) {
            serde_json::to_string_pretty(&payload)
        } else {
            serde_json::to_string(&payload)
        }
        .unwrap();
        println!("{}", text);
    } else {
        println!("{}", dump::render(&result.lines));
        println!("------------");
        for error in &result.errors {
            println!("{}", error);
        }
    }
    Ok(())
}

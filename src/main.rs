use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod config;
mod domain;
mod error;
mod parser;
mod ui;

#[derive(clap::Parser)]
#[command(
    name = "isis-version",
    about = "Report the version of an ISIS installation"
)]
struct Args {
    #[arg(help = "Parse a specific version file instead of resolving ISISROOT")]
    file: Option<PathBuf>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Override the ISIS installation root")]
    root: Option<PathBuf>,

    #[arg(long, help = "Print only the bare major.minor.patch triple")]
    short: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("isis-version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    let version_parser = parser::VersionParser::new();

    let (record, source) = if let Some(file) = &args.file {
        (version_parser.parse_file(file), file.display().to_string())
    } else {
        // Precedence for the installation root: --root flag, then config
        // file, then the process environment.
        let mut environment = config.environment(parser::process_environment());
        if let Some(root) = &args.root {
            environment.insert(
                parser::ISIS_ROOT_KEY.to_string(),
                root.display().to_string(),
            );
        }

        let record = if config.version_file == parser::VERSION_FILE_NAME {
            version_parser.current_version(&environment)
        } else {
            parser::installation_root(&environment).and_then(|root| {
                version_parser.parse_file(PathBuf::from(root).join(&config.version_file))
            })
        };

        let source = match parser::installation_root(&environment) {
            Ok(root) => format!("{} under {}", config.version_file, root),
            Err(_) => "the ISIS installation".to_string(),
        };

        (record, source)
    };

    match record {
        Ok(record) => {
            if args.short {
                println!("{}", record);
            } else {
                ui::display_version_report(&record, &source);
            }
            Ok(())
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}

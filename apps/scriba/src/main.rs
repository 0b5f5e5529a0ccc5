//! Scriba CLI binary entry point.
//! Delegates to the library for header/logs runs and prints results.

use clap::Parser;
use scriba::cli::{self, Cli, Commands};
use scriba::error::ScribaError;
use scriba::{config, header, logs, output, utils};
use std::path::Path;

fn init_tracing(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(scriba::utils::log_filter(verbose))
        .with_writer(std::io::stderr)
        .init();
}

fn fail(err: ScribaError) -> ! {
    eprintln!("{} {}", utils::error_prefix(), err);
    std::process::exit(2);
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Header {
            root,
            check,
            output,
        } => {
            let eff = config::resolve_effective(root.as_deref(), output.as_deref(), None)
                .unwrap_or_else(|e| fail(e));
            tracing::debug!(
                config_root = %eff.config_root.display(),
                config_found = eff.config_found,
                "resolved header settings"
            );
            let human = eff.output != "json";
            if human {
                println!("🚀 Iniciando processo de adição de headers...");
            }
            // --check disables writes for this run
            let report = header::run_header(&eff.root, &eff.header, !check);
            output::print_header(&report, &eff.output).unwrap_or_else(|e| fail(e));
            if human {
                println!("✨ Processo concluído!");
                if report.files.is_empty() {
                    eprintln!(
                        "{} No files matched extensions [{}].",
                        utils::note_prefix(),
                        eff.header.extensions.join(", ")
                    );
                }
            }
            if check && report.missing_headers() {
                std::process::exit(1);
            }
        }
        Commands::Logs {
            folder,
            output_file,
            output,
        } => {
            let eff = config::resolve_effective(None, output.as_deref(), output_file.as_deref())
                .unwrap_or_else(|e| fail(e));
            let folder = match folder {
                Some(f) => f,
                None => {
                    let stdin = std::io::stdin();
                    let mut out = std::io::stdout();
                    cli::prompt_folder(&mut stdin.lock(), &mut out).unwrap_or_else(|e| fail(e))
                }
            };
            let summary = logs::create_log_summary(Path::new(&folder), &eff.log_file)
                .unwrap_or_else(|e| fail(e));
            output::print_logs(&summary, &eff.output).unwrap_or_else(|e| fail(e));
        }
    }
}

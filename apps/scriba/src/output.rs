//! Output rendering for header and logs commands.
//!
//! Supports `human` (default) and `json` outputs. The JSON form includes
//! per-item fields and a top-level summary.

use crate::error::Result;
use crate::models::{HeaderReport, LogSummary, Outcome};
use crate::utils;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output != "json" && utils::colors_enabled()
}

fn rule() -> String {
    "-".repeat(60)
}

/// Print a header run in the requested format.
pub fn print_header(report: &HeaderReport, output: &str) -> Result<()> {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_header_json(report))?
        ),
        _ => {
            let color = use_colors(output);
            println!(
                "🔍 Processando arquivos em: {}",
                utils::absolute(&report.root).display()
            );
            println!("📝 Extensões: {}", report.extensions.join(", "));
            println!("{}", rule());
            for f in &report.files {
                let path = utils::rel_to_wd(&f.path);
                match (f.outcome, report.wrote) {
                    (Outcome::Added, true) => {
                        if color {
                            println!("{} {}", "✅ Header adicionado:".green(), path);
                        } else {
                            println!("✅ Header adicionado: {}", path);
                        }
                    }
                    (Outcome::Added, false) => {
                        if color {
                            println!("{} {}", "⚠️  Sem header:".yellow().bold(), path);
                        } else {
                            println!("⚠️  Sem header: {}", path);
                        }
                    }
                    (Outcome::Skipped, _) => {
                        if color {
                            println!("{} {}", "⏭️  Já possui header:".bright_black(), path);
                        } else {
                            println!("⏭️  Já possui header: {}", path);
                        }
                    }
                    (Outcome::Errored, _) => {
                        let reason = f.error.as_deref().unwrap_or("unknown error");
                        if color {
                            println!("{} {}: {}", "❌ Erro ao processar".red().bold(), path, reason);
                        } else {
                            println!("❌ Erro ao processar {}: {}", path, reason);
                        }
                    }
                }
            }
            println!("{}", rule());
            let c = report.counts();
            if color {
                println!("{}", "📊 Resumo:".bold());
            } else {
                println!("📊 Resumo:");
            }
            println!("   ✅ Arquivos processados: {}", c.added);
            println!("   ⏭️  Arquivos ignorados: {}", c.skipped);
            println!("   ❌ Arquivos com erro: {}", c.errored);
            println!("   📁 Total analisado: {}", c.total);
        }
    }
    Ok(())
}

/// Print the result of a logs run.
pub fn print_logs(summary: &LogSummary, output: &str) -> Result<()> {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_logs_json(summary))?
        ),
        _ => {
            let path = summary.path.to_string_lossy();
            let name = summary
                .path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            if use_colors(output) {
                println!("Ficheiro {} criado em: {}", name, path.bold());
            } else {
                println!("Ficheiro {} criado em: {}", name, path);
            }
            println!("Processados {} ficheiros markdown", summary.count);
        }
    }
    Ok(())
}

/// Compose header JSON object (pure) for testing/snapshot purposes.
pub fn compose_header_json(report: &HeaderReport) -> JsonVal {
    let items: Vec<_> = report
        .files
        .iter()
        .map(|f| {
            json!({
                "file": utils::rel_to_root(&f.path, &report.root),
                "outcome": f.outcome,
                "wrote": report.wrote && f.outcome == Outcome::Added,
                "error": f.error,
            })
        })
        .collect();
    let c = report.counts();
    let summary = json!({
        "added": c.added,
        "skipped": c.skipped,
        "errored": c.errored,
        "total": c.total,
        "wrote": report.wrote,
    });
    json!({"results": items, "summary": summary})
}

/// Compose logs JSON object (pure) for testing/snapshot purposes.
pub fn compose_logs_json(summary: &LogSummary) -> JsonVal {
    json!({
        "results": summary.lines,
        "summary": {
            "path": summary.path.to_string_lossy(),
            "count": summary.count,
        }
    })
}

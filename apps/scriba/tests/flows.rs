use scriba::config::{self, DEFAULT_HEADER};
use scriba::models::Outcome;
use scriba::{header, logs, output};
use std::fs;
use tempfile::tempdir;

#[test]
fn header_run_uses_config_discovered_from_root() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::write(
        root.join("scriba.toml"),
        r##"
[header]
text = "# (c) Acme Corp"
marker = "(c) Acme Corp"
extensions = ["py", "sh"]
exclude = ["venv"]
"##,
    )
    .unwrap();
    fs::create_dir_all(root.join("venv/lib")).unwrap();
    fs::write(root.join("venv/lib/site.py"), "import os\n").unwrap();
    fs::write(root.join("run.sh"), "echo hi\n").unwrap();
    fs::write(root.join("tool.py"), "# (c) Acme Corp\nprint(1)\n").unwrap();
    fs::write(root.join("app.js"), "x()\n").unwrap();

    let eff = config::resolve_effective(root.to_str(), None, None).unwrap();
    let report = header::run_header(&eff.root, &eff.header, true);
    let c = report.counts();
    assert_eq!((c.added, c.skipped, c.errored), (1, 1, 0));
    assert_eq!(
        fs::read_to_string(root.join("run.sh")).unwrap(),
        "# (c) Acme Corp\n\necho hi\n"
    );
    assert_eq!(fs::read_to_string(root.join("app.js")).unwrap(), "x()\n");
    assert_eq!(
        fs::read_to_string(root.join("venv/lib/site.py")).unwrap(),
        "import os\n"
    );
}

#[test]
fn header_check_then_write_then_idempotent() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir(root.join(".git")).unwrap();
    fs::create_dir(root.join("lib")).unwrap();
    fs::write(root.join("lib/main.dart"), "void main() {}\n").unwrap();
    let eff = config::resolve_effective(root.to_str(), None, None).unwrap();

    let checked = header::run_header(&eff.root, &eff.header, false);
    assert!(checked.missing_headers());
    assert_eq!(
        fs::read_to_string(root.join("lib/main.dart")).unwrap(),
        "void main() {}\n"
    );

    let written = header::run_header(&eff.root, &eff.header, true);
    assert_eq!(written.counts().added, 1);
    let after = fs::read_to_string(root.join("lib/main.dart")).unwrap();
    assert_eq!(after, format!("{}\n\nvoid main() {{}}\n", DEFAULT_HEADER));

    let again = header::run_header(&eff.root, &eff.header, false);
    assert!(!again.missing_headers());
    assert_eq!(again.files[0].outcome, Outcome::Skipped);
    assert_eq!(fs::read_to_string(root.join("lib/main.dart")).unwrap(), after);

    let json = output::compose_header_json(&again);
    assert_eq!(json["results"][0]["file"], "lib/main.dart");
    assert_eq!(json["results"][0]["outcome"], "skipped");
}

#[test]
fn logs_summary_with_configured_output_name() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("scriba.toml"), "[logs]\noutput_file = \"resumo.log\"\n").unwrap();
    let folder = root.join("docs");
    fs::create_dir(&folder).unwrap();
    fs::write(
        folder.join("LOG010.md"),
        "# LOG010 - Migração da base\n\n**Data:** 2025-05-02\n**Status:** Concluído\n",
    )
    .unwrap();
    fs::write(
        folder.join("LOG002.md"),
        "# LOG002 - Setup inicial\n\n**Data:** 2025-01-10\n**Status:** Concluído\n",
    )
    .unwrap();

    let eff = config::resolve_effective(root.to_str(), None, None).unwrap();
    let summary = logs::create_log_summary(&folder, &eff.log_file).unwrap();
    assert_eq!(summary.count, 2);
    assert_eq!(summary.path, folder.join("resumo.log"));
    assert_eq!(
        fs::read_to_string(folder.join("resumo.log")).unwrap(),
        "2025-01-10 - Setup inicial - Concluído\n2025-05-02 - Migração da base - Concluído\n"
    );

    // The summary file itself is never picked up as input on a re-run
    let again = logs::create_log_summary(&folder, &eff.log_file).unwrap();
    assert_eq!(again.lines, summary.lines);
}

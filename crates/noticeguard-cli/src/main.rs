//! CLI entry point for noticeguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `noticeguard-app` crate.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use noticeguard_app::{
    CheckInput, ExplainOutput, parse_report_json, render_annotations, render_markdown, run_check,
    run_explain, runtime_error_report, serialize_report, to_renderable, verdict_exit_code,
};
use noticeguard_repo::{GitIndex, TrackEverything, TrackingQuery};
use noticeguard_settings::Overrides;
use noticeguard_types::NoticeguardReport;

#[derive(Parser, Debug)]
#[command(
    name = "noticeguard",
    version,
    about = "License notice guard for source trees"
)]
struct Cli {
    /// Repository root to scan (falls back to NOTICEGUARD_ROOT, then the current directory).
    #[arg(long)]
    root: Option<Utf8PathBuf>,

    /// Path to noticeguard config TOML, relative to the root.
    #[arg(long, default_value = "noticeguard.toml")]
    config: Utf8PathBuf,

    /// Override profile (strict|warn).
    #[arg(long)]
    profile: Option<String>,

    /// Override maximum findings to emit.
    #[arg(long)]
    max_findings: Option<u32>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan the tree, evaluate checks, and write report artifacts.
    Check {
        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/noticeguard/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/noticeguard/comment.md")]
        markdown_out: Utf8PathBuf,

        /// Scan all files, not just git-tracked ones.
        #[arg(long)]
        all_files: bool,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/noticeguard/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/noticeguard/report.json")]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Explain a check_id or code with remediation guidance.
    Explain {
        /// The check_id (e.g., "notice.short_license") or code (e.g., "digest_mismatch") to explain.
        identifier: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Check {
            ref report_out,
            write_markdown,
            ref markdown_out,
            all_files,
        } => cmd_check(
            &cli,
            report_out.clone(),
            write_markdown,
            markdown_out.clone(),
            all_files,
        ),
        Commands::Md { report, output } => cmd_md(report, output),
        Commands::Annotations { report, max } => cmd_annotations(report, max),
        Commands::Explain { identifier } => cmd_explain(&identifier),
    }
}

fn resolve_root(cli: &Cli) -> Utf8PathBuf {
    if let Some(root) = &cli.root {
        return root.clone();
    }
    if let Ok(env_root) = std::env::var("NOTICEGUARD_ROOT") {
        if !env_root.is_empty() {
            return Utf8PathBuf::from(env_root);
        }
    }
    Utf8PathBuf::from(".")
}

fn cmd_check(
    cli: &Cli,
    report_out: Utf8PathBuf,
    write_markdown: bool,
    markdown_out: Utf8PathBuf,
    all_files: bool,
) -> anyhow::Result<()> {
    let root = resolve_root(cli);
    let root = root.canonicalize_utf8().unwrap_or(root);

    let result = (|| -> anyhow::Result<i32> {
        if !root.exists() {
            anyhow::bail!("root does not exist: {}", root);
        }

        // Load config if present; missing file is allowed (defaults apply).
        let cfg_path = root.join(&cli.config);
        let cfg_text = std::fs::read_to_string(&cfg_path).unwrap_or_default();

        let overrides = Overrides {
            profile: cli.profile.clone(),
            max_findings: cli.max_findings,
        };

        let tracking: Box<dyn TrackingQuery> = if all_files {
            Box::new(TrackEverything)
        } else {
            match GitIndex::load(&root) {
                Ok(index) => {
                    if index.is_empty() {
                        eprintln!(
                            "noticeguard: git index is empty; nothing will scan (use --all-files for untracked trees)"
                        );
                    }
                    Box::new(index)
                }
                Err(err) => {
                    eprintln!("noticeguard: git index unavailable ({err:#}); scanning all files");
                    Box::new(TrackEverything)
                }
            }
        };

        let input = CheckInput {
            repo_root: &root,
            config_text: &cfg_text,
            overrides,
            tracking: tracking.as_ref(),
        };

        let output = run_check(input)?;

        write_report_file(&report_out, &output.report).context("write report json")?;

        if write_markdown {
            let renderable = to_renderable(&output.report);
            let md = render_markdown(&renderable);
            write_text_file(&markdown_out, &md).context("write markdown")?;
        }

        Ok(verdict_exit_code(output.report.verdict))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            let report = runtime_error_report(&format!("{err:#}"));
            let _ = write_report_file(&report_out, &report);
            eprintln!("noticeguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn write_report_file(path: &camino::Utf8Path, report: &NoticeguardReport) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    let data = serialize_report(report).context("serialize report")?;
    std::fs::write(path, data).with_context(|| format!("write report: {}", path))?;
    Ok(())
}

fn write_text_file(path: &camino::Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}

fn cmd_md(report_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(&report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let renderable = to_renderable(&report);
    let md = render_markdown(&renderable);

    if let Some(out_path) = output {
        write_text_file(&out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_annotations(report_path: Utf8PathBuf, max: usize) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(&report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let renderable = to_renderable(&report);
    let annotations = render_annotations(&renderable, max);

    for annotation in annotations {
        println!("{}", annotation);
    }

    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", noticeguard_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                noticeguard_app::format_not_found(&identifier, available_check_ids, available_codes)
            );
            std::process::exit(1);
        }
    }
}

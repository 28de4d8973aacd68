mod config;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use catalogfix_domain::{MetaTable, ReadinessAnalyzer, classification_rules, classify};
use catalogfix_inputs::{load_fix_log, load_issues, load_meta_entries};
use catalogfix_render::{FixLogMeta, render_fix_log_now, render_readiness_md};
use catalogfix_types::fix::FixCategory;
use catalogfix_types::report::{ReadinessReport, ToolInfo};
use chrono::Utc;
use clap::{Parser, Subcommand};
use config::{ConfigMerger, MergedConfig};
use fs_err as fs;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

/// Exit code used when blocking errors remain and the gate is enabled.
const EXIT_BLOCKED: u8 = 2;

#[derive(Debug, Parser)]
#[command(
    name = "catalogfix",
    version,
    about = "Export readiness checks and auto-fix audit logs for catalog CSV files."
)]
struct Cli {
    /// Config file (default: ./catalogfix.toml if present).
    #[arg(long, global = true)]
    config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Count blocking errors and decide whether the export may proceed.
    Readiness(ReadinessArgs),
    /// Render the auto-fix audit log for a list of applied fixes.
    Report(ReportArgs),
    /// Print the category each fix message falls into.
    Classify(ClassifyArgs),
    /// List the fix categories and the keywords that select them, in priority order.
    Categories(CategoriesArgs),
}

#[derive(Debug, Parser)]
struct ReadinessArgs {
    /// Issue list produced by the validation engine (JSON).
    #[arg(long)]
    issues: Utf8PathBuf,

    /// Export format id used for registry lookups.
    #[arg(long)]
    format: Option<String>,

    /// Issue-meta registry file (.toml or .json).
    #[arg(long)]
    registry: Option<Utf8PathBuf>,

    /// Output format (text, json).
    #[arg(long, value_enum, default_value = "text")]
    output: OutputFormat,

    /// Write output to this file instead of stdout.
    #[arg(long)]
    out: Option<Utf8PathBuf>,

    /// Exit with code 2 when the export is blocked.
    #[arg(long, default_value_t = false)]
    fail_on_blocking: bool,
}

#[derive(Debug, Parser)]
struct ReportArgs {
    /// Applied-fix messages (.json array or one message per line).
    #[arg(long)]
    fixes: Utf8PathBuf,

    /// Name of the exported file, shown in the log header.
    #[arg(long)]
    file_name: Option<String>,

    /// Export format id, shown in the log header.
    #[arg(long)]
    format: Option<String>,

    /// Write the log to this file instead of stdout.
    #[arg(long)]
    out: Option<Utf8PathBuf>,
}

#[derive(Debug, Parser)]
struct ClassifyArgs {
    /// Fix messages to classify.
    #[arg(required = true)]
    messages: Vec<String>,
}

#[derive(Debug, Parser)]
struct CategoriesArgs {
    /// Output format (text, json).
    #[arg(long, value_enum, default_value = "text")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    match real_main() {
        Ok(code) => code,
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(1)
        }
    }
}

fn real_main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.as_deref();
    match cli.cmd {
        Command::Readiness(args) => cmd_readiness(args, config_path),
        Command::Report(args) => cmd_report(args, config_path),
        Command::Classify(args) => cmd_classify(args),
        Command::Categories(args) => cmd_categories(args),
    }
}

fn cmd_readiness(args: ReadinessArgs, config_path: Option<&Utf8Path>) -> anyhow::Result<ExitCode> {
    let file_config = config::load_or_default(Utf8Path::new("."), config_path)
        .context("load catalogfix.toml config")?;
    let merged = ConfigMerger::new(file_config).merge_readiness_args(
        args.format.as_deref(),
        args.registry.as_deref(),
        args.fail_on_blocking,
    );

    debug!(
        "merged config: format={:?}, registry={:?}, fail_on_blocking={}, inline_meta={}",
        merged.format_id,
        merged.registry,
        merged.fail_on_blocking,
        merged.inline_meta.len()
    );

    let issues =
        load_issues(&args.issues).with_context(|| format!("load issues from {}", args.issues))?;
    let registry = build_registry(&merged)?;

    let summary =
        ReadinessAnalyzer::new(&registry).analyze(&issues, merged.format_id.as_deref());

    let rendered = match args.output {
        OutputFormat::Text => render_readiness_md(&summary),
        OutputFormat::Json => {
            let report = ReadinessReport::new(
                tool_info(),
                Utc::now(),
                merged.format_id.clone(),
                issues.len() as u64,
                summary.clone(),
            );
            let mut s = serde_json::to_string_pretty(&report).context("serialize json")?;
            s.push('\n');
            s
        }
    };
    emit(args.out.as_deref(), &rendered)?;

    info!(
        blocking = summary.blocking_errors,
        auto_fixable = summary.auto_fixable_blocking_errors,
        "export {}",
        if summary.is_export_ready() { "ready" } else { "blocked" }
    );

    if merged.fail_on_blocking && !summary.is_export_ready() {
        return Ok(ExitCode::from(EXIT_BLOCKED));
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_report(args: ReportArgs, config_path: Option<&Utf8Path>) -> anyhow::Result<ExitCode> {
    let file_config = config::load_or_default(Utf8Path::new("."), config_path)
        .context("load catalogfix.toml config")?;
    let merged = ConfigMerger::new(file_config).merge_report_args(args.format.as_deref());

    let fixes =
        load_fix_log(&args.fixes).with_context(|| format!("load fix log from {}", args.fixes))?;

    let meta = FixLogMeta {
        file_name: args.file_name.clone(),
        format_id: merged.format_id.clone(),
    };
    let log = render_fix_log_now(&fixes, &meta);

    let out = args
        .out
        .clone()
        .or_else(|| default_log_path(&merged, &args));
    emit(out.as_deref(), &log)?;

    info!(actions = fixes.len(), "rendered fix log");
    Ok(ExitCode::SUCCESS)
}

fn cmd_classify(args: ClassifyArgs) -> anyhow::Result<ExitCode> {
    for message in &args.messages {
        println!("{}\t{}", classify(message), message);
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_categories(args: CategoriesArgs) -> anyhow::Result<ExitCode> {
    match args.output {
        OutputFormat::Text => {
            println!("Fix categories (first match wins):\n");
            println!("  {:<4} {:<28} KEYWORDS", "#", "CATEGORY");
            println!("  {:<4} {:<28} --------", "-", "--------");
            for (i, rule) in classification_rules().iter().enumerate() {
                println!(
                    "  {:<4} {:<28} {}",
                    i + 1,
                    rule.category.label(),
                    rule.keywords.join(", ")
                );
            }
            println!(
                "  {:<4} {:<28} (anything else)",
                "-",
                FixCategory::OtherNormalisation.label()
            );
        }
        OutputFormat::Json => {
            let rules: Vec<_> = classification_rules()
                .iter()
                .enumerate()
                .map(|(i, rule)| {
                    serde_json::json!({
                        "priority": i + 1,
                        "category": rule.category,
                        "keywords": rule.keywords,
                    })
                })
                .collect();
            let out = serde_json::json!({
                "rules": rules,
                "fallback": FixCategory::OtherNormalisation,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn build_registry(merged: &MergedConfig) -> anyhow::Result<MetaTable> {
    let mut table = MetaTable::new();
    if let Some(path) = &merged.registry {
        let entries =
            load_meta_entries(path).with_context(|| format!("load issue meta from {}", path))?;
        table.extend(entries);
    }
    table.extend(merged.inline_meta.iter().cloned());
    debug!(entries = table.len(), "built issue meta registry");
    Ok(table)
}

fn default_log_path(merged: &MergedConfig, args: &ReportArgs) -> Option<Utf8PathBuf> {
    let out_dir = merged.out_dir.as_ref()?;
    let stem = args
        .file_name
        .as_deref()
        .map(|name| Utf8Path::new(name).file_stem().unwrap_or(name).to_string())
        .or_else(|| args.fixes.file_stem().map(str::to_string))
        .unwrap_or_else(|| "unknown".to_string());
    Some(out_dir.join(format!("autofix-log-{stem}.txt")))
}

fn emit(out: Option<&Utf8Path>, contents: &str) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
                fs::create_dir_all(parent).with_context(|| format!("create {}", parent))?;
            }
            fs::write(path, contents).with_context(|| format!("write {}", path))?;
            info!("wrote {}", path);
        }
        None => print!("{contents}"),
    }
    Ok(())
}

fn tool_info() -> ToolInfo {
    ToolInfo {
        name: "catalogfix".to_string(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
    }
}

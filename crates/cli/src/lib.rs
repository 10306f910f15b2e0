use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context as AnyhowContext, Result};
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use konspekt_model::{LessonRecord, QueryState, SortOrder, DEFAULT_PAGE_SIZE};
use konspekt_query::{find_by_title, query, subjects};
use konspekt_summarize::{summarize, KeySentence};
use serde::Serialize;

mod render;

fn print_stdout(text: &str) -> Result<()> {
    use std::io::Write;

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

#[derive(Parser)]
#[command(name = "konspekt")]
#[command(about = "Browse and digest school lesson notes", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for output)
    #[arg(long, global = true)]
    quiet: bool,

    /// Path to the lesson archive JSON file
    #[arg(long, global = true, default_value = "lessons.json")]
    data: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// List lessons as a filtered, sorted, paginated card view
    List(ListArgs),

    /// Show one lesson with its key points
    Show(ShowArgs),

    /// List the distinct subjects in the archive
    Subjects(SubjectsArgs),
}

#[derive(Args)]
struct ListArgs {
    /// Search term matched against titles, subjects, bodies and dates
    #[arg(short, long, default_value = "")]
    search: String,

    /// Subject filter; "all" disables it
    #[arg(long, default_value = "all")]
    subject: String,

    /// Sort order: newest, oldest or title
    #[arg(long, default_value = "newest")]
    sort: SortOrder,

    /// 1-based page number (out-of-range values are clamped)
    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Cards per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: usize,

    /// Emit the page as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ShowArgs {
    /// Exact lesson title
    title: String,

    /// Prefer the compact body when the lesson carries one
    #[arg(long)]
    tiny: bool,

    /// Emit the lesson and its key points as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct SubjectsArgs {
    /// Emit the subject list as JSON
    #[arg(long)]
    json: bool,
}

/// JSON envelope for `show`.
#[derive(Serialize)]
struct LessonView<'a> {
    lesson: &'a LessonRecord,
    key_points: &'a [KeySentence],
}

pub fn main_entry() -> Result<()> {
    let mut cli = Cli::parse();

    // Keep stdout clean for JSON consumers.
    let json_output = match &cli.command {
        Commands::List(args) => args.json,
        Commands::Show(args) => args.json,
        Commands::Subjects(args) => args.json,
    };
    if json_output {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let records = load_records(&cli.data)?;

    match cli.command {
        Commands::List(args) => run_list(args, &records),
        Commands::Show(args) => run_show(args, &records),
        Commands::Subjects(args) => run_subjects(args, &records),
    }
}

fn load_records(path: &Path) -> Result<Vec<LessonRecord>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read lesson archive {}", path.display()))?;
    let records: Vec<LessonRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse lesson archive {}", path.display()))?;
    log::info!("loaded {} lessons from {}", records.len(), path.display());
    Ok(records)
}

fn run_list(args: ListArgs, records: &[LessonRecord]) -> Result<()> {
    let state = QueryState::new()
        .with_search(&args.search)
        .with_subject(&args.subject)
        .with_sort(args.sort)
        .with_page(args.page)
        .with_page_size(args.page_size);

    let page = query(records, &state, Local::now().date_naive());

    if args.json {
        return print_stdout(&serde_json::to_string_pretty(&page)?);
    }
    print_stdout(&render::page(&page))
}

fn run_show(args: ShowArgs, records: &[LessonRecord]) -> Result<()> {
    let lesson = find_by_title(records, &args.title)
        .with_context(|| format!("no lesson titled '{}'", args.title))?;
    // Key points always come from the full body; --tiny only swaps the
    // displayed text.
    let key_points = summarize(&lesson.content);

    if args.json {
        let view = LessonView {
            lesson,
            key_points: &key_points,
        };
        return print_stdout(&serde_json::to_string_pretty(&view)?);
    }
    print_stdout(&render::lesson(lesson, &key_points, args.tiny))
}

fn run_subjects(args: SubjectsArgs, records: &[LessonRecord]) -> Result<()> {
    let labels = subjects(records);
    if args.json {
        return print_stdout(&serde_json::to_string_pretty(&labels)?);
    }
    print_stdout(&labels.join("\n"))
}

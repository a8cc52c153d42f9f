//! Crimp board search CLI.
//!
//! Searches and browses a synced climbing-board database from the command
//! line. Every subcommand reads one SQLite database given by `--db` (or
//! `CRIMP_DB`) and prints either aligned text or, with `--json`, the same
//! rows as JSON.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use tracing::info;

use crimp_store::{ClimbFilter, SortKey, SortOrder, SqliteStore};

#[derive(Debug, Parser)]
#[command(name = "crimp")]
#[command(about = "Search and browse synced climbing-board databases")]
#[command(version)]
struct Cli {
    /// Path to the synced board database.
    #[arg(long, env = "CRIMP_DB")]
    db: PathBuf,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "CRIMP_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    /// Print JSON instead of aligned text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the browsable layouts.
    Layouts,
    /// List the panel sizes for a layout.
    Sizes {
        /// Layout id.
        #[arg(long)]
        layout: i64,
    },
    /// List the hold sets mounted on a layout at a size.
    Sets {
        /// Layout id.
        #[arg(long)]
        layout: i64,
        /// Product size id.
        #[arg(long)]
        size: i64,
    },
    /// List the wall angles a layout's product supports.
    Angles {
        /// Layout id.
        #[arg(long)]
        layout: i64,
    },
    /// List the difficulty grade labels.
    Grades,
    /// List the published beta links for a climb.
    Beta {
        /// Climb uuid.
        uuid: String,
    },
    /// Search climbs.
    Search(SearchArgs),
}

#[derive(Debug, Args)]
struct SearchArgs {
    /// Layout id.
    #[arg(long)]
    layout: i64,

    /// Product size id.
    #[arg(long)]
    size: i64,

    /// Hold set id; repeat for multiple sets.
    #[arg(long = "set")]
    sets: Vec<i64>,

    /// Only climbs with statistics at this wall angle.
    #[arg(long)]
    angle: Option<i64>,

    /// Minimum ascent count.
    #[arg(long, default_value_t = 1)]
    min_ascents: i64,

    /// Minimum difficulty grade.
    #[arg(long, default_value_t = 1)]
    min_grade: i64,

    /// Maximum difficulty grade.
    #[arg(long, default_value_t = 39)]
    max_grade: i64,

    /// Minimum quality rating.
    #[arg(long, default_value_t = 1.0)]
    min_rating: f64,

    /// Maximum distance between the display grade and the logged average.
    #[arg(long, default_value_t = 39.0)]
    grade_accuracy: f64,

    /// Frame-encoded hold selection, e.g. p1131r15p1134r12.
    #[arg(long)]
    holds: Option<String>,

    /// Require hold roles to match exactly.
    #[arg(long)]
    strict: bool,

    /// Sort key: ascents, difficulty, name, or quality.
    #[arg(long, default_value = "ascents")]
    sort_by: String,

    /// Sort order: asc or desc.
    #[arg(long, default_value = "desc")]
    sort_order: String,

    /// Page number, starting at 0.
    #[arg(long, default_value_t = 0)]
    page: u32,

    /// Results per page.
    #[arg(long, default_value_t = 10)]
    page_size: u32,

    /// Print only the match count.
    #[arg(long)]
    count: bool,
}

impl SearchArgs {
    fn to_filter(&self) -> anyhow::Result<ClimbFilter> {
        let mut filter = ClimbFilter::new(self.layout, self.size)
            .with_sets(self.sets.clone())
            .with_min_ascents(self.min_ascents)
            .with_grade_range(self.min_grade, self.max_grade)
            .with_min_rating(self.min_rating)
            .with_grade_accuracy(self.grade_accuracy)
            .with_sort(
                SortKey::parse(&self.sort_by)?,
                SortOrder::parse(&self.sort_order),
            )
            .with_page(self.page, self.page_size);

        if let Some(angle) = self.angle {
            filter = filter.with_angle(angle);
        }
        if let Some(holds) = &self.holds {
            filter = filter.with_holds(holds.clone(), self.strict);
        }
        Ok(filter)
    }
}

fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("crimp={level},crimp_store={level}")));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let store = SqliteStore::open(&cli.db)
        .with_context(|| format!("failed to open board database {}", cli.db.display()))?;
    info!(database = %cli.db.display(), "opened board database");

    match cli.command {
        Command::Layouts => cmd_layouts(&store, cli.json),
        Command::Sizes { layout } => cmd_sizes(&store, layout, cli.json),
        Command::Sets { layout, size } => cmd_sets(&store, layout, size, cli.json),
        Command::Angles { layout } => cmd_angles(&store, layout, cli.json),
        Command::Grades => cmd_grades(&store, cli.json),
        Command::Beta { uuid } => cmd_beta(&store, &uuid, cli.json),
        Command::Search(args) => cmd_search(&store, &args, cli.json),
    }
}

fn cmd_layouts(store: &SqliteStore, json: bool) -> anyhow::Result<()> {
    let layouts = store.layouts()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&layouts)?);
        return Ok(());
    }
    for layout in layouts {
        println!("{:>4}  {}", layout.id, layout.name);
    }
    Ok(())
}

fn cmd_sizes(store: &SqliteStore, layout: i64, json: bool) -> anyhow::Result<()> {
    let sizes = store.sizes(layout)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&sizes)?);
        return Ok(());
    }
    for size in sizes {
        println!("{:>4}  {:<16}  {}", size.id, size.name, size.description);
    }
    Ok(())
}

fn cmd_sets(store: &SqliteStore, layout: i64, size: i64, json: bool) -> anyhow::Result<()> {
    let sets = store.sets(layout, size)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&sets)?);
        return Ok(());
    }
    for set in sets {
        println!("{:>4}  {}", set.id, set.name);
    }
    Ok(())
}

fn cmd_angles(store: &SqliteStore, layout: i64, json: bool) -> anyhow::Result<()> {
    let angles = store.angles(layout)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&angles)?);
        return Ok(());
    }
    for angle in angles {
        println!("{angle}");
    }
    Ok(())
}

fn cmd_grades(store: &SqliteStore, json: bool) -> anyhow::Result<()> {
    let grades = store.grades()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&*grades)?);
        return Ok(());
    }
    for grade in grades.iter() {
        println!("{:>3}  {}", grade.difficulty, grade.boulder_name);
    }
    Ok(())
}

fn cmd_beta(store: &SqliteStore, uuid: &str, json: bool) -> anyhow::Result<()> {
    let name = store.climb_name(uuid)?;
    let links = store.beta_links(uuid)?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({ "climb": name, "links": links }))?
        );
        return Ok(());
    }
    println!("{name}");
    for link in links {
        let angle = link
            .angle
            .map(|a| a.to_string())
            .unwrap_or_else(|| "-".to_string());
        let user = link.foreign_username.as_deref().unwrap_or("-");
        println!("{angle:>4}  {user:<20}  {}", link.link);
    }
    Ok(())
}

fn cmd_search(store: &SqliteStore, args: &SearchArgs, json: bool) -> anyhow::Result<()> {
    let filter = args.to_filter()?;
    let total = store.climb_count(&filter)?;

    if args.count {
        if json {
            println!("{}", json!({ "count": total }));
        } else {
            println!("{total}");
        }
        return Ok(());
    }

    let hits = store.climb_search(&filter)?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({ "count": total, "climbs": hits }))?
        );
        return Ok(());
    }

    println!("{} climbs match; page {} shows {}", total, filter.page, hits.len());
    for hit in &hits {
        let grade = hit.difficulty.as_deref().unwrap_or("?");
        println!(
            "{:<36}  {:<28}  {:>3}\u{b0}  {:<6}  {:>5}  {:>4.2}",
            hit.uuid, hit.name, hit.angle, grade, hit.ascents, hit.quality
        );
    }
    Ok(())
}

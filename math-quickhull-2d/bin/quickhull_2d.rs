//! Compute and plot the convex hull of a 2D point set
//!
//! Usage:
//!     cargo run --bin quickhull-2d -- --count 50 --seed 42
//!     cargo run --bin quickhull-2d -- --input points.csv --no-plot

use anyhow::{Context, bail};
use clap::Parser;
use directories::ProjectDirs;
use math_quickhull_2d::{
    ConvexHull2D, HullConfig, export_html, export_json, format_point_table, testdata,
};
use std::path::PathBuf;
use std::time::Instant;

/// CLI arguments for the hull solver
#[derive(Parser, Debug)]
#[command(name = "quickhull-2d")]
#[command(about = "Compute the convex hull of random or loaded 2D points with QuickHull")]
struct Cli {
    /// Number of random points to generate
    #[arg(short = 'n', long, default_value_t = 20)]
    count: usize,

    /// Smallest random coordinate
    #[arg(long, default_value_t = 1)]
    min: i32,

    /// Largest random coordinate
    #[arg(long, default_value_t = 100)]
    max: i32,

    /// Optional random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Read points from a CSV file (`x,y` per line) instead of generating them
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// JSON file with hull limits (`max_depth`, `max_points`)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maximum recursion depth (overrides the config file)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Output directory for the HTML plot and JSON export
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Skip writing the HTML plot
    #[arg(long)]
    no_plot: bool,

    /// Also write the points and hull as JSON
    #[arg(long)]
    json: bool,

    /// Print the input points as well as the hull
    #[arg(long)]
    show_points: bool,
}

/// Get the output directory, defaulting to the project cache directory
fn get_output_dir(requested: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    let dir = match requested {
        Some(dir) => dir,
        None => ProjectDirs::from("org", "spinorama", "math-audio")
            .context("Failed to determine project directories")?
            .cache_dir()
            .join("quickhull2d"),
    };

    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    Ok(dir)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    println!("=====================");
    println!(" CONVEX HULL SOLVER  ");
    println!("=====================");

    let mut config = match &cli.config {
        Some(path) => HullConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => HullConfig::default(),
    };
    if cli.max_depth.is_some() {
        config.max_depth = cli.max_depth;
    }

    let points = match &cli.input {
        Some(path) => testdata::load_csv_points(path)
            .with_context(|| format!("Failed to load points from {}", path.display()))?,
        None => testdata::random_integer_points(cli.count, cli.min, cli.max, cli.seed),
    };

    if points.len() <= 1 {
        println!();
        bail!("There is no Convex Hull for <= 1 point");
    }

    if cli.show_points {
        println!();
        print!("{}", format_point_table(&points, "Input"));
    }

    let start = Instant::now();
    let hull = ConvexHull2D::build_with_config(&points, &config)?;
    let elapsed = start.elapsed();

    println!();
    print!("{}", format_point_table(hull.vertices(), "Hull"));
    println!(
        "The Convex Hull is found by {:.5} millisecond(s)",
        elapsed.as_secs_f64() * 1000.0
    );
    println!(
        "Area: {:.3}, perimeter: {:.3}",
        hull.area(),
        hull.perimeter()
    );

    if cli.no_plot && !cli.json {
        return Ok(());
    }

    let output_dir = get_output_dir(cli.output_dir)?;

    if !cli.no_plot {
        let html_path = output_dir.join("convex_hull.html");
        let title = format!("Convex Hull of {} points", hull.num_points());
        export_html(&hull, &html_path, &title)
            .with_context(|| format!("Failed to write {}", html_path.display()))?;
        println!("Exported HTML: {}", html_path.display());
    }

    if cli.json {
        let json_path = output_dir.join("convex_hull.json");
        export_json(&hull, &json_path)?;
        println!("Exported JSON: {}", json_path.display());
    }

    Ok(())
}

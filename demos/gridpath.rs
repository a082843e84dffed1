//! Animated Dijkstra search on a random grid graph, in the terminal.
//!
//! Run: cargo run --bin gridpath -- --nodes 25 --start 0 --end 24
//!
//! Set `RUST_LOG=debug` to see search and generation logs.

use std::error::Error;
use std::time::Duration;

use clap::Parser;
use gridpath_demos::{AnimationConfig, Animator, Frame, Session, SessionConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser, Debug)]
#[command(name = "gridpath", version, about = "Step-by-step Dijkstra on a random grid graph")]
struct Args {
    /// Number of grid nodes.
    #[arg(short, long, default_value = "16")]
    nodes: String,
    /// Start node id (defaults to the first node).
    #[arg(short, long)]
    start: Option<usize>,
    /// End node id (defaults to the last node).
    #[arg(short, long)]
    end: Option<usize>,
    /// Pause after each visited node, in milliseconds.
    #[arg(long, default_value_t = 1000)]
    delay_ms: u64,
    /// Seed for edge weights.
    #[arg(long)]
    seed: Option<u64>,
    /// Print the generated template as JSON before searching.
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("using seed {seed}");

    let config = SessionConfig {
        animation: AnimationConfig {
            delay: Duration::from_millis(args.delay_ms),
        },
        ..SessionConfig::default()
    };
    let mut session = Session::with_config(config, StdRng::seed_from_u64(seed));
    let template = session.generate(&args.nodes)?.clone();
    let len = template.len();
    session.select(args.start.unwrap_or(0), args.end.unwrap_or(len - 1))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&template)?);
    }

    let mut frame = Frame::with_selection(len, session.selection());
    println!("{}", frame.render(&template));

    let animator = Animator::new(session.animation());
    let path = animator.run(session.search()?, |search, &node| {
        frame.visit(node);
        println!(
            "visit {node} (distance {})\n{}",
            search.distance(&node).unwrap_or_default(),
            frame.render(&template)
        );
    });

    frame.highlight_path(&path);
    println!("{}", frame.render(&template));
    if path.is_empty() {
        println!("no path");
        return Ok(());
    }
    let route: Vec<String> = path.iter().map(usize::to_string).collect();
    let weight = session
        .graph()
        .and_then(|g| g.path_weight(&path).ok().flatten())
        .unwrap_or_default();
    println!("path: {} (weight {weight})", route.join(" -> "));
    Ok(())
}

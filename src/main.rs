use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use treemerge::steps::{generate_steps, Algorithm};
use treemerge::tree::{
    build_level_order, level_order, parse_level_order, random_level_order, render_level_order,
};

#[derive(Parser, Debug)]
#[command(name = "treemerge", about = "Narrated, replayable merging of two binary trees")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every animation step for merging two level-order trees.
    Narrate {
        /// First tree, e.g. "[1,3,2,5]".
        tree1: String,
        /// Second tree, e.g. "[2,1,3,null,4,null,7]".
        tree2: String,
        /// Traversal order for the narration.
        #[arg(long, value_enum, default_value_t = AlgorithmArg::Dfs)]
        algorithm: AlgorithmArg,
    },
    /// Print only the merged tree's level-order encoding.
    Merge {
        /// First tree.
        tree1: String,
        /// Second tree.
        tree2: String,
    },
    /// Generate a random level-order tree encoding.
    Random {
        /// Maximum tree depth (clamped to 1..=6).
        #[arg(long, default_value_t = 3)]
        max_depth: u32,
        /// Probability that a non-root slot is null.
        #[arg(long, default_value_t = 0.3)]
        null_probability: f64,
        /// Seed for reproducible output (random when omitted).
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum AlgorithmArg {
    Dfs,
    Bfs,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Dfs => Algorithm::Dfs,
            AlgorithmArg::Bfs => Algorithm::Bfs,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Narrate {
            tree1,
            tree2,
            algorithm,
        } => run_narrate(&tree1, &tree2, algorithm.into())?,
        Commands::Merge { tree1, tree2 } => run_merge(&tree1, &tree2)?,
        Commands::Random {
            max_depth,
            null_probability,
            seed,
        } => run_random(max_depth, null_probability, seed),
    }

    Ok(())
}

fn parse_trees(
    tree1: &str,
    tree2: &str,
) -> Result<(Option<treemerge::TreeNode>, Option<treemerge::TreeNode>)> {
    let values1 = parse_level_order(tree1).context("failed to parse the first tree")?;
    let values2 = parse_level_order(tree2).context("failed to parse the second tree")?;
    Ok((
        build_level_order(&values1, "t1"),
        build_level_order(&values2, "t2"),
    ))
}

fn run_narrate(tree1: &str, tree2: &str, algorithm: Algorithm) -> Result<()> {
    let (root1, root2) = parse_trees(tree1, tree2)?;
    let animation = generate_steps(algorithm, root1.as_ref(), root2.as_ref());

    println!("{algorithm} merge, {} steps", animation.steps.len());
    println!();
    for (index, step) in animation.steps.iter().enumerate() {
        println!("{:>3}. {}", index + 1, step.snapshot.message);
        println!("     {}", step.description);
    }
    println!();
    println!(
        "merged: {}",
        render_level_order(&level_order(animation.merged_root.as_ref()))
    );

    Ok(())
}

fn run_merge(tree1: &str, tree2: &str) -> Result<()> {
    let (root1, root2) = parse_trees(tree1, tree2)?;
    let animation = generate_steps(Algorithm::Dfs, root1.as_ref(), root2.as_ref());
    println!(
        "{}",
        render_level_order(&level_order(animation.merged_root.as_ref()))
    );
    Ok(())
}

fn run_random(max_depth: u32, null_probability: f64, seed: Option<u64>) {
    let mut rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let values = random_level_order(max_depth, null_probability, &mut rng);
    println!("{}", render_level_order(&values));
}

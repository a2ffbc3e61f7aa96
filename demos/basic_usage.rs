//! Basic usage example for the gf4codes library.
//!
//! This example builds a rate 1/2 code, measures its free distance,
//! constructs orthogonal complements with both strategies and searches for
//! self-orthogonal codes. Run with `RUST_LOG=gf4codes=debug` to see the
//! library's trace output.

use gf4codes::construct::OrthogonalSolver;
use gf4codes::{Code, ComplementBuilder, SelfOrthogonalSearch, Strategy};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("gf4codes - Basic Usage Example\n");

    let code: Code = "11|1u".parse().expect("valid code");
    println!("Code {code}:");
    println!("  n = {}, k = {}", code.n(), code.k());
    println!("  Valid: {}", code.validate());
    println!(
        "  Free distance: {}",
        code.min_distance().expect("free distance")
    );
    println!(
        "  Self-orthogonal: {}",
        code.is_self_orthogonal().expect("rate 1/n code")
    );
    println!();

    println!("Orthogonal complements:");
    for strategy in [Strategy::LinearSolve, Strategy::BruteForce] {
        let dual = ComplementBuilder::new()
            .strategy(strategy)
            .build(&code)
            .expect("complement");
        println!(
            "  {strategy:<12} {dual}  (orthogonal: {})",
            code.is_orthogonal(&dual).expect("same n")
        );
    }
    println!();

    let solver = OrthogonalSolver::new(&code).expect("solvable code");
    println!("Linear system ({:?}):", solver.system().dim());
    for row in solver.system().rows() {
        let line: Vec<String> = row.iter().map(ToString::to_string).collect();
        println!("  {}", line.join(" "));
    }
    println!();

    println!("Self-orthogonal rate 1/3 codes of degree 1:");
    let mut search = SelfOrthogonalSearch::new(3, 1, 1).expect("rate 1/n search");
    let codes = search.find().expect("search");
    for found in &codes {
        println!(
            "  {found}  (free distance {})",
            found.min_distance().expect("free distance")
        );
    }
    println!("  {} codes in {} signature classes", codes.len(), search.classes().len());
}

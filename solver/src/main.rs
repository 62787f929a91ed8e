use hashi::optimizer::Optimizer;
use hashi::solver::StrategyKind;
use hashi::Board;
use log::{info, warn};
use strum::VariantArray;

fn main() {
    env_logger::init();

    let board = Board::from_rows(&[
        [2, 0, 4, 0, 2],
        [0, 0, 0, 0, 0],
        [4, 0, 3, 0, 0],
        [0, 0, 0, 0, 0],
        [3, 0, 0, 0, 2],
    ]).unwrap();

    print!("{}", board);

    let optimizer = Optimizer::default();
    for kind in StrategyKind::VARIANTS {
        match kind.strategy().solve(&board) {
            Ok(solved) => {
                let optimized = optimizer.optimize(&solved);
                info!("{}: solved with {} bridges", kind, optimized.total_units());
                println!("\n{}:\n{}", kind, optimized);
            }
            Err(failure) => warn!("{}: {}", kind, failure),
        }
    }
}

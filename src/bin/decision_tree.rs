use std::io;

use log::info;

use classic_ml::decision_tree::DecisionTreeBuilder;
use classic_ml::{cli, data, report, Error, Result};

const USAGE: &str = "Usage: decision-tree <training> <test>";

fn run<I: IntoIterator<Item = String>>(args: I) -> Result<()> {
	let args = cli::args(args, 2, 0, USAGE)?;

	let (names, training) = data::read_boolean(&args[0])?;

	info!("Fitting decision tree on {} instances ...", training.rows_len());
	let tree = DecisionTreeBuilder::default().fit(&training.build())?;

	let stdout = io::stdout();
	let mut out = stdout.lock();

	report::decision_tree(&mut out, &tree, &names)?;

	let (_, test) = data::read_boolean(&args[1])?;
	if let (Some(expected), Some(found)) = (training.features_len(), test.features_len()) {
		if expected != found {
			return Err(Error::Incompatible { expected, found });
		}
	}

	let test_set = test.build();
	let predicted = test_set.classify(&tree);
	let actual = test_set.targets().cloned().collect::<Vec<_>>();

	report::decision_tree_test(
		&mut out,
		&predicted,
		&actual,
		test_set.evaluate(&tree),
		test_set.evaluate(&tree.baseline()),
	)?;

	Ok(())
}

fn main() {
	cli::init_logging();

	cli::exit_on_error(run(std::env::args().skip(1)));
}

use std::io::{self, Write};

use log::info;

use classic_ml::classifier::Classifier;
use classic_ml::knn::KnnBuilder;
use classic_ml::{cli, data, report, Error, Result};

const USAGE: &str = "Usage: knn <training> <test> [seed]";

fn run<I: IntoIterator<Item = String>>(args: I) -> Result<()> {
	let args = cli::args(args, 2, 1, USAGE)?;
	let mut rng = cli::rng(cli::seed(args.get(2).map(String::as_str), USAGE)?);

	let training = data::read_numeric(&args[0])?;
	let test = data::read_numeric(&args[1])?;

	if let (Some(expected), Some(found)) = (training.features_len(), test.features_len()) {
		if expected != found {
			return Err(Error::Incompatible { expected, found });
		}
	}

	let knn = KnnBuilder::default();

	info!("Classifying {} test rows against {} training rows ...", test.rows_len(), training.rows_len());
	let classifier = knn.fit(training.build())?;
	let test_set = test.build();
	let predictions = test_set.classify(&classifier);

	let correct = predictions
		.iter()
		.zip(test_set.targets())
		.filter(|(predicted, target)| classifier.matches(predicted, target))
		.count();

	let stdout = io::stdout();
	let mut out = stdout.lock();

	report::knn_test(&mut out, knn.k, &predictions, correct)?;
	out.flush()?;

	let mut pooled = training.clone();
	pooled.append(&test)?;

	info!("Cross validating {} pooled rows ...", pooled.rows_len());
	let accuracy = knn.cross_validate(&mut rng, &pooled.build())?;
	report::knn_cross_validation(&mut out, knn.folds, accuracy)?;

	Ok(())
}

fn main() {
	cli::init_logging();

	cli::exit_on_error(run(std::env::args().skip(1)));
}

use std::io::{self, Write};

use log::info;

use classic_ml::perceptron::{Labels, PerceptronBuilder, TRAIN_RATE};
use classic_ml::{cli, data, report, Error, Result};

const USAGE: &str = "Usage: perceptron <data> [seed]";

fn run<I: IntoIterator<Item = String>>(args: I) -> Result<()> {
	let args = cli::args(args, 1, 1, USAGE)?;
	let mut rng = cli::rng(cli::seed(args.get(1).map(String::as_str), USAGE)?);

	let labels = Labels::default();
	let builder = data::read_labelled(&args[0], |at, token| {
		labels.parse(token).ok_or_else(|| Error::UnknownClass {
			path: at.path.to_path_buf(),
			line: at.line,
			symbol: token.to_string(),
		})
	})?;
	let dataset = builder.build();
	let perceptron = PerceptronBuilder::default();

	let stdout = io::stdout();
	let mut out = stdout.lock();

	writeln!(out, "PERCEPTRON:")?;
	info!("Training on all {} instances ...", dataset.rows_len());
	let training = perceptron.fit_random(&mut rng, &dataset);
	info!("Stopped after {} epochs: {:?}", training.epochs, training.stop);
	let correct = dataset.correct(&training.model);
	report::perceptron(&mut out, perceptron.max_epochs, &training, correct, dataset.rows_len())?;

	let (train, test) = dataset.train_test_split(TRAIN_RATE);
	report::perceptron_split(&mut out, train.rows_len(), test.rows_len())?;

	info!("Training on {} instances ...", train.rows_len());
	let training = perceptron.fit_random(&mut rng, &train);
	info!("Stopped after {} epochs: {:?}", training.epochs, training.stop);
	let correct = test.correct(&training.model);
	report::perceptron(&mut out, perceptron.max_epochs, &training, correct, test.rows_len())?;

	Ok(())
}

fn main() {
	cli::init_logging();

	cli::exit_on_error(run(std::env::args().skip(1)));
}

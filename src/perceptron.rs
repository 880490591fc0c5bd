use log::{debug, warn};
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::classifier::Classifier;
use crate::dataset::Dataset;

/// Share of the rows used for training in the split run.
pub const TRAIN_RATE: f64 = 0.7;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Class {
	Negative,
	Positive,
}

/// Symbols naming the two classes in a data file.
#[derive(Clone, Debug)]
pub struct Labels {
	pub positive: String,
	pub negative: String,
}

impl Default for Labels {
	fn default() -> Self {
		Self {
			positive: "g".to_string(),
			negative: "b".to_string(),
		}
	}
}

impl Labels {
	pub fn parse(&self, symbol: &str) -> Option<Class> {
		if symbol == self.positive {
			Some(Class::Positive)
		} else if symbol == self.negative {
			Some(Class::Negative)
		} else {
			None
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Perceptron {
	pub weights: Vec<f64>,
	pub threshold: f64,
}

impl Perceptron {
	pub fn new(weights: Vec<f64>, threshold: f64) -> Self {
		Self { weights, threshold }
	}

	/// Weights and threshold drawn independently from `[-1, 1]`.
	pub fn random<R: Rng + ?Sized>(rng: &mut R, features: usize) -> Self {
		let uniform = Uniform::<f64>::new_inclusive(-1.0, 1.0);

		Self {
			weights: (0..features).map(|_| uniform.sample(rng)).collect(),
			threshold: uniform.sample(rng),
		}
	}

	pub fn output(&self, x: &[f64]) -> f64 {
		self.weights
			.iter()
			.zip(x)
			.map(|(w, x)| w * x)
			.sum::<f64>() + self.threshold
	}

	fn shift(&mut self, x: &[f64], sign: f64) {
		for (w, x) in self.weights.iter_mut().zip(x) {
			*w += sign * x;
		}

		self.threshold += sign;
	}
}

impl Classifier<Class> for Perceptron {
	fn predict(&self, x: &[f64]) -> Class {
		if self.output(x) < 0.0 {
			Class::Negative
		} else {
			Class::Positive
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stop {
	/// A whole epoch without a mistake.
	Converged,
	EpochLimit,
	/// The correct count stayed the same for too many epochs in a row.
	Stalled,
}

#[derive(Clone, Debug)]
pub struct Training {
	pub model: Perceptron,
	pub epochs: usize,
	pub stop: Stop,
}

pub struct PerceptronBuilder {
	pub max_epochs: usize,
	pub stall_epochs: usize,
}

impl Default for PerceptronBuilder {
	fn default() -> Self {
		Self {
			max_epochs: 5000,
			stall_epochs: 100,
		}
	}
}

impl PerceptronBuilder {
	/// Trains from freshly randomised weights.
	pub fn fit_random<R: Rng + ?Sized>(&self, rng: &mut R, dataset: &Dataset<Class>) -> Training {
		self.fit(Perceptron::random(rng, dataset.features_len()), dataset)
	}

	/// Online mistake driven training: every misclassified row moves the
	/// model towards its class straight away.
	pub fn fit(&self, mut model: Perceptron, dataset: &Dataset<Class>) -> Training {
		let rows = dataset
			.rows()
			.zip(dataset.targets().copied())
			.collect::<Vec<_>>();

		if rows.is_empty() {
			return Training { model, epochs: 0, stop: Stop::Converged };
		}

		let mut epochs = 0;
		let mut last_correct = 0;
		let mut unchanged = 0;

		loop {
			epochs += 1;
			let mut correct = 0;

			for (x, y) in &rows {
				match (model.predict(x), y) {
					(Class::Negative, Class::Positive) => model.shift(x, 1.0),
					(Class::Positive, Class::Negative) => model.shift(x, -1.0),
					_ => correct += 1,
				}
			}

			debug!("Epoch {}: {} of {} correct", epochs, correct, rows.len());

			if correct == rows.len() {
				return Training { model, epochs, stop: Stop::Converged };
			}

			if correct == last_correct {
				unchanged += 1;
			} else {
				unchanged = 0;
			}

			if unchanged >= self.stall_epochs {
				warn!("No change in {} epochs, stopping after {} epochs", unchanged, epochs);
				return Training { model, epochs, stop: Stop::Stalled };
			}

			if epochs >= self.max_epochs {
				return Training { model, epochs, stop: Stop::EpochLimit };
			}

			last_correct = correct;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::dataset::Builder;
	use rand::rngs::StdRng;
	use rand::SeedableRng;

	fn builder(rows: &[(&[f64], Class)]) -> Builder<Class> {
		let mut builder = Builder::new();
		for (x, y) in rows {
			builder.add(x, *y).unwrap();
		}
		builder
	}

	#[test]
	fn separable_data_converges() {
		let data = builder(&[(&[0.0, 0.0], Class::Negative), (&[10.0, 10.0], Class::Positive)]);
		let mut rng = StdRng::seed_from_u64(3);

		let training = PerceptronBuilder::default().fit_random(&mut rng, &data.build());

		assert_eq!(training.stop, Stop::Converged);
		assert!(training.epochs < 5000);
		assert_eq!(data.build().evaluate(&training.model), 1.0);
		assert!(training.model.weights.iter().sum::<f64>() > 0.0);
		assert!(training.model.threshold < 0.0);
	}

	#[test]
	fn contradictory_rows_never_converge() {
		let data = builder(&[(&[1.0, 2.0], Class::Positive), (&[1.0, 2.0], Class::Negative)]);
		let mut rng = StdRng::seed_from_u64(11);

		let training = PerceptronBuilder::default().fit_random(&mut rng, &data.build());

		assert_eq!(training.stop, Stop::Stalled);
		assert!(training.epochs >= 100 && training.epochs < 5000);
	}

	#[test]
	fn epoch_limit_applies_without_stall() {
		let data = builder(&[(&[1.0], Class::Positive), (&[1.0], Class::Negative)]);
		let builder = PerceptronBuilder { max_epochs: 50, stall_epochs: usize::MAX };

		let training = builder.fit(Perceptron::new(vec![0.5], 0.0), &data.build());

		assert_eq!(training.stop, Stop::EpochLimit);
		assert_eq!(training.epochs, 50);
	}

	#[test]
	fn stall_count_restarts_when_correct_count_changes() {
		// Correct counts run 1, 1, 1, then 0 forever: the run of three
		// repeats only starts again at epoch 4.
		let data = builder(&[(&[1.0], Class::Positive), (&[1.0], Class::Negative)]);
		let builder = PerceptronBuilder { max_epochs: 5000, stall_epochs: 3 };

		let training = builder.fit(Perceptron::new(vec![4.5], 0.0), &data.build());

		assert_eq!(training.stop, Stop::Stalled);
		assert_eq!(training.epochs, 7);
	}

	#[test]
	fn mistakes_shift_the_model() {
		let data = builder(&[(&[2.0, -1.0], Class::Positive)]);
		let builder = PerceptronBuilder { max_epochs: 1, ..PerceptronBuilder::default() };

		let training = builder.fit(Perceptron::new(vec![0.0, 0.0], -1.0), &data.build());

		assert_eq!(training.model, Perceptron::new(vec![2.0, -1.0], 0.0));
		assert_eq!(training.stop, Stop::EpochLimit);
	}

	#[test]
	fn zero_output_is_positive() {
		let model = Perceptron::new(vec![1.0, -1.0], 0.0);

		assert_eq!(model.predict(&[3.0, 3.0]), Class::Positive);
		assert_eq!(model.predict(&[3.0, 3.5]), Class::Negative);
	}

	#[test]
	fn empty_dataset_trains_zero_epochs() {
		let data: Builder<Class> = Builder::new();
		let training = PerceptronBuilder::default().fit(Perceptron::new(vec![], 0.5), &data.build());

		assert_eq!((training.epochs, training.stop), (0, Stop::Converged));
	}

	#[test]
	fn random_models_stay_in_unit_interval() {
		let mut rng = StdRng::seed_from_u64(0);
		let model = Perceptron::random(&mut rng, 34);

		assert_eq!(model.weights.len(), 34);
		assert!(model.weights.iter().chain(Some(&model.threshold)).all(|w| (-1.0..=1.0).contains(w)));
	}

	#[test]
	fn same_seed_same_training() {
		let data = builder(&[
			(&[0.2, 0.9], Class::Positive),
			(&[0.8, 0.1], Class::Negative),
			(&[0.3, 0.7], Class::Positive),
			(&[0.9, 0.3], Class::Negative),
		]);

		let a = PerceptronBuilder::default().fit_random(&mut StdRng::seed_from_u64(5), &data.build());
		let b = PerceptronBuilder::default().fit_random(&mut StdRng::seed_from_u64(5), &data.build());

		assert_eq!(a.model, b.model);
		assert_eq!(a.epochs, b.epochs);
	}

	#[test]
	fn labels_map_symbols() {
		let labels = Labels::default();

		assert_eq!(labels.parse("g"), Some(Class::Positive));
		assert_eq!(labels.parse("b"), Some(Class::Negative));
		assert_eq!(labels.parse("x"), None);
	}
}

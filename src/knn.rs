use log::{debug, warn};
use ordered_float::OrderedFloat;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::classifier::Classifier;
use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::functions::most_frequent;

/// What to do with an attribute that is constant over the training data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZeroRange {
	/// Leave the attribute out of the distance.
	Skip,
	/// Fail with [`Error::ZeroRange`].
	Reject,
}

pub struct KnnBuilder {
	pub k: usize,
	pub folds: usize,
	pub zero_range: ZeroRange,
}

impl Default for KnnBuilder {
	fn default() -> Self {
		Self {
			k: 3,
			folds: 5,
			zero_range: ZeroRange::Skip,
		}
	}
}

impl KnnBuilder {
	/// Remembers the training rows and their per attribute ranges.
	pub fn fit<'a>(&self, training: Dataset<'a, f64>) -> Result<KnnClassifier<'a>> {
		if self.k == 0 {
			return Err(Error::InvalidNeighbours);
		}

		if training.is_empty() {
			return Err(Error::EmptyDataset);
		}

		let ranges = training.ranges();

		for (column, _) in ranges.iter().enumerate().filter(|(_, &range)| range == 0.0) {
			match self.zero_range {
				ZeroRange::Skip => warn!("Attribute {} is constant in the training data, leaving it out of the distance", column),
				ZeroRange::Reject => return Err(Error::ZeroRange { column }),
			}
		}

		Ok(KnnClassifier {
			training,
			ranges,
			k: self.k,
		})
	}

	/// Pools `dataset` into `self.folds` stride folds, visits them in a
	/// shuffled order holding each one out in turn, and returns the mean
	/// held out accuracy.
	pub fn cross_validate<R: Rng + ?Sized>(&self, rng: &mut R, dataset: &Dataset<f64>) -> Result<f64> {
		let rows = dataset.rows_len();
		if self.folds < 2 || self.folds > rows {
			return Err(Error::InvalidFolds { folds: self.folds, rows });
		}

		let mut folds = dataset.folds(self.folds);
		folds.shuffle(rng);

		let mut accuracies = Vec::with_capacity(folds.len());

		for (i, test) in folds.iter().enumerate() {
			let mut train = test.empty();
			for (_, fold) in folds.iter().enumerate().filter(|&(j, _)| j != i) {
				train.extend(fold);
			}

			let classifier = self.fit(train)?;
			let accuracy = test.evaluate(&classifier);
			debug!("Fold {} ({} rows): {:.1}%", i + 1, test.rows_len(), accuracy * 100.0);

			accuracies.push(accuracy);
		}

		Ok(accuracies.iter().sum::<f64>() / accuracies.len() as f64)
	}
}

/// Range normalised euclidean distance. Attributes with a zero range are
/// left out.
pub fn distance(a: &[f64], b: &[f64], ranges: &[f64]) -> f64 {
	a.iter()
		.zip(b)
		.zip(ranges)
		.filter(|(_, &range)| range != 0.0)
		.map(|((x, y), range)| (x - y).powi(2) / range.powi(2))
		.sum::<f64>()
		.sqrt()
}

pub struct KnnClassifier<'a> {
	training: Dataset<'a, f64>,
	ranges: Vec<f64>,
	k: usize,
}

impl KnnClassifier<'_> {
	pub fn ranges(&self) -> &[f64] {
		&self.ranges
	}

	/// The `k` closest `(distance, label)` pairs, closest first. Equal
	/// distances keep the training order.
	pub fn neighbours(&self, x: &[f64]) -> Vec<(f64, f64)> {
		let mut distances = self.training
			.rows()
			.zip(self.training.targets())
			.map(|(row, &y)| (distance(x, &row, &self.ranges), y))
			.collect::<Vec<_>>();

		distances.sort_by_key(|&(d, _)| OrderedFloat(d));
		distances.truncate(self.k);

		distances
	}
}

impl Classifier<f64> for KnnClassifier<'_> {
	/// Majority label of the nearest neighbours, rounded to an integer with
	/// halves going to the even neighbour.
	fn predict(&self, x: &[f64]) -> f64 {
		most_frequent(self.neighbours(x).into_iter().map(|(_, y)| OrderedFloat(y)))
			.map_or(f64::NAN, |(y, _)| y.into_inner().round_ties_even())
	}

	fn matches(&self, predicted: &f64, target: &f64) -> bool {
		*predicted == target.round_ties_even()
	}
}

//! The plain text reports the binaries print.

use std::io::{self, Write};

use crate::decision_tree::DecisionTree;
use crate::perceptron::Training;

/// `part / whole` as a percentage, `0.0` when `whole` is zero.
pub fn percent(part: usize, whole: usize) -> f64 {
	if whole == 0 {
		0.0
	} else {
		part as f64 / whole as f64 * 100.0
	}
}

/// Test set predictions of a KNN run. The accuracy line keeps a space
/// before the newline.
pub fn knn_test<W: Write>(writer: &mut W, k: usize, predictions: &[f64], correct: usize) -> io::Result<()> {
	writeln!(writer, "when k = {}:", k)?;
	writeln!(
		writer,
		"Predictions for test data: {:?}",
		predictions.iter().map(|&y| y as i64).collect::<Vec<_>>()
	)?;
	writeln!(writer, "Accuracy: {:.1}% ", percent(correct, predictions.len()))
}

/// `accuracy` is a fraction.
pub fn knn_cross_validation<W: Write>(writer: &mut W, folds: usize, accuracy: f64) -> io::Result<()> {
	writeln!(writer, "Accuracy with {}-fold cross validation: {:.1}% ", folds, accuracy * 100.0)
}

pub fn perceptron<W: Write>(writer: &mut W, max_epochs: usize, training: &Training, correct: usize, total: usize) -> io::Result<()> {
	writeln!(writer, "Number of iterations (maximum {}): {}", max_epochs, training.epochs)?;
	writeln!(writer, "Number of correctly classified instances: {} out of {} instances.", correct, total)?;
	writeln!(writer, "Number of incorrectly classified instances: {} out of {} instances.", total - correct, total)?;
	writeln!(writer, "Classification accuracy: {:.1}%", percent(correct, total))?;
	writeln!(writer, "Weights: {:?}", training.model.weights)?;
	writeln!(writer, "Threshold (w0): {:?}", training.model.threshold)
}

pub fn perceptron_split<W: Write>(writer: &mut W, train: usize, test: usize) -> io::Result<()> {
	writeln!(writer, "{}", "-".repeat(50))?;
	writeln!(writer, "SPLITTING THE DATA INTO TRAINING AND TEST SETS:")?;
	writeln!(writer, "Number of training instances: {}", train)?;
	writeln!(writer, "Number of test instances: {}", test)
}

pub fn decision_tree<W: Write>(writer: &mut W, tree: &DecisionTree, names: &[String]) -> io::Result<()> {
	writeln!(writer, "Trained tree:")?;
	tree.write(writer, names)?;
	writeln!(writer, "Baseline category: {}", tree.baseline().0)
}

/// Accuracies are fractions.
pub fn decision_tree_test<W: Write>(
	writer: &mut W,
	predicted: &[String],
	actual: &[String],
	accuracy: f64,
	baseline_accuracy: f64,
) -> io::Result<()> {
	writeln!(writer, "Predicted categories: [{}]", predicted.join(", "))?;
	writeln!(writer, "Actual categories: [{}]", actual.join(", "))?;
	writeln!(writer, "Accuracy: {:.1}%", accuracy * 100.0)?;
	writeln!(writer, "Baseline Accuracy: {:.1}%", baseline_accuracy * 100.0)
}

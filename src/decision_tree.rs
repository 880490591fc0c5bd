use std::io::Write;

use log::debug;

use crate::classifier::Classifier;
use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::functions::{gini, most_frequent};
use crate::node::Node;

struct NodeBuilder {
	// Leaf for branches that no training row reaches.
	fallback: Node,
}

impl NodeBuilder {
	fn build(&self, dataset: &Dataset<String>, attributes: &[usize]) -> Node {
		let (category, count) = match most_frequent(dataset.targets()) {
			Some(majority) => majority,
			None => return self.fallback.clone(),
		};

		if count == dataset.rows_len() {
			return Node::Leaf { category: category.clone(), probability: 1.0 };
		}

		if attributes.is_empty() {
			return Node::Leaf {
				category: category.clone(),
				probability: count as f64 / dataset.rows_len() as f64,
			};
		}

		let mut best: Option<(usize, f64, Dataset<String>, Dataset<String>)> = None;

		for &attribute in attributes {
			let (if_true, if_false) = dataset.partition(attribute, |x| x != 0.0);

			let ratio_t = if_true.rows_len() as f64 / dataset.rows_len() as f64;
			let ratio_f = 1.0 - ratio_t;
			let impurity = ratio_t * gini(if_true.targets()) + ratio_f * gini(if_false.targets());

			if best.as_ref().map_or(true, |(_, lowest, _, _)| impurity < *lowest) {
				best = Some((attribute, impurity, if_true, if_false));
			}
		}

		match best {
			Some((attribute, _, if_true, if_false)) => {
				let remaining = attributes
					.iter()
					.copied()
					.filter(|&a| a != attribute)
					.collect::<Vec<_>>();

				Node::Children {
					attribute,
					if_true: Box::new(self.build(&if_true, &remaining)),
					if_false: Box::new(self.build(&if_false, &remaining)),
				}
			},
			None => Node::Leaf { category: category.clone(), probability: 1.0 },
		}
	}
}

pub struct DecisionTree {
	root: Node,
	baseline: String,
}

impl DecisionTree {
	pub fn root(&self) -> &Node {
		&self.root
	}

	/// Most common category of the training data.
	pub fn baseline(&self) -> Baseline {
		Baseline(self.baseline.clone())
	}

	pub fn write<W: Write>(&self, writer: &mut W, names: &[String]) -> std::io::Result<()> {
		self.root.write(writer, names)
	}
}

impl Classifier<String> for DecisionTree {
	fn predict(&self, x: &[f64]) -> String {
		self.root.predict(x).to_string()
	}
}

/// Predicts one category for everything.
pub struct Baseline(pub String);

impl Classifier<String> for Baseline {
	fn predict(&self, _: &[f64]) -> String {
		self.0.clone()
	}
}

#[derive(Default)]
pub struct DecisionTreeBuilder;

impl DecisionTreeBuilder {
	/// Grows a tree over boolean attributes, splitting on the attribute
	/// with the lowest weighted gini impurity. Each attribute is used at
	/// most once per path.
	pub fn fit(&self, dataset: &Dataset<String>) -> Result<DecisionTree> {
		let (baseline, count) = most_frequent(dataset.targets()).ok_or(Error::EmptyDataset)?;

		let fallback = Node::Leaf {
			category: baseline.clone(),
			probability: count as f64 / dataset.rows_len() as f64,
		};

		let attributes = (0..dataset.features_len()).collect::<Vec<_>>();
		let root = (NodeBuilder { fallback }).build(dataset, &attributes);

		debug!("Built tree of depth {}", root.depth());

		Ok(DecisionTree {
			root,
			baseline: baseline.clone(),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::dataset::Builder;

	fn builder(rows: &[(&[f64], &str)]) -> Builder<String> {
		let mut builder = Builder::new();
		for (x, y) in rows {
			builder.add(x, y.to_string()).unwrap();
		}
		builder
	}

	#[test]
	fn splits_on_the_informative_attribute() {
		let data = builder(&[
			(&[1.0, 0.0], "live"),
			(&[0.0, 0.0], "live"),
			(&[1.0, 1.0], "die"),
			(&[0.0, 1.0], "die"),
		]);
		let tree = DecisionTreeBuilder::default().fit(&data.build()).unwrap();

		match tree.root() {
			Node::Children { attribute, .. } => assert_eq!(*attribute, 1),
			other => panic!("expected a split, got {:?}", other),
		}
		assert_eq!(data.build().evaluate(&tree), 1.0);
	}

	#[test]
	fn pure_data_is_a_single_leaf() {
		let data = builder(&[(&[1.0], "live"), (&[0.0], "live")]);
		let tree = DecisionTreeBuilder::default().fit(&data.build()).unwrap();

		assert_eq!(tree.root(), &Node::Leaf { category: "live".to_string(), probability: 1.0 });
	}

	#[test]
	fn exhausted_attributes_give_majority_leaf() {
		let data = builder(&[
			(&[1.0], "die"),
			(&[1.0], "live"),
			(&[1.0], "die"),
			(&[0.0], "live"),
		]);
		let tree = DecisionTreeBuilder::default().fit(&data.build()).unwrap();

		match tree.root() {
			Node::Children { if_true, if_false, .. } => {
				let majority = Node::Leaf { category: "die".to_string(), probability: 2.0 / 3.0 };
				assert_eq!(**if_true, majority);
				assert_eq!(**if_false, Node::Leaf { category: "live".to_string(), probability: 1.0 });
			},
			other => panic!("expected a split, got {:?}", other),
		}
	}

	#[test]
	fn unreached_branch_uses_training_majority() {
		// Attribute 0 is always true, so splitting on it leaves the false branch empty.
		let data = builder(&[
			(&[1.0, 0.0], "a"),
			(&[1.0, 1.0], "b"),
			(&[1.0, 0.0], "b"),
		]);
		let tree = DecisionTreeBuilder::default().fit(&data.build()).unwrap();

		assert_eq!(tree.baseline().0, "b");
		assert_eq!(tree.predict(&[1.0, 1.0]), "b");
		assert_eq!(tree.predict(&[1.0, 0.0]), "a");
		assert_eq!(tree.predict(&[0.0, 0.0]), "b");
	}

	#[test]
	fn grows_until_leaves_are_pure() {
		let data = builder(&[
			(&[1.0, 1.0], "a"),
			(&[1.0, 0.0], "b"),
			(&[0.0, 1.0], "b"),
			(&[0.0, 0.0], "a"),
		]);

		let tree = DecisionTreeBuilder::default().fit(&data.build()).unwrap();
		assert_eq!(tree.root().depth(), 2);
		assert_eq!(data.build().evaluate(&tree), 1.0);
	}

	#[test]
	fn baseline_scores_its_share() {
		let data = builder(&[(&[1.0], "a"), (&[1.0], "b"), (&[0.0], "a")]);
		let tree = DecisionTreeBuilder::default().fit(&data.build()).unwrap();

		assert_eq!(data.build().evaluate(&tree.baseline()), 2.0 / 3.0);
	}

	#[test]
	fn empty_training_is_an_error() {
		let data: Builder<String> = Builder::new();

		assert!(matches!(DecisionTreeBuilder::default().fit(&data.build()), Err(Error::EmptyDataset)));
	}
}

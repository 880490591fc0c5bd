//! Classic supervised learners over small whitespace separated datasets:
//! k nearest neighbours with k-fold cross validation, a single layer
//! perceptron and a decision tree over boolean attributes.

pub mod classifier;
pub mod cli;
pub mod data;
pub mod dataset;
pub mod decision_tree;
pub mod error;
pub mod functions;
pub mod knn;
pub mod node;
pub mod perceptron;
pub mod report;

pub use error::{Error, Result};

pub trait Classifier<L> {
	fn predict(&self, x: &[f64]) -> L;

	/// Whether a prediction counts as correct for the given target.
	fn matches(&self, predicted: &L, target: &L) -> bool
	where
		L: PartialEq,
	{
		predicted == target
	}
}

use std::collections::HashMap;
use std::hash::Hash;

pub fn histogram<L: Hash + Eq>(values: impl Iterator<Item = L>) -> (HashMap<L, usize>, usize) {
	let mut histogram = HashMap::new();
	let mut len = 0;

	for value in values {
		*histogram.entry(value).or_default() += 1;
		len += 1;
	}

	(histogram, len)
}

pub fn gini_val<L>(histogram: &HashMap<L, usize>, len: usize) -> f64 {
	if len == 0 {
		return 0.0;
	}

	1.0 - histogram
		.iter()
		.map(|(_, &n)| (n as f64 / len as f64).powi(2))
		.sum::<f64>()
}

pub fn gini<L: Hash + Eq>(values: impl Iterator<Item = L>) -> f64 {
	let (histogram, len) = histogram(values);
	gini_val(&histogram, len)
}

/// Most frequent value and its count. On a tie the value seen first wins.
pub fn most_frequent<L: PartialEq>(values: impl Iterator<Item = L>) -> Option<(L, usize)> {
	// Insertion ordered, so a plain scan keeps the first maximum.
	let mut counts: Vec<(L, usize)> = Vec::new();

	for value in values {
		match counts.iter().position(|(v, _)| *v == value) {
			Some(i) => counts[i].1 += 1,
			None => counts.push((value, 1)),
		}
	}

	let mut best: Option<(L, usize)> = None;
	for (value, n) in counts {
		if best.as_ref().map_or(true, |&(_, m)| n > m) {
			best = Some((value, n));
		}
	}

	best
}

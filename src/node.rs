use std::io::Write;

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
	Leaf {
		category: String,
		probability: f64,
	},
	Children {
		attribute: usize,
		if_true: Box<Node>,
		if_false: Box<Node>,
	},
}

impl Node {
	pub fn predict(&self, x: &[f64]) -> &str {
		match &self {
			Node::Leaf { category, .. } => category,
			Node::Children { attribute, if_true, if_false } => {
				if x[*attribute] != 0.0 {
					if_true.predict(x)
				} else {
					if_false.predict(x)
				}
			},
		}
	}

	pub fn depth(&self) -> usize {
		match &self {
			Node::Leaf { .. } => 0,
			Node::Children { if_true, if_false, .. } => 1 + if_true.depth().max(if_false.depth()),
		}
	}

	/// Writes the tree one node per line, three spaces per level. Questions
	/// end in `?`, leaves carry their probability.
	pub fn write<W: Write>(&self, writer: &mut W, names: &[String]) -> std::io::Result<()> {
		self.write_indented(writer, names, 0, "")
	}

	fn write_indented<W: Write>(&self, writer: &mut W, names: &[String], indent: usize, decision: &str) -> std::io::Result<()> {
		write!(writer, "{}{}", "   ".repeat(indent), decision)?;

		match &self {
			Node::Leaf { category, probability } => {
				writeln!(writer, "{}. probability = {:?}", category, probability)?;
			},
			Node::Children { attribute, if_true, if_false } => {
				match names.get(*attribute) {
					Some(name) => writeln!(writer, "{}?", name)?,
					None => writeln!(writer, "attribute {}?", attribute)?,
				}

				if_true.write_indented(writer, names, indent + 1, "True: ")?;
				if_false.write_indented(writer, names, indent + 1, "False: ")?;
			}
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn leaf(category: &str, probability: f64) -> Box<Node> {
		Box::new(Node::Leaf { category: category.to_string(), probability })
	}

	fn tree() -> Node {
		Node::Children {
			attribute: 1,
			if_true: leaf("live", 1.0),
			if_false: Box::new(Node::Children {
				attribute: 0,
				if_true: leaf("die", 0.75),
				if_false: leaf("live", 1.0),
			}),
		}
	}

	#[test]
	fn predict_follows_branches() {
		let tree = tree();

		assert_eq!(tree.predict(&[0.0, 1.0]), "live");
		assert_eq!(tree.predict(&[1.0, 0.0]), "die");
		assert_eq!(tree.predict(&[0.0, 0.0]), "live");
		assert_eq!(tree.depth(), 2);
	}

	#[test]
	fn write_indents_by_depth() {
		let names = vec!["ascites".to_string(), "spiders".to_string()];
		let mut out = Vec::new();
		tree().write(&mut out, &names).unwrap();

		assert_eq!(
			String::from_utf8(out).unwrap(),
			"spiders?\n   True: live. probability = 1.0\n   False: ascites?\n      True: die. probability = 0.75\n      False: live. probability = 1.0\n"
		);
	}
}

use std::fmt::{self, Display};

///
/// Ancestry composition of a profile.
///
/// The root node is the "Total" composition; each node's `sub_populations`
/// partition its assigned proportion into narrower populations, to any depth.
/// Leaves have no sub populations.
///
#[derive(PartialEq, Debug, Clone, Default)]
pub struct Ancestry {
    pub profile_id: String,
    pub label: String,
    pub proportion: f64,
    pub unassigned: f64,
    pub sub_populations: Vec<Ancestry>,
}

impl Ancestry {
    pub fn new<S: Into<String>, L: Into<String>>(
        profile_id: S,
        label: L,
        proportion: f64,
        unassigned: f64,
        sub_populations: Vec<Ancestry>,
    ) -> Self {
        Ancestry {
            profile_id: profile_id.into(),
            label: label.into(),
            proportion,
            unassigned,
            sub_populations,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.sub_populations.is_empty()
    }

    ///
    /// Number of levels in the tree rooted at this node. A leaf has depth 1.
    ///
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, level)) = stack.pop() {
            depth = depth.max(level);
            stack.extend(node.sub_populations.iter().map(|child| (child, level + 1)));
        }
        depth
    }

    ///
    /// Find the first node with the given label, depth first, including this node.
    ///
    pub fn find(&self, label: &str) -> Option<&Ancestry> {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.label == label {
                return Some(node);
            }
            stack.extend(node.sub_populations.iter().rev());
        }
        None
    }
}

impl Display for Ancestry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}",
            self.label, self.proportion, self.unassigned
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn tree() -> Ancestry {
        let french = Ancestry::new("p1", "French", 0.3, 0.0, vec![]);
        let german = Ancestry::new("p1", "German", 0.2, 0.0, vec![]);
        let northern = Ancestry::new("p1", "Northern European", 0.6, 0.1, vec![french, german]);
        let european = Ancestry::new("p1", "European", 0.9, 0.3, vec![northern]);
        Ancestry::new("p1", "Total", 1.0, 0.1, vec![european])
    }

    #[rstest]
    fn test_depth(tree: Ancestry) {
        assert_eq!(tree.depth(), 4);
        assert_eq!(tree.sub_populations[0].depth(), 3);
    }

    #[rstest]
    fn test_leaf_depth() {
        let leaf = Ancestry::new("p1", "Total", 1.0, 0.0, vec![]);
        assert!(leaf.is_leaf());
        assert_eq!(leaf.depth(), 1);
    }

    #[rstest]
    fn test_find(tree: Ancestry) {
        let german = tree.find("German").unwrap();
        assert_eq!(german.proportion, 0.2);
        assert!(german.is_leaf());
        assert!(tree.find("Oceanian").is_none());
    }
}

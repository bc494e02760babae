use std::collections::HashMap;

/// Returns the display label for a node index.
///
/// Labels follow spreadsheet-column style: `A` through `Z` for the first 26
/// indices, then `AA`, `AB` and so on, so node counts past 26 still get
/// unique labels.
pub fn label_for(index: usize) -> String {
    let mut label = Vec::new();
    let mut i = index;
    loop {
        label.push(b'A' + (i % 26) as u8);
        i /= 26;
        if i == 0 {
            break;
        }
        i -= 1;
    }
    label.reverse();
    // Only ASCII uppercase bytes are pushed above
    String::from_utf8(label).unwrap()
}

/// Bidirectional mapping between node labels and dense indices.
///
/// Built once per computation so that edge lists naming labels resolve in
/// constant time instead of scanning the alphabet per lookup.
#[derive(Debug, Clone)]
pub struct LabelMap {
    labels: Vec<String>,
    indices: HashMap<String, usize>,
}

impl LabelMap {
    /// Creates the label map for `node_count` sequentially labeled nodes.
    pub fn with_node_count(node_count: usize) -> Self {
        let labels: Vec<String> = (0..node_count).map(label_for).collect();
        let indices = labels
            .iter()
            .enumerate()
            .map(|(i, l)| (l.clone(), i))
            .collect();
        LabelMap { labels, indices }
    }

    /// Number of nodes covered by this map.
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Resolves a label to its node index, if the label names a node.
    pub fn resolve(&self, label: &str) -> Option<usize> {
        self.indices.get(label).copied()
    }

    /// Returns the label for a node index.
    ///
    /// Panics if `index` is out of range; callers hold indices that came
    /// from this map or from a matrix of the same node count.
    pub fn label(&self, index: usize) -> &str {
        &self.labels[index]
    }

    /// All labels in index order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

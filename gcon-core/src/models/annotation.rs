use serde::{Deserialize, Serialize};

/// A single `key=value` provenance note attached to a variant.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub key: String,
    pub value: String,
}

impl Annotation {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for Annotation {
    fn from((key, value): (K, V)) -> Self {
        Annotation::new(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_from_pair() {
        let annotations: Vec<Annotation> = vec![("rows", "1,2"), ("rows", "1,2")]
            .into_iter()
            .map(Annotation::from)
            .collect();

        // duplicates are kept as separate entries
        assert_eq!(annotations.len(), 2);
        assert_eq!(annotations[0], Annotation::new("rows", "1,2"));
        assert_eq!(annotations[0], annotations[1]);
    }
}

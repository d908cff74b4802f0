//! Single-qubit gate selection that never repeats a qubit's previous choice

/// Pick a tag in `0..alphabet_len` different from `previous`
///
/// With a previous tag the draw maps linearly onto the `alphabet_len - 1`
/// remaining tags in ascending order; without one it maps onto the whole
/// alphabet.
///
/// # Panics
/// Panics if `alphabet_len < 2`
///
/// # Example
/// ```
/// use qbench_circuits::chooser::choose;
///
/// assert_eq!(choose(None, 3, 0.9), 2);
/// assert_eq!(choose(Some(2), 3, 0.9), 1);
/// assert_eq!(choose(Some(0), 3, 0.1), 1);
/// ```
pub fn choose(previous: Option<u8>, alphabet_len: usize, draw: f64) -> u8 {
    assert!(alphabet_len >= 2, "No-repeat choice needs at least two gates");

    match previous {
        None => scale(draw, alphabet_len) as u8,
        Some(prev) => {
            let ordinal = scale(draw, alphabet_len - 1) as u8;
            if ordinal >= prev {
                ordinal + 1
            } else {
                ordinal
            }
        }
    }
}

#[inline]
fn scale(draw: f64, len: usize) -> usize {
    ((draw * len as f64) as usize).min(len - 1)
}

/// Per-qubit record of the tag each qubit must avoid next layer
///
/// Empty until the first layer completes; the first layer is unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GateTags {
    tags: Vec<u8>,
}

impl GateTags {
    /// Tags for a register with no history
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag `qubit` must avoid, if any layer has run
    #[inline]
    pub fn previous(&self, qubit: usize) -> Option<u8> {
        self.tags.get(qubit).copied()
    }

    /// Record `tag` for `qubit`
    ///
    /// Qubits are recorded in ascending order during the first layer, so the
    /// backing vector grows one entry at a time.
    pub fn record(&mut self, qubit: usize, tag: u8) {
        if qubit < self.tags.len() {
            self.tags[qubit] = tag;
        } else {
            self.tags.resize(qubit, 0);
            self.tags.push(tag);
        }
    }

    /// Whether any tag has been recorded
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_repeats() {
        for m in 2..=5usize {
            for prev in 0..m as u8 {
                for k in 0..100 {
                    let draw = k as f64 / 100.0;
                    let tag = choose(Some(prev), m, draw);
                    assert_ne!(tag, prev);
                    assert!((tag as usize) < m);
                }
            }
        }
    }

    #[test]
    fn test_unconstrained_covers_alphabet() {
        let tags: Vec<u8> = (0..4).map(|k| choose(None, 4, k as f64 / 4.0)).collect();
        assert_eq!(tags, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_candidates_in_ascending_order() {
        // alphabet {0, 1, 2} minus 1 leaves {0, 2}
        assert_eq!(choose(Some(1), 3, 0.2), 0);
        assert_eq!(choose(Some(1), 3, 0.7), 2);
        assert_eq!(choose(Some(1), 3, 1.0), 2);
    }

    #[test]
    fn test_gate_tags() {
        let mut tags = GateTags::new();
        assert!(tags.is_empty());
        assert_eq!(tags.previous(0), None);

        tags.record(0, 2);
        tags.record(1, 0);
        assert_eq!(tags.previous(0), Some(2));
        assert_eq!(tags.previous(1), Some(0));

        tags.record(0, 1);
        assert_eq!(tags.previous(0), Some(1));
        assert_eq!(tags.previous(2), None);
    }
}

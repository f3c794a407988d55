use super::event::TextDelta;

/// One block of streamed prose, e.g. the "Reliefs" advisory section.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFragment {
    pub kind: String,
    pub title: Option<String>,
    pub text: String,
    pub is_complete: bool,
}

impl TextFragment {
    /// Stable key for keyed list rendering; the same pair `apply` merges on.
    pub fn key(&self) -> (String, Option<String>) {
        (self.kind.clone(), self.title.clone())
    }
}

/// Fragments in arrival order, keyed by `(text_type, title)`.
///
/// The server resends the full text on every update, so an update for a known
/// key replaces that fragment's text in place instead of appending a new one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFragments {
    items: Vec<TextFragment>,
}

impl TextFragments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a delta; returns the index of the fragment it touched.
    pub fn apply(&mut self, delta: TextDelta) -> usize {
        let found = self
            .items
            .iter()
            .position(|f| f.kind == delta.text_type && f.title == delta.title);

        match found {
            Some(idx) => {
                let frag = &mut self.items[idx];
                frag.text = delta.text;
                // A finished fragment never reopens.
                frag.is_complete |= delta.is_complete;
                idx
            }
            None => {
                self.items.push(TextFragment {
                    kind: delta.text_type,
                    title: delta.title,
                    text: delta.text,
                    is_complete: delta.is_complete,
                });
                self.items.len() - 1
            }
        }
    }

    pub fn items(&self) -> &[TextFragment] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn all_complete(&self) -> bool {
        self.items.iter().all(|f| f.is_complete)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delta(kind: &str, title: Option<&str>, text: &str, done: bool) -> TextDelta {
        TextDelta {
            text_type: kind.into(),
            title: title.map(Into::into),
            text: text.into(),
            is_complete: done,
        }
    }

    #[test]
    fn test_cumulative_updates_replace() {
        let mut frags = TextFragments::new();
        assert_eq!(frags.apply(delta("summary", Some("Overview"), "You", false)), 0);
        assert_eq!(frags.apply(delta("summary", Some("Overview"), "You earn", false)), 0);
        assert_eq!(
            frags.apply(delta("summary", Some("Overview"), "You earn ₦4.8m", true)),
            0
        );

        assert_eq!(frags.len(), 1);
        assert_eq!(frags.items()[0].text, "You earn ₦4.8m");
        assert!(frags.all_complete());
    }

    #[test]
    fn test_compound_key_separates_fragments() {
        let mut frags = TextFragments::new();
        frags.apply(delta("advisory", Some("Reliefs"), "a", false));
        frags.apply(delta("advisory", Some("Pension"), "b", false));
        frags.apply(delta("summary", Some("Reliefs"), "c", false));
        frags.apply(delta("advisory", None, "d", false));
        assert_eq!(frags.apply(delta("advisory", Some("Reliefs"), "a2", true)), 0);

        let texts: Vec<&str> = frags.items().iter().map(|f| f.text.as_str()).collect();
        assert_eq!(texts, vec!["a2", "b", "c", "d"]);
        assert!(frags.items()[0].is_complete);
        assert!(!frags.all_complete());
        assert_ne!(frags.items()[0].key(), frags.items()[2].key());
    }

    #[test]
    fn test_completion_flag_is_sticky() {
        let mut frags = TextFragments::new();
        frags.apply(delta("summary", None, "done", true));
        frags.apply(delta("summary", None, "done.", false));
        assert!(frags.items()[0].is_complete);
        assert_eq!(frags.items()[0].text, "done.");

        frags.clear();
        assert!(frags.is_empty());
    }

    #[test]
    fn test_keys_stay_distinct() {
        let mut frags = TextFragments::new();
        frags.apply(delta("summary", None, "a", false));
        frags.apply(delta("summary", Some(""), "b", false));
        frags.apply(delta("summary::x", None, "c", false));
        frags.apply(delta("summary", Some("x"), "d", false));

        let keys: Vec<_> = frags.items().iter().map(TextFragment::key).collect();
        assert_eq!(keys.len(), 4);
        for (i, k) in keys.iter().enumerate() {
            assert!(!keys[i + 1..].contains(k), "duplicate key {:?}", k);
        }
    }
}

use colored::*;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// A translation entry that matched a search query.
#[derive(Debug, Clone)]
pub struct KeyHit<'a> {
    pub key: &'a str,
    pub value: &'a str,
    pub score: i64,
    /// Char positions of the match inside `key`; empty when only the value matched.
    pub key_indices: Vec<usize>,
}

/// fzf-style search over dictionary keys and their texts.
pub struct KeyMatcher {
    matcher: SkimMatcherV2,
}

impl KeyMatcher {
    pub fn new() -> Self {
        Self {
            matcher: SkimMatcherV2::default().ignore_case(),
        }
    }

    /// Score one entry. Ranking: whole key, key prefix, key substring, text
    /// substring, then fuzzy over the key.
    pub fn score(&self, pattern: &str, key: &str, value: &str) -> Option<(i64, Vec<usize>)> {
        if pattern.is_empty() {
            return Some((0, Vec::new()));
        }
        let pattern_lower = pattern.to_lowercase();
        let key_lower = key.to_lowercase();
        let span = |start: usize| -> Vec<usize> {
            let first = key_lower[..start].chars().count();
            (first..first + pattern_lower.chars().count()).collect()
        };

        if key_lower == pattern_lower {
            return Some((2000, span(0)));
        }
        if key_lower.starts_with(&pattern_lower) {
            return Some((1200 + pattern.len() as i64 * 8, span(0)));
        }
        if let Some(start) = key_lower.find(&pattern_lower) {
            return Some((1000 + pattern.len() as i64 * 10, span(start)));
        }
        if value.to_lowercase().contains(&pattern_lower) {
            return Some((600 + pattern.len() as i64 * 4, Vec::new()));
        }
        self.matcher.fuzzy_indices(key, pattern)
    }

    /// Matching entries, best first; ties go to the shorter key.
    pub fn search<'a, I>(&self, pattern: &str, entries: I) -> Vec<KeyHit<'a>>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut hits: Vec<KeyHit<'a>> = entries
            .into_iter()
            .filter_map(|(key, value)| {
                self.score(pattern, key, value).map(|(score, key_indices)| KeyHit {
                    key,
                    value,
                    score,
                    key_indices,
                })
            })
            .collect();

        hits.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.key.len().cmp(&b.key.len()))
                .then_with(|| a.key.cmp(b.key))
        });
        hits
    }

    /// Colour the matched characters of `text`.
    pub fn highlight(&self, text: &str, indices: &[usize]) -> String {
        if indices.is_empty() {
            return text.to_string();
        }
        text.chars()
            .enumerate()
            .map(|(i, c)| {
                if indices.contains(&i) {
                    c.to_string().red().bold().to_string()
                } else {
                    c.to_string()
                }
            })
            .collect()
    }
}

impl Default for KeyMatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRIES: &[(&str, &str)] = &[
        ("nav.home", "Home"),
        ("nav.contact", "Contact"),
        ("cta.button", "Contact Now"),
        ("footer.quicklinks.home", "Home"),
        ("hero.cta", "Free Marketing Consultation"),
    ];

    #[test]
    fn ranking() {
        let matcher = KeyMatcher::new();
        let hits = matcher.search("nav.home", ENTRIES.iter().copied());
        assert_eq!(hits[0].key, "nav.home");
        assert_eq!(hits[0].score, 2000);

        let hits = matcher.search("home", ENTRIES.iter().copied());
        let keys: Vec<&str> = hits.iter().map(|h| h.key).collect();
        assert_eq!(&keys[..2], ["nav.home", "footer.quicklinks.home"]);
    }

    #[test]
    fn value_text_matches_after_keys() {
        let matcher = KeyMatcher::new();
        let hits = matcher.search("consultation", ENTRIES.iter().copied());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].key, "hero.cta");
        assert!(hits[0].key_indices.is_empty());
    }

    #[test]
    fn fuzzy_and_no_match() {
        let matcher = KeyMatcher::new();
        assert!(matcher.score("ctbtn", "cta.button", "").is_some());
        assert!(matcher.score("zzz", "cta.button", "Contact Now").is_none());
        assert_eq!(matcher.search("", ENTRIES.iter().copied()).len(), ENTRIES.len());
    }

    #[test]
    fn highlight_marks_matched_chars() {
        colored::control::set_override(true);
        let matcher = KeyMatcher::new();
        let (_, indices) = matcher.score("home", "nav.home", "").unwrap();
        assert_eq!(indices, vec![4, 5, 6, 7]);
        let highlighted = matcher.highlight("nav.home", &indices);
        assert!(highlighted.starts_with("nav."));
        assert!(highlighted.contains("\x1b["));
        assert_eq!(matcher.highlight("nav", &[]), "nav");
    }
}

/// How long each tagline stays on screen.
pub const TAGLINE_INTERVAL_MS: u64 = 2000;

/// Cycles through a fixed list of phrases, wrapping around at the end.
///
/// Also usable as an endless iterator yielding the phrase shown after each
/// tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tagline {
    phrases: &'static [&'static str],
    index: usize,
}

impl Tagline {
    pub fn new(phrases: &'static [&'static str]) -> Self {
        Self { phrases, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &'static str {
        self.phrases.get(self.index).copied().unwrap_or_default()
    }

    pub fn advance(&mut self) {
        if !self.phrases.is_empty() {
            self.index = (self.index + 1) % self.phrases.len();
        }
    }
}

impl Iterator for Tagline {
    type Item = &'static str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.phrases.is_empty() {
            return None;
        }
        self.advance();
        Some(self.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static FOUR: [&str; 4] = ["one", "two", "three", "four"];

    #[test]
    fn test_wraps_after_full_cycle() {
        let mut tagline = Tagline::new(&FOUR);
        assert_eq!(tagline.current(), "one");
        for _ in 0..3 {
            tagline.advance();
        }
        assert_eq!(tagline.index(), 3);
        assert_eq!(tagline.current(), "four");
        tagline.advance();
        assert_eq!(tagline.index(), 0);
        assert_eq!(tagline.current(), "one");
    }

    #[test]
    fn test_iterator_is_endless() {
        let shown = Tagline::new(&FOUR).take(6).collect::<Vec<_>>();
        assert_eq!(shown, vec!["two", "three", "four", "one", "two", "three"]);
    }

    #[test]
    fn test_restart_begins_at_first_phrase() {
        let mut tagline = Tagline::new(&FOUR);
        tagline.advance();
        tagline.advance();
        assert_eq!(Tagline::new(&FOUR).current(), "one");
    }

    #[test]
    fn test_empty_list() {
        let mut tagline = Tagline::new(&[]);
        tagline.advance();
        assert_eq!(tagline.current(), "");
        assert_eq!(tagline.next(), None);
    }
}

use std::time::Duration;

pub const TYPING_INTERVAL: Duration = Duration::from_millis(100);
pub const DELETING_INTERVAL: Duration = Duration::from_millis(50);
pub const PAUSE_INTERVAL: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    /// Full phrase shown, waiting before deleting.
    Pausing,
    Deleting,
}

/// Cycles through `phrases`, typing each one out and deleting it again.
///
/// Driven by a single timer: wait [`Typewriter::delay`], then call [`Typewriter::tick`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    phrases: &'static [&'static str],
    index: usize,
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new(phrases: &'static [&'static str]) -> Self {
        Self {
            phrases,
            index: 0,
            shown: 0,
            phase: Phase::Typing,
        }
    }

    /// Starts with the first phrase fully typed, as rendered before any timer runs.
    pub fn showing_first(phrases: &'static [&'static str]) -> Self {
        let mut tw = Self::new(phrases);
        tw.shown = tw.phrase_len();
        tw.phase = Phase::Pausing;
        tw
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn index(&self) -> usize {
        self.index
    }

    fn phrase(&self) -> &'static str {
        self.phrases.get(self.index).copied().unwrap_or_default()
    }

    fn phrase_len(&self) -> usize {
        self.phrase().chars().count()
    }

    /// Currently displayed prefix of the phrase.
    pub fn text(&self) -> &'static str {
        let phrase = self.phrase();
        let end = phrase
            .char_indices()
            .nth(self.shown)
            .map(|(i, _)| i)
            .unwrap_or(phrase.len());
        &phrase[..end]
    }

    /// How long to wait before the next tick.
    pub fn delay(&self) -> Duration {
        match self.phase {
            Phase::Typing => TYPING_INTERVAL,
            Phase::Pausing => PAUSE_INTERVAL,
            Phase::Deleting => DELETING_INTERVAL,
        }
    }

    pub fn tick(&mut self) {
        if self.phrases.is_empty() {
            return;
        }
        match self.phase {
            Phase::Typing => {
                let len = self.phrase_len();
                if self.shown < len {
                    self.shown += 1;
                }
                if self.shown >= len {
                    self.phase = Phase::Pausing;
                }
            }
            Phase::Pausing => self.phase = Phase::Deleting,
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.index = (self.index + 1) % self.phrases.len();
                    self.phase = Phase::Typing;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHRASES: &[&str] = &["ab", "xyz", "é☕"];

    #[test]
    fn test_types_one_char_per_tick() {
        let mut tw = Typewriter::new(PHRASES);
        assert_eq!(tw.text(), "");
        assert_eq!(tw.delay(), TYPING_INTERVAL);
        tw.tick();
        assert_eq!(tw.text(), "a");
        assert_eq!(tw.phase(), Phase::Typing);
        tw.tick();
        assert_eq!(tw.text(), "ab");
        assert_eq!(tw.phase(), Phase::Pausing);
        assert_eq!(tw.delay(), PAUSE_INTERVAL);
    }

    #[test]
    fn test_pause_then_delete() {
        let mut tw = Typewriter::new(PHRASES);
        tw.tick();
        tw.tick();
        tw.tick();
        assert_eq!(tw.phase(), Phase::Deleting);
        // pausing does not remove anything
        assert_eq!(tw.text(), "ab");
        assert_eq!(tw.delay(), DELETING_INTERVAL);
        tw.tick();
        assert_eq!(tw.text(), "a");
        tw.tick();
        assert_eq!(tw.text(), "");
        assert_eq!(tw.phase(), Phase::Typing);
        assert_eq!(tw.index(), 1);
    }

    #[test]
    fn test_never_exceeds_phrase_and_empties_before_switching() {
        let mut tw = Typewriter::new(PHRASES);
        let mut prev_index = tw.index();
        let mut prev_len = 0;
        for _ in 0..500 {
            tw.tick();
            let len = tw.text().chars().count();
            assert!(len <= PHRASES[tw.index()].chars().count());
            if tw.index() != prev_index {
                // switched phrase: last shown text was a single char, now empty
                assert_eq!(prev_len, 1);
                assert_eq!(len, 0);
            }
            prev_index = tw.index();
            prev_len = len;
        }
    }

    #[test]
    fn test_cycles_in_order_and_wraps() {
        let mut tw = Typewriter::new(PHRASES);
        let mut seen = vec![tw.index()];
        while seen.len() < 7 {
            tw.tick();
            if *seen.last().unwrap() != tw.index() {
                seen.push(tw.index());
            }
        }
        assert_eq!(seen, vec![0, 1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn test_multibyte_phrase() {
        let mut tw = Typewriter::new(PHRASES);
        while tw.index() != 2 {
            tw.tick();
        }
        tw.tick();
        assert_eq!(tw.text(), "é");
        tw.tick();
        assert_eq!(tw.text(), "é☕");
        assert_eq!(tw.phase(), Phase::Pausing);
    }

    #[test]
    fn test_showing_first_pauses_then_deletes() {
        let mut tw = Typewriter::showing_first(PHRASES);
        assert_eq!(tw.text(), "ab");
        assert_eq!(tw.phase(), Phase::Pausing);
        assert_eq!(tw.delay(), PAUSE_INTERVAL);
        tw.tick();
        tw.tick();
        assert_eq!(tw.text(), "a");
        tw.tick();
        assert_eq!(tw.text(), "");
        assert_eq!(tw.index(), 1);
    }

    #[test]
    fn test_empty_phrase_list_is_inert() {
        let mut tw = Typewriter::new(&[]);
        tw.tick();
        assert_eq!(tw.text(), "");
        assert_eq!(tw.phase(), Phase::Typing);
    }

    #[test]
    fn test_empty_phrase_skips_to_pause() {
        let mut tw = Typewriter::new(&["", "a"]);
        tw.tick();
        assert_eq!(tw.phase(), Phase::Pausing);
        tw.tick();
        tw.tick();
        assert_eq!(tw.index(), 1);
    }
}

//! Typing-speed trainer.
//!
//! The test runs against a fixed reference paragraph. The clock starts on
//! the first keystroke and stops the moment the input is as long as the
//! reference; the input is never checked to be a prefix of the reference.

use chrono::{DateTime, Utc};

use crate::constants::{CHARS_PER_WORD, MIN_ELAPSED_MS, TYPING_PARAGRAPH};

/// Live feedback for one reference character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharStatus {
    Untyped,
    Correct,
    Incorrect,
}

#[derive(Debug, Clone)]
pub struct TypingTest {
    reference: Vec<char>,
    input: Vec<char>,
    started_at: Option<DateTime<Utc>>,
    finished_at: Option<DateTime<Utc>>,
}

impl TypingTest {
    pub fn new() -> Self {
        Self::with_reference(TYPING_PARAGRAPH)
    }

    pub fn with_reference(reference: &str) -> Self {
        Self {
            reference: reference.chars().collect(),
            input: Vec::new(),
            started_at: None,
            finished_at: None,
        }
    }

    pub fn reference(&self) -> String {
        self.reference.iter().collect()
    }

    pub fn input(&self) -> String {
        self.input.iter().collect()
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    pub fn is_complete(&self) -> bool {
        self.finished_at.is_some()
    }

    /// Replace the accumulated input with the current text box contents.
    ///
    /// Returns `true` once the test is complete. Further updates after
    /// completion are ignored.
    pub fn update(&mut self, input: &str, now: DateTime<Utc>) -> bool {
        if self.is_complete() {
            return true;
        }
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
        self.input = input.chars().collect();
        if self.input.len() >= self.reference.len() {
            self.finished_at = Some(now);
        }
        self.is_complete()
    }

    pub fn char_status(&self, index: usize) -> CharStatus {
        match self.input.get(index) {
            None => CharStatus::Untyped,
            Some(typed) if self.reference.get(index) == Some(typed) => CharStatus::Correct,
            Some(_) => CharStatus::Incorrect,
        }
    }

    /// One status per reference character.
    pub fn statuses(&self) -> Vec<CharStatus> {
        (0..self.reference.len()).map(|i| self.char_status(i)).collect()
    }

    pub fn correct_count(&self) -> usize {
        self.input
            .iter()
            .zip(self.reference.iter())
            .filter(|(typed, expected)| typed == expected)
            .count()
    }

    /// Percentage of typed characters that match. 100 before any input.
    pub fn accuracy(&self) -> u32 {
        if self.input.is_empty() {
            return 100;
        }
        (100.0 * self.correct_count() as f64 / self.input.len() as f64).round() as u32
    }

    /// Words per minute, five characters to the word. `None` until complete.
    ///
    /// Elapsed time is floored at [`MIN_ELAPSED_MS`] so an instant paste
    /// scores high but finite.
    pub fn words_per_minute(&self) -> Option<u32> {
        let (start, end) = (self.started_at?, self.finished_at?);
        let elapsed_ms = (end - start).num_milliseconds().max(MIN_ELAPSED_MS);
        let minutes = elapsed_ms as f64 / 60_000.0;
        let words = self.input.len() as f64 / CHARS_PER_WORD;
        Some((words / minutes).round() as u32)
    }

    /// Whole seconds on the live timer.
    pub fn elapsed_seconds(&self, now: DateTime<Utc>) -> i64 {
        match self.started_at {
            None => 0,
            Some(start) => (self.finished_at.unwrap_or(now) - start).num_seconds().max(0),
        }
    }

    pub fn reset(&mut self) {
        self.input.clear();
        self.started_at = None;
        self.finished_at = None;
    }
}

impl Default for TypingTest {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_accuracy_is_full_before_typing() {
        let test = TypingTest::new();
        assert_eq!(test.accuracy(), 100);
        assert_eq!(test.words_per_minute(), None);
        assert!(test.statuses().iter().all(|s| *s == CharStatus::Untyped));
    }

    #[test]
    fn test_accuracy_on_matching_prefix() {
        let mut test = TypingTest::new();
        test.update("The quick brown", t0());
        assert_eq!(test.accuracy(), 100);
        assert!(!test.is_complete());
    }

    #[test]
    fn test_accuracy_with_one_mismatch() {
        let mut test = TypingTest::new();
        test.update("Thx", t0());

        // round(100 * 2 / 3)
        assert_eq!(test.accuracy(), 67);
        assert_eq!(test.char_status(0), CharStatus::Correct);
        assert_eq!(test.char_status(2), CharStatus::Incorrect);
        assert_eq!(test.char_status(3), CharStatus::Untyped);
    }

    #[test]
    fn test_wpm_for_235_characters_in_a_minute() {
        let reference = "a".repeat(235);
        let mut test = TypingTest::with_reference(&reference);

        assert!(!test.update("a", t0()));
        assert!(test.update(&reference, t0() + Duration::seconds(60)));
        assert_eq!(test.words_per_minute(), Some(47));
        assert_eq!(test.accuracy(), 100);
    }

    #[test]
    fn test_full_paragraph_wpm() {
        let mut test = TypingTest::new();
        test.update("T", t0());
        test.update(TYPING_PARAGRAPH, t0() + Duration::seconds(120));

        // 283 chars / 5 = 56.6 words over two minutes
        assert_eq!(test.words_per_minute(), Some(28));
    }

    #[test]
    fn test_instant_paste_is_floored_at_one_second() {
        let reference = "abcde".repeat(10);
        let mut test = TypingTest::with_reference(&reference);
        test.update(&reference, t0());

        // 10 words in one second
        assert_eq!(test.words_per_minute(), Some(600));
    }

    #[test]
    fn test_any_text_of_full_length_completes() {
        let mut test = TypingTest::with_reference("hello");
        assert!(test.update("zzzzz", t0()));
        assert_eq!(test.accuracy(), 0);
    }

    #[test]
    fn test_input_after_completion_is_ignored() {
        let mut test = TypingTest::with_reference("abc");
        test.update("abc", t0() + Duration::seconds(3));
        test.update("abcdef", t0() + Duration::seconds(9));

        assert_eq!(test.input(), "abc");
        assert_eq!(test.finished_at(), Some(t0() + Duration::seconds(3)));
    }

    #[test]
    fn test_elapsed_seconds_stops_at_completion() {
        let mut test = TypingTest::with_reference("abc");
        assert_eq!(test.elapsed_seconds(t0()), 0);

        test.update("a", t0());
        assert_eq!(test.elapsed_seconds(t0() + Duration::seconds(4)), 4);

        test.update("abc", t0() + Duration::seconds(5));
        assert_eq!(test.elapsed_seconds(t0() + Duration::seconds(30)), 5);
    }

    #[test]
    fn test_reset() {
        let mut test = TypingTest::with_reference("abc");
        test.update("abc", t0());
        test.reset();

        assert_eq!(test.input(), "");
        assert!(test.started_at().is_none());
        assert!(!test.is_complete());
        assert_eq!(test.reference(), "abc");
    }
}

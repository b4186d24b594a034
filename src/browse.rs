// src/browse.rs

use crate::model::{Lesson, LessonLevel, VocabWord};

/// Index into a list of `len` items, clamped at both ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pager {
    index: usize,
    len: usize,
}

impl Pager {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn has_prev(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.len
    }

    pub fn next(&mut self) -> bool {
        if self.has_next() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    pub fn prev(&mut self) -> bool {
        if self.has_prev() {
            self.index -= 1;
            true
        } else {
            false
        }
    }
}

/// Flashcard carousel: position plus which face is up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlashcardDeck {
    pub pager: Pager,
    pub flipped: bool,
}

impl FlashcardDeck {
    pub fn new(len: usize) -> Self {
        Self {
            pager: Pager::new(len),
            flipped: false,
        }
    }

    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    // a new card always starts face up
    pub fn next(&mut self) {
        if self.pager.next() {
            self.flipped = false;
        }
    }

    pub fn prev(&mut self) {
        if self.pager.prev() {
            self.flipped = false;
        }
    }
}

/// Lesson list filtered by level, one lesson open at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LessonBrowser {
    level: LessonLevel,
    expanded: Option<String>,
}

impl LessonBrowser {
    pub fn level(&self) -> LessonLevel {
        self.level
    }

    pub fn set_level(&mut self, level: LessonLevel) {
        if self.level != level {
            self.level = level;
            self.expanded = None;
        }
    }

    pub fn is_expanded(&self, lesson_id: &str) -> bool {
        self.expanded.as_deref() == Some(lesson_id)
    }

    /// Opens `lesson_id`, or closes it when it is already open.
    pub fn toggle(&mut self, lesson_id: &str) {
        if self.is_expanded(lesson_id) {
            self.expanded = None;
        } else {
            self.expanded = Some(lesson_id.to_owned());
        }
    }

    pub fn visible<'a>(&self, lessons: &'a [Lesson]) -> impl Iterator<Item = &'a Lesson> {
        let level = self.level;
        lessons.iter().filter(move |l| l.level == level)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordSearch {
    pub query: String,
}

impl WordSearch {
    pub fn results<'a>(&self, words: &'a [VocabWord]) -> Vec<&'a VocabWord> {
        filter_words(words, &self.query)
    }
}

/// Korean and Sinhala match as substrings, English ignores case.
pub fn filter_words<'a>(words: &'a [VocabWord], query: &str) -> Vec<&'a VocabWord> {
    let query = query.trim();
    if query.is_empty() {
        return words.iter().collect();
    }
    let lower = query.to_lowercase();
    words
        .iter()
        .filter(|w| {
            w.kor.contains(query)
                || w.eng.to_lowercase().contains(&lower)
                || w.sinhala.contains(query)
        })
        .collect()
}

/// Ids of the words before and after `id` in list order.
pub fn neighbour_ids(words: &[VocabWord], id: u32) -> (Option<u32>, Option<u32>) {
    let Some(pos) = words.iter().position(|w| w.id == id) else {
        return (None, None);
    };
    let prev = pos.checked_sub(1).map(|p| words[p].id);
    let next = words.get(pos + 1).map(|w| w.id);
    (prev, next)
}

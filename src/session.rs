use crate::config::SessionParams;
use crate::drill::DrillItem;
use crate::layouts::KeyLayout;
use crate::matcher::MatchWord;
use crate::stroke::{decode_outline, PressMatrix};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Judgement {
    /// The full word was typed; the session moved on.
    Complete,
    /// Acceptable partial input, or nothing left to judge.
    InProgress,
    /// Input can no longer lead to the word.
    Wrong,
}

/// Progress through one drill.
#[derive(Debug, Clone)]
pub struct DrillSession {
    items: Vec<DrillItem>,
    order: Vec<usize>,
    index: usize,
    text: String,
    fail: bool,
    completed: bool,
}

impl DrillSession {
    pub fn new(items: Vec<DrillItem>, params: &SessionParams) -> Self {
        let order = presentation_order(items.len(), params);
        let completed = items.is_empty();
        Self {
            items,
            order,
            index: 0,
            text: String::new(),
            fail: false,
            completed,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Zero-based position in the presentation order.
    pub fn position(&self) -> usize {
        self.index
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_failed(&self) -> bool {
        self.fail
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn current(&self) -> Option<&DrillItem> {
        if self.completed {
            return None;
        }
        self.order.get(self.index).and_then(|&i| self.items.get(i))
    }

    /// Judges the text currently in the input box.
    pub fn judge<M: MatchWord + ?Sized>(&mut self, matcher: &M, typed: &str) -> Judgement {
        let Some(item) = self.current() else {
            return Judgement::InProgress;
        };
        let expected = item.word.trim().to_string();
        let typed = typed.trim();

        if typed == expected {
            self.next();
            return Judgement::Complete;
        }

        self.text = typed.to_string();
        if matcher.match_word(&expected, typed) {
            Judgement::InProgress
        } else {
            self.fail = true;
            Judgement::Wrong
        }
    }

    pub fn next(&mut self) {
        self.text.clear();
        self.fail = false;
        let len = self.items.len();
        if len == 0 {
            self.completed = true;
            return;
        }
        self.completed = self.index + 1 >= len;
        self.index = (self.index + 1).min(len - 1);
    }

    pub fn prev(&mut self) {
        self.text.clear();
        self.fail = false;
        if self.completed && !self.items.is_empty() {
            self.completed = false;
        } else {
            self.index = self.index.saturating_sub(1);
        }
    }

    pub fn reset(&mut self) {
        self.index = 0;
        self.text.clear();
        self.fail = false;
        self.completed = self.items.is_empty();
    }

    /// Chord diagrams for the current item, once the learner has gone wrong.
    pub fn hint(&self, layout: &KeyLayout) -> Option<Vec<PressMatrix>> {
        if !self.fail {
            return None;
        }
        self.current()
            .map(|item| decode_outline(layout, &item.outline))
    }
}

fn presentation_order(len: usize, params: &SessionParams) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    if params.shuffle {
        let mut rng = match params.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        rng.shuffle(&mut order);
    }
    order
}

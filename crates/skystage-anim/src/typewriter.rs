//! Typewriter text reveal.
//!
//! Reveals a string one character per fixed delay. A `<...>` markup span
//! is copied verbatim in the same step as the character after it, so
//! markup is never partially visible and consumes no delay of its own.
//! Cancellation stops the reveal immediately, leaving the text exactly
//! as revealed so far.

/// Per-tick typewriter over a single label.
#[derive(Debug, Clone)]
pub struct Typewriter {
    source: String,
    revealed: String,
    /// Byte offset of the next unrevealed character in `source`.
    cursor: usize,
    delay_secs: f32,
    /// Seconds until the next character may appear.
    cooldown: f32,
    cancelled: bool,
}

impl Typewriter {
    pub fn new(source: impl Into<String>, delay_secs: f32) -> Self {
        let source = source.into();
        Self {
            revealed: String::with_capacity(source.len()),
            source,
            cursor: 0,
            delay_secs,
            cooldown: 0.0,
            cancelled: false,
        }
    }

    /// Text revealed so far.
    pub fn revealed(&self) -> &str {
        &self.revealed
    }

    /// True once the whole source is revealed or the reveal was cancelled.
    pub fn is_finished(&self) -> bool {
        self.cancelled || self.cursor >= self.source.len()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Stop the reveal immediately. No further characters appear.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Advance by `dt` seconds, revealing any characters that came due.
    pub fn step(&mut self, dt: f32) {
        if self.is_finished() {
            return;
        }

        self.cooldown -= dt;
        // With a zero delay the cooldown never goes positive and the whole
        // remainder reveals in one step.
        while self.cooldown < 0.0 && self.cursor < self.source.len() {
            self.reveal_next();
            self.cooldown += self.delay_secs.max(0.0);
        }
    }

    /// Reveal the next unit: any leading markup spans, then one character.
    fn reveal_next(&mut self) {
        let rest = &self.source[self.cursor..];

        // Copy consecutive markup spans verbatim. An unmatched '<' falls
        // through and is revealed as an ordinary character.
        let mut offset = 0;
        while self.source[self.cursor + offset..].starts_with('<') {
            match self.source[self.cursor + offset..].find('>') {
                Some(close) => offset += close + 1,
                None => break,
            }
        }
        if offset > 0 {
            self.revealed.push_str(&rest[..offset]);
            self.cursor += offset;
        }

        if let Some(ch) = self.source[self.cursor..].chars().next() {
            self.revealed.push(ch);
            self.cursor += ch.len_utf8();
        }
    }
}

use wc_shared_kernel::Counts;

/// Running counters for one pass. The in-word flag lives for the whole
/// stream, so a word spanning two reads is counted once.
#[derive(Debug, Default)]
pub(crate) struct Tally {
    lines: u64,
    words: u64,
    bytes: u64,
    in_word: bool,
}

impl Tally {
    /// Feeds decoded text.
    pub(crate) fn push_str(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.bytes += text.len() as u64;
        self.lines += bytecount::count(text.as_bytes(), b'\n') as u64;
        for ch in text.chars() {
            let space = ch.is_whitespace();
            if !space && !self.in_word {
                self.words += 1;
            }
            self.in_word = !space;
        }
    }

    /// Feeds `len` undecodable bytes as a single non-whitespace character.
    pub(crate) fn push_opaque(&mut self, len: usize) {
        self.bytes += len as u64;
        if !self.in_word {
            self.words += 1;
        }
        self.in_word = true;
    }

    /// Bytes accounted for so far.
    pub(crate) const fn offset(&self) -> u64 {
        self.bytes
    }

    pub(crate) const fn counts(&self) -> Counts {
        Counts::new(self.lines, self.words, self.bytes)
    }
}

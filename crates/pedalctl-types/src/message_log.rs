use std::collections::VecDeque;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub sequence: u64,
    pub text: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}  {}", self.sequence, self.text)
    }
}

/// Append-only list of sent messages. Once `capacity` is reached the oldest
/// entry is evicted; sequence numbers keep counting across evictions and clears.
#[derive(Debug, Clone)]
pub struct MessageLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
    next_sequence: u64,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            next_sequence: 1,
        }
    }

    pub fn push(&mut self, text: String) -> &LogEntry {
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }

        self.entries.push_back(LogEntry {
            sequence: self.next_sequence,
            text,
        });
        self.next_sequence += 1;

        &self.entries[self.entries.len() - 1]
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }

    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_sequence_numbers() {
        let mut log = MessageLog::new(10);
        assert_eq!(log.push("first".to_string()).sequence, 1);
        assert_eq!(log.push("second".to_string()).sequence, 2);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn push_evicts_oldest_entry_when_full() {
        let mut log = MessageLog::new(2);
        log.push("a".to_string());
        log.push("b".to_string());
        log.push("c".to_string());

        let texts: Vec<_> = log.entries().map(|entry| entry.text.as_str()).collect();
        assert_eq!(texts, vec!["b", "c"]);
        assert_eq!(log.len(), log.capacity());
    }

    #[test]
    fn new_with_zero_capacity_keeps_the_latest_entry() {
        let mut log = MessageLog::new(0);
        log.push("a".to_string());
        log.push("b".to_string());
        assert_eq!(log.capacity(), 1);
        assert_eq!(log.lines(), vec!["0002  b".to_string()]);
    }

    #[test]
    fn clear_empties_log_but_keeps_counting() {
        let mut log = MessageLog::new(5);
        log.push("a".to_string());
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.push("b".to_string()).sequence, 2);
    }
}

use hypertux_core::{Color, Direction, Point};

/// One resolved, successful move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Record {
    /// Color of the actor that moved.
    pub color: Color,
    /// Direction the actor was pushed in.
    pub direction: Direction,
    /// Cell the actor started from.
    pub start: Point,
    /// Cell the actor stopped on.
    pub end: Point,
}

/// A truncating-on-write log of moves with an undo/redo cursor.
///
/// Records before the cursor are applied; records at or after the cursor have
/// been undone and can be redone until the next [`push`](Self::push) discards
/// them.
///
/// # Examples
///
/// ```
/// use hypertux_core::{Color, Direction, Point};
/// use hypertux_game::{History, Record};
///
/// let record = Record {
///     color: Color::Yellow,
///     direction: Direction::East,
///     start: Point::new(5, 5),
///     end: Point::new(10, 5),
/// };
///
/// let mut history = History::new();
/// history.push(record);
/// assert_eq!(history.undo(), Some(record));
/// assert_eq!(history.undo(), None);
/// assert_eq!(history.redo(), Some(record));
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct History {
    records: Vec<Record>,
    cursor: usize,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
            cursor: 0,
        }
    }

    /// Returns every stored record, including undone ones.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the applied records, oldest first.
    #[must_use]
    pub fn applied(&self) -> &[Record] {
        &self.records[..self.cursor]
    }

    /// Returns the number of applied records.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the number of stored records, including undone ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no records are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends a record after the cursor, discarding any undone records.
    pub fn push(&mut self, record: Record) {
        self.records.truncate(self.cursor);
        self.records.push(record);
        self.cursor += 1;
    }

    /// Returns `true` if there is an applied record to undo.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Steps the cursor back and returns the record being undone.
    pub fn undo(&mut self) -> Option<Record> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        Some(self.records[self.cursor])
    }

    /// Returns `true` if there is an undone record to redo.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor < self.records.len()
    }

    /// Returns the record being redone and steps the cursor forward.
    pub fn redo(&mut self) -> Option<Record> {
        if !self.can_redo() {
            return None;
        }
        let record = self.records[self.cursor];
        self.cursor += 1;
        Some(record)
    }

    /// Discards every record.
    pub fn reset(&mut self) {
        self.records.clear();
        self.cursor = 0;
    }
}

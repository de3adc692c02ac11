//! Generic in-memory table with an incrementing id counter.

/// A stored record with a typed integer id.
pub trait Record: Clone {
    /// The id type for this record.
    type Id: Copy + Eq + From<i32>;

    /// The record's id.
    fn id(&self) -> Self::Id;
}

/// An insertion-ordered collection of records.
///
/// Ids are assigned from a counter that starts at 1 and never goes
/// backwards, so deleted ids are not handed out again.
#[derive(Debug, Clone)]
pub struct Table<T: Record> {
    rows: Vec<T>,
    next_id: i32,
}

impl<T: Record> Table<T> {
    /// Create an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }

    /// All rows in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<T> {
        self.rows.clone()
    }

    /// Find a row by id.
    #[must_use]
    pub fn get(&self, id: T::Id) -> Option<T> {
        self.rows.iter().find(|row| row.id() == id).cloned()
    }

    /// Iterate over rows in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.iter()
    }

    /// Insert a new row built from the next id in the sequence.
    pub fn create(&mut self, build: impl FnOnce(T::Id) -> T) -> T {
        let id = T::Id::from(self.next_id);
        self.next_id += 1;
        let row = build(id);
        self.rows.push(row.clone());
        row
    }

    /// Apply a field update to the row with the given id.
    ///
    /// Returns the updated row, or `None` if the id is absent.
    pub fn update(&mut self, id: T::Id, apply: impl FnOnce(&mut T)) -> Option<T> {
        let row = self.rows.iter_mut().find(|row| row.id() == id)?;
        apply(row);
        Some(row.clone())
    }

    /// Remove the row with the given id.
    ///
    /// Returns `true` if a row was removed.
    pub fn delete(&mut self, id: T::Id) -> bool {
        match self.rows.iter().position(|row| row.id() == id) {
            Some(index) => {
                self.rows.remove(index);
                true
            }
            None => false,
        }
    }
}

impl<T: Record> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

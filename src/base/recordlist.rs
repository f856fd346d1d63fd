use crate::base;

/// All records in the book, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recordlist(Vec<base::Record>);

impl Recordlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &base::Record> {
        self.0.iter()
    }

    pub fn push(&mut self, r: base::Record) {
        self.0.push(r)
    }

    pub fn contains_id(&self, id: u64) -> bool {
        self.0.iter().any(|r| r.id() == id)
    }

    pub fn get(&self, id: u64) -> Option<&base::Record> {
        self.0.iter().find(|r| r.id() == id)
    }

    /// Removes and returns the record with the given id. If there is no such
    /// record, returns `None` and leaves the list unmodified.
    pub fn remove(&mut self, id: u64) -> Option<base::Record> {
        let i = self.0.iter().position(|r| r.id() == id)?;
        Some(self.0.remove(i))
    }

    /// Removes every record of `kind` dated within `period` and returns them in
    /// their original order. Records with invalid dates are never removed.
    pub fn remove_period(&mut self, kind: base::Kind, period: base::Period) -> Recordlist {
        let (removed, kept): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.0).into_iter().partition(|r| {
                r.kind() == kind && r.date().is_some_and(|dt| period.contains(dt))
            });
        self.0 = kept;
        Self(removed)
    }

    /// Returns an id for a record created at `now_millis` (milliseconds since
    /// the Unix epoch) that is greater than every id already in the list.
    pub fn next_id(&self, now_millis: u64) -> u64 {
        match self.0.iter().map(base::Record::id).max() {
            Some(max) if max >= now_millis => max.saturating_add(1),
            _ => now_millis,
        }
    }

    /// Distinct years that have at least one validly dated record, newest
    /// first.
    pub fn years(&self) -> Vec<i32> {
        let mut years = self
            .0
            .iter()
            .filter_map(|r| r.date().map(base::Date::year))
            .collect::<Vec<_>>();
        years.sort_unstable_by(|a, b| b.cmp(a));
        years.dedup();
        years
    }
}

impl IntoIterator for Recordlist {
    type Item = base::Record;
    type IntoIter = std::vec::IntoIter<base::Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<base::Record> for Recordlist {
    fn from_iter<T: IntoIterator<Item = base::Record>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a base::Record> for Recordlist {
    fn from_iter<T: IntoIterator<Item = &'a base::Record>>(iter: T) -> Self {
        iter.into_iter().cloned().collect()
    }
}

impl std::fmt::Display for Recordlist {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for r in self.iter() {
            writeln!(f, "{}", r)?;
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid record at line {line}")]
pub struct ParseError {
    line: usize,
    source: serde_json::Error,
}

impl std::str::FromStr for Recordlist {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, x)| !x.is_empty())
            .map(|(i, x)| {
                x.parse::<base::Record>().map_err(|e| ParseError {
                    line: i + 1,
                    source: e,
                })
            })
            .collect::<Result<Self, _>>()
    }
}

impl TryFrom<&str> for Recordlist {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}

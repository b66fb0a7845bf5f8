/// The standard thirteen ranks and their ordering values.
/// This is what `RankTable::standard()` is built from.
const STANDARD_RANKS: [(&str, i32); 13] = [
    ("2", 2),
    ("3", 3),
    ("4", 4),
    ("5", 5),
    ("6", 6),
    ("7", 7),
    ("8", 8),
    ("9", 9),
    ("10", 10),
    ("J", 11),
    ("Q", 12),
    ("K", 13),
    ("A", 14),
];

/// The standard four suits and their colors.
/// This is what `SuitTable::standard()` is built from.
const STANDARD_SUITS: [(&str, &str); 4] = [
    ("♠", "BLACK"),
    ("♣", "BLACK"),
    ("♡", "RED"),
    ("♢", "RED"),
];

/// A rank → ordering value table.
///
/// Entries keep their insertion order, since deck construction walks the
/// table in order. Labels are opaque; any string works as a rank.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankTable {
    entries: Vec<(String, i32)>,
}

impl RankTable {
    /// The standard table: "2" through "10", "J", "Q", "K", "A"
    /// mapped onto 2..=14.
    ///
    /// ```
    /// use deckstat::core::RankTable;
    ///
    /// let ranks = RankTable::standard();
    /// assert_eq!(13, ranks.len());
    /// assert_eq!(Some(14), ranks.value("A"));
    /// ```
    pub fn standard() -> Self {
        Self::new_with_entries(STANDARD_RANKS)
    }

    /// Build a table from `(label, value)` pairs.
    ///
    /// A repeated label overwrites the earlier value but keeps its first
    /// position, so iteration order is always first-insertion order.
    ///
    /// ```
    /// use deckstat::core::RankTable;
    ///
    /// let ranks = RankTable::new_with_entries([("low", 1), ("high", 9), ("low", 2)]);
    /// assert_eq!(2, ranks.len());
    /// assert_eq!(Some(2), ranks.value("low"));
    /// ```
    pub fn new_with_entries<L: Into<String>>(entries: impl IntoIterator<Item = (L, i32)>) -> Self {
        let mut table = Self {
            entries: Vec::new(),
        };
        for (label, value) in entries {
            table.set(label.into(), value);
        }
        table
    }

    /// The ordering value for a rank label, if the table has it.
    pub fn value(&self, rank: &str) -> Option<i32> {
        self.entries
            .iter()
            .find(|(label, _)| label == rank)
            .map(|(_, value)| *value)
    }

    /// Iterate the `(label, value)` entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.entries.iter().map(|(label, value)| (label.as_str(), *value))
    }

    /// How many ranks are in the table?
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the table empty?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn set(&mut self, label: String, value: i32) {
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((label, value)),
        }
    }
}

/// The standard table is the default.
impl Default for RankTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// A suit → color table.
///
/// Same shape as `RankTable`: insertion-ordered, opaque labels, a repeated
/// suit overwrites its color in place.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuitTable {
    entries: Vec<(String, String)>,
}

impl SuitTable {
    /// The standard table: black spades and clubs, red hearts and diamonds.
    ///
    /// ```
    /// use deckstat::core::SuitTable;
    ///
    /// let suits = SuitTable::standard();
    /// assert_eq!(4, suits.len());
    /// assert_eq!(Some("RED"), suits.color("♡"));
    /// ```
    pub fn standard() -> Self {
        Self::new_with_entries(STANDARD_SUITS)
    }

    /// Build a table from `(suit, color)` pairs.
    pub fn new_with_entries<S, C>(entries: impl IntoIterator<Item = (S, C)>) -> Self
    where
        S: Into<String>,
        C: Into<String>,
    {
        let mut table = Self {
            entries: Vec::new(),
        };
        for (label, color) in entries {
            table.set(label.into(), color.into());
        }
        table
    }

    /// The color for a suit label, if the table has it.
    pub fn color(&self, suit: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(label, _)| label == suit)
            .map(|(_, color)| color.as_str())
    }

    /// Iterate the `(suit, color)` entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(label, color)| (label.as_str(), color.as_str()))
    }

    /// How many suits are in the table?
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the table empty?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn set(&mut self, label: String, color: String) {
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some(entry) => entry.1 = color,
            None => self.entries.push((label, color)),
        }
    }
}

/// The standard table is the default.
impl Default for SuitTable {
    fn default() -> Self {
        Self::standard()
    }
}

//! Lookup tables over a function's stops.
//!
//! [`StopsTable`] serves range lookups (exponential and interval functions)
//! over numeric keys, [`CategoricalTable`] serves exact-match lookups.

use crate::values::RawValue;
use crate::values::raw::structurally_equal;
use hashbrown::HashMap;
use serde_json::Value;

/// Stops keyed by number, in table order.
///
/// Lookups binary-search the keys and so assume they are ascending. Keys are
/// kept in the order they were given unless [`StopsTable::sort`] is called.
#[derive(Debug, Clone, PartialEq)]
pub struct StopsTable<T> {
    stops: Vec<(f64, T)>,
}

/// Where an input falls relative to the stops of a [`StopsTable`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bracket<'a, T> {
    /// At or below the first key.
    First(&'a T),
    /// At or above the last key.
    Last(&'a T),
    /// Strictly between two adjacent keys, `lower.0 <= x < upper.0`.
    Between {
        lower: (f64, &'a T),
        upper: (f64, &'a T),
    },
}

impl<T> StopsTable<T> {
    pub fn new(stops: Vec<(f64, T)>) -> Self {
        Self { stops }
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn first(&self) -> Option<&T> {
        self.stops.first().map(|(_, output)| output)
    }

    pub fn keys(&self) -> impl Iterator<Item = f64> + '_ {
        self.stops.iter().map(|(key, _)| *key)
    }

    /// Stable-sort the stops by key.
    pub fn sort(&mut self) {
        self.stops.sort_by(|(a, _), (b, _)| a.total_cmp(b));
    }

    /// Whether the keys are already ascending.
    pub fn is_sorted(&self) -> bool {
        self.stops.windows(2).all(|pair| pair[0].0 <= pair[1].0)
    }

    /// Find the stops surrounding `x`. Returns `None` for an empty table or a
    /// NaN input.
    pub fn bracket(&self, x: f64) -> Option<Bracket<'_, T>> {
        let (first_key, first) = self.stops.first()?;
        let (last_key, last) = self.stops.last()?;
        if x.is_nan() {
            return None;
        }
        if x <= *first_key {
            return Some(Bracket::First(first));
        }
        if x >= *last_key {
            return Some(Bracket::Last(last));
        }
        // first_key < x < last_key, so the table has two stops. Unsorted
        // keys can make the search land anywhere; keep it in range.
        let i = self
            .stops
            .partition_point(|(key, _)| *key <= x)
            .clamp(1, self.stops.len() - 1);
        let (lower_key, lower) = &self.stops[i - 1];
        let (upper_key, upper) = &self.stops[i];
        Some(Bracket::Between {
            lower: (*lower_key, lower),
            upper: (*upper_key, upper),
        })
    }

    /// The output of the greatest key that is `<= x`, or `None` when `x` is
    /// below every key.
    pub fn step(&self, x: f64) -> Option<&T> {
        let index = self.stops.partition_point(|(key, _)| *key <= x);
        index.checked_sub(1).map(|i| &self.stops[i].1)
    }
}

/// Stops keyed by arbitrary raw values, matched by structural equality.
#[derive(Debug, Clone)]
pub struct CategoricalTable<T> {
    stops: Vec<(RawValue, T)>,
    by_string: HashMap<String, usize>,
}

impl<T> CategoricalTable<T> {
    pub fn new(stops: Vec<(RawValue, T)>) -> Self {
        let mut by_string = HashMap::new();
        for (index, (key, _)) in stops.iter().enumerate() {
            if let Value::String(s) = key {
                // First stop with a given key wins.
                by_string.entry(s.clone()).or_insert(index);
            }
        }
        Self { stops, by_string }
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn get(&self, key: &RawValue) -> Option<&T> {
        match key {
            Value::String(s) => self.by_string.get(s).map(|&i| &self.stops[i].1),
            _ => self
                .stops
                .iter()
                .find(|(candidate, _)| structurally_equal(candidate, key))
                .map(|(_, output)| output),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn table() -> StopsTable<&'static str> {
        StopsTable::new(vec![(0.0, "a"), (10.0, "b"), (20.0, "c")])
    }

    #[test]
    fn test_bracket_clamps_at_ends() {
        let table = table();
        assert_eq!(table.bracket(-5.0), Some(Bracket::First(&"a")));
        assert_eq!(table.bracket(0.0), Some(Bracket::First(&"a")));
        assert_eq!(table.bracket(20.0), Some(Bracket::Last(&"c")));
        assert_eq!(table.bracket(99.0), Some(Bracket::Last(&"c")));
    }

    #[test]
    fn test_bracket_between() {
        let table = table();
        assert_eq!(
            table.bracket(15.0),
            Some(Bracket::Between {
                lower: (10.0, &"b"),
                upper: (20.0, &"c"),
            })
        );
        assert_eq!(
            table.bracket(10.0),
            Some(Bracket::Between {
                lower: (10.0, &"b"),
                upper: (20.0, &"c"),
            })
        );
    }

    #[test]
    fn test_bracket_single_stop_and_empty() {
        let single = StopsTable::new(vec![(5.0, 1)]);
        assert_eq!(single.bracket(0.0), Some(Bracket::First(&1)));
        assert_eq!(single.bracket(9.0), Some(Bracket::Last(&1)));

        let empty: StopsTable<i32> = StopsTable::new(vec![]);
        assert_eq!(empty.bracket(1.0), None);
        assert_eq!(table().bracket(f64::NAN), None);
    }

    #[test]
    fn test_step() {
        let table = table();
        assert_eq!(table.step(-1.0), None);
        assert_eq!(table.step(0.0), Some(&"a"));
        assert_eq!(table.step(9.99), Some(&"a"));
        assert_eq!(table.step(10.0), Some(&"b"));
        assert_eq!(table.step(1e9), Some(&"c"));
        assert_eq!(table.step(f64::NAN), None);
    }

    #[test]
    fn test_unsorted_lookups_stay_in_range() {
        let table = StopsTable::new(vec![(0.0, "a"), (10.0, "b"), (5.0, "c"), (20.0, "d")]);
        assert!(!table.is_sorted());
        for x in [-1.0, 0.0, 3.0, 7.0, 12.0, 19.0, 20.0, 25.0] {
            assert!(table.bracket(x).is_some(), "no bracket at {x}");
            let _ = table.step(x);
        }
        assert_eq!(table.bracket(-1.0), Some(Bracket::First(&"a")));
        assert_eq!(table.bracket(25.0), Some(Bracket::Last(&"d")));
    }

    #[test]
    fn test_sort_is_stable() {
        let mut table = StopsTable::new(vec![(10.0, "x"), (0.0, "y"), (10.0, "z")]);
        assert!(!table.is_sorted());
        table.sort();
        assert!(table.is_sorted());
        assert_eq!(table.keys().collect::<Vec<_>>(), vec![0.0, 10.0, 10.0]);
        assert_eq!(table.step(10.0), Some(&"z"));
        assert_eq!(table.first(), Some(&"y"));
    }

    #[test]
    fn test_categorical_strings() {
        let table = CategoricalTable::new(vec![
            (json!("trail"), 1),
            (json!("road"), 3),
            (json!("road"), 99),
        ]);
        assert_eq!(table.get(&json!("trail")), Some(&1));
        assert_eq!(table.get(&json!("road")), Some(&3));
        assert_eq!(table.get(&json!("Road")), None);
    }

    #[test]
    fn test_categorical_other_keys() {
        let table = CategoricalTable::new(vec![
            (json!(1), "one"),
            (json!(true), "yes"),
            (json!("1"), "string one"),
        ]);
        assert_eq!(table.get(&json!(1.0)), Some(&"one"));
        assert_eq!(table.get(&json!(true)), Some(&"yes"));
        assert_eq!(table.get(&json!("1")), Some(&"string one"));
        assert_eq!(table.get(&json!(false)), None);
        assert_eq!(table.get(&json!(null)), None);
    }
}

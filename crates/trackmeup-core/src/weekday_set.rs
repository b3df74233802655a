use chrono::Weekday;
use serde::{Deserialize, Serialize};

const ALL: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// A set of weekdays stored as a 7-bit mask (bit 0 = Monday).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Weekday>", into = "Vec<Weekday>")]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    pub const fn new() -> Self {
        Self(0)
    }

    /// Saturday and Sunday.
    pub const fn weekend() -> Self {
        Self(bit(Weekday::Sat) | bit(Weekday::Sun))
    }

    pub fn insert(&mut self, day: Weekday) {
        self.0 |= bit(day);
    }

    pub fn remove(&mut self, day: Weekday) {
        self.0 &= !bit(day);
    }

    pub const fn contains(&self, day: Weekday) -> bool {
        self.0 & bit(day) != 0
    }

    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Members in Monday-to-Sunday order.
    pub fn iter(&self) -> Iter {
        Iter { set: *self, next: 0 }
    }
}

#[derive(Debug, Clone)]
pub struct Iter {
    set: WeekdaySet,
    next: usize,
}

impl Iterator for Iter {
    type Item = Weekday;

    fn next(&mut self) -> Option<Weekday> {
        while let Some(&day) = ALL.get(self.next) {
            self.next += 1;
            if self.set.contains(day) {
                return Some(day);
            }
        }
        None
    }
}

impl IntoIterator for WeekdaySet {
    type Item = Weekday;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

const fn bit(day: Weekday) -> u8 {
    match day {
        Weekday::Mon => 1 << 0,
        Weekday::Tue => 1 << 1,
        Weekday::Wed => 1 << 2,
        Weekday::Thu => 1 << 3,
        Weekday::Fri => 1 << 4,
        Weekday::Sat => 1 << 5,
        Weekday::Sun => 1 << 6,
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<Weekday> for WeekdaySet {
    fn extend<I: IntoIterator<Item = Weekday>>(&mut self, iter: I) {
        for day in iter {
            self.insert(day);
        }
    }
}

impl From<Vec<Weekday>> for WeekdaySet {
    fn from(days: Vec<Weekday>) -> Self {
        days.into_iter().collect()
    }
}

impl From<WeekdaySet> for Vec<Weekday> {
    fn from(set: WeekdaySet) -> Self {
        set.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_contains_nothing() {
        let set = WeekdaySet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(ALL.iter().all(|day| !set.contains(*day)));
    }

    #[test]
    fn weekend_is_sat_and_sun() {
        let set = WeekdaySet::weekend();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Weekday::Sat, Weekday::Sun]);
        assert!(!set.contains(Weekday::Fri));
    }

    #[test]
    fn duplicates_are_harmless() {
        let set: WeekdaySet = [Weekday::Tue, Weekday::Tue, Weekday::Thu].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(Weekday::Tue));
        assert!(set.contains(Weekday::Thu));
    }

    #[test]
    fn iter_is_monday_first_regardless_of_insert_order() {
        let set: WeekdaySet = [Weekday::Sun, Weekday::Wed, Weekday::Mon].into_iter().collect();
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![Weekday::Mon, Weekday::Wed, Weekday::Sun]
        );
    }

    #[test]
    fn insert_and_remove() {
        let mut set = WeekdaySet::weekend();
        set.remove(Weekday::Sat);
        set.remove(Weekday::Mon);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Weekday::Sun]);
        set.insert(Weekday::Fri);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn serializes_as_weekday_list() {
        let json = serde_json::to_string(&WeekdaySet::weekend()).unwrap();
        assert_eq!(json, r#"["Sat","Sun"]"#);

        let back: WeekdaySet = serde_json::from_str(r#"["Sun","Sat","Sun"]"#).unwrap();
        assert_eq!(back, WeekdaySet::weekend());
    }
}

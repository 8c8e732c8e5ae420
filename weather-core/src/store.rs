use std::collections::{HashMap, hash_map::{self, Entry}};

use crate::model::WeatherReport;

/// Latest report per city, owned by the caller.
#[derive(Debug, Clone, Default)]
pub struct ReportStore {
    reports: HashMap<String, WeatherReport>,
}

impl ReportStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any previous report for the same city and returns it.
    pub fn insert(&mut self, report: WeatherReport) -> Option<WeatherReport> {
        self.reports.insert(report.city_name.clone(), report)
    }

    /// Same as [`insert`](Self::insert), returning the stored report.
    pub fn upsert(&mut self, report: WeatherReport) -> &WeatherReport {
        match self.reports.entry(report.city_name.clone()) {
            Entry::Occupied(mut slot) => {
                slot.insert(report);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(report),
        }
    }

    pub fn get(&self, city_name: &str) -> Option<&WeatherReport> {
        self.reports.get(city_name)
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn iter(&self) -> hash_map::Values<'_, String, WeatherReport> {
        self.reports.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_report;

    #[test]
    fn last_write_wins() {
        let mut store = ReportStore::new();
        let first = sample_report("paris");
        let mut second = sample_report("paris");
        second.conditions.temperature.value = "21".into();

        assert!(store.insert(first.clone()).is_none());
        let previous = store.insert(second.clone());

        assert_eq!(previous, Some(first));
        assert_eq!(store.get("paris"), Some(&second));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn cities_are_kept_apart() {
        let mut store = ReportStore::new();
        store.insert(sample_report("paris"));
        store.insert(sample_report("tel aviv"));

        assert_eq!(store.len(), 2);
        assert!(store.get("london").is_none());
        assert_eq!(store.iter().count(), 2);
    }

    #[test]
    fn upsert_returns_latest() {
        let mut store = ReportStore::new();
        store.upsert(sample_report("paris"));

        let mut newer = sample_report("paris");
        newer.conditions.humidity.value = "75".into();
        let stored = store.upsert(newer);

        assert_eq!(stored.conditions.humidity.value, "75");
    }
}

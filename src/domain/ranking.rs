use serde::{Deserialize, Serialize};

/// Value stored in a field whose element was missing from the row.
pub const UNKNOWN: &str = "unknown";

/// One table row. Fields are kept as the page shows them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub rank: String,
    pub name: String,
    pub score: String,
}

impl Record {
    pub fn new(
        rank: impl Into<String>,
        name: impl Into<String>,
        score: impl Into<String>,
    ) -> Self {
        Self {
            rank: rank.into(),
            name: name.into(),
            score: score.into(),
        }
    }
}

/// Records from every successful page, in page order then row order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingDataset {
    pub records: Vec<Record>,
    pub pages_attempted: u32,
    pub failed_pages: Vec<u32>,
}

impl RankingDataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one page worth of records. Empty pages leave the dataset untouched.
    pub fn extend_page(&mut self, page_records: Vec<Record>) {
        if !page_records.is_empty() {
            self.records.extend(page_records);
        }
    }

    pub fn mark_failed(&mut self, page: u32) {
        self.failed_pages.push(page);
    }

    pub fn pages_succeeded(&self) -> u32 {
        self.pages_attempted
            .saturating_sub(self.failed_pages.len() as u32)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pages_are_skipped() {
        let mut dataset = RankingDataset::new();
        dataset.extend_page(vec![Record::new("1", "A Univ", "98.5")]);
        dataset.extend_page(Vec::new());
        dataset.extend_page(vec![Record::new("2", "B Univ", "97.0")]);

        let names: Vec<_> = dataset.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["A Univ", "B Univ"]);
    }

    #[test]
    fn succeeded_pages_exclude_failures() {
        let mut dataset = RankingDataset::new();
        dataset.pages_attempted = 3;
        dataset.mark_failed(2);
        assert_eq!(dataset.pages_succeeded(), 2);
        assert!(dataset.is_empty());
    }
}

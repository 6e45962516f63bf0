use crate::domain::RankingDataset;

/// Lines printed once the crawl is over: the record count followed by the
/// first `preview` records, or a hint when nothing was collected.
pub fn summary_lines(dataset: &RankingDataset, preview: usize) -> Vec<String> {
    let pages = format!(
        "{}/{} pages succeeded",
        dataset.pages_succeeded(),
        dataset.pages_attempted
    );

    if dataset.is_empty() {
        return vec![format!(
            "No ranking records collected ({pages}); check the URL template and the page selectors."
        )];
    }

    let mut lines = Vec::with_capacity(preview.min(dataset.len()) + 1);
    lines.push(format!(
        "Collected {} ranking records ({pages}):",
        dataset.len()
    ));
    lines.extend(
        dataset
            .iter()
            .take(preview)
            .enumerate()
            .map(|(idx, record)| {
                format!(
                    "{}. {} | {} | score: {}",
                    idx + 1,
                    record.rank,
                    record.name,
                    record.score
                )
            }),
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Record, UNKNOWN};

    #[test]
    fn preview_is_capped() {
        let mut dataset = RankingDataset::new();
        dataset.pages_attempted = 2;
        dataset.extend_page(
            (1..=12)
                .map(|i| Record::new(i.to_string(), format!("Univ {i}"), "90.0"))
                .collect(),
        );

        let lines = summary_lines(&dataset, 10);
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "Collected 12 ranking records (2/2 pages succeeded):");
        assert_eq!(lines[1], "1. 1 | Univ 1 | score: 90.0");
        assert_eq!(lines[10], "10. 10 | Univ 10 | score: 90.0");
    }

    #[test]
    fn sentinel_fields_are_printed_as_is() {
        let mut dataset = RankingDataset::new();
        dataset.pages_attempted = 1;
        dataset.extend_page(vec![Record::new("3", "C Univ", UNKNOWN)]);

        let lines = summary_lines(&dataset, 10);
        assert_eq!(lines[1], "1. 3 | C Univ | score: unknown");
    }

    #[test]
    fn empty_dataset_gets_its_own_message() {
        let mut dataset = RankingDataset::new();
        dataset.pages_attempted = 2;
        dataset.mark_failed(1);
        dataset.mark_failed(2);

        let lines = summary_lines(&dataset, 10);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("No ranking records collected (0/2 pages succeeded)"));
    }
}

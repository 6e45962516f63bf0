use super::{PageExtractor, Selectors};
use crate::domain::{Record, UNKNOWN};
use scraper::{ElementRef, Html, Selector};

/// Reads one record per `<tr>` of a ranking table.
pub struct RankingTableScraper {
    selectors: Selectors,
}

impl RankingTableScraper {
    pub fn new(selectors: Selectors) -> Self {
        Self { selectors }
    }
}

fn field_text(row: ElementRef<'_>, selector: &Selector) -> String {
    row.select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

impl PageExtractor for RankingTableScraper {
    fn extract(&self, document: &Html) -> Vec<Record> {
        document
            .select(&self.selectors.row)
            .map(|row| {
                Record::new(
                    field_text(row, &self.selectors.rank),
                    field_text(row, &self.selectors.name),
                    field_text(row, &self.selectors.score),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scraper() -> RankingTableScraper {
        RankingTableScraper::new(Selectors::ranking_table().unwrap())
    }

    fn table(rows: &str) -> Html {
        Html::parse_document(&format!(
            "<html><body><table><thead><tr><th>Rank</th></tr></thead><tbody>{rows}</tbody></table></body></html>"
        ))
    }

    #[test]
    fn extracts_rows_in_document_order() {
        let document = table(
            r#"<tr><td class="rank"> 1 </td><td class="univ-name"><a href="/a">A Univ</a></td><td class="score">98.5</td></tr>
               <tr><td class="rank">2</td><td class="univ-name">B Univ</td><td class="score">
                 97.0
               </td></tr>"#,
        );

        assert_eq!(
            scraper().extract(&document),
            vec![
                Record::new("1", "A Univ", "98.5"),
                Record::new("2", "B Univ", "97.0"),
            ]
        );
    }

    #[test]
    fn missing_score_becomes_unknown() {
        let document =
            table(r#"<tr><td class="rank">3</td><td class="univ-name">C Univ</td></tr>"#);

        assert_eq!(
            scraper().extract(&document),
            vec![Record::new("3", "C Univ", UNKNOWN)]
        );
    }

    #[test]
    fn only_missing_fields_are_substituted() {
        let document = table(
            r#"<tr><td class="univ-name">D Univ</td></tr>
               <tr><td class="rank">5</td><td class="score">80.1</td></tr>"#,
        );

        assert_eq!(
            scraper().extract(&document),
            vec![
                Record::new(UNKNOWN, "D Univ", UNKNOWN),
                Record::new("5", UNKNOWN, "80.1"),
            ]
        );
    }

    #[test]
    fn rows_without_any_field_are_still_emitted() {
        let document = table("<tr><td>ad</td></tr><tr><td>spacer</td></tr>");

        let records = scraper().extract(&document);
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| *r == Record::new(UNKNOWN, UNKNOWN, UNKNOWN)));
    }

    #[test]
    fn header_rows_outside_tbody_are_ignored() {
        let document = table("");
        assert!(scraper().extract(&document).is_empty());
    }

    #[test]
    fn page_without_table_yields_nothing() {
        let document = Html::parse_document("<html><body><p>No results</p></body></html>");
        assert!(scraper().extract(&document).is_empty());
    }

    #[test]
    fn rows_from_every_table_are_collected() {
        let document = Html::parse_document(
            r#"<table><tbody><tr><td class="rank">1</td></tr></tbody></table>
               <table><tbody><tr><td class="rank">2</td></tr><tr><td class="rank">3</td></tr></tbody></table>"#,
        );

        let ranks: Vec<_> = scraper()
            .extract(&document)
            .into_iter()
            .map(|r| r.rank)
            .collect();
        assert_eq!(ranks, ["1", "2", "3"]);
    }

    #[test]
    fn extraction_is_repeatable() {
        let document = table(
            r#"<tr><td class="rank">1</td><td class="univ-name">A Univ</td><td class="score">98.5</td></tr>"#,
        );
        let scraper = scraper();
        assert_eq!(scraper.extract(&document), scraper.extract(&document));
    }
}

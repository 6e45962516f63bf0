use crate::domain::Record;
use crate::error::{RankError, Result};
use scraper::{Html, Selector};

pub(crate) mod ranking_table;

pub trait PageExtractor: Send + Sync {
    fn extract(&self, document: &Html) -> Vec<Record>;
}

pub struct Selectors {
    pub row: Selector,
    pub rank: Selector,
    pub name: Selector,
    pub score: Selector,
}

impl Selectors {
    pub fn new(row: &str, rank: &str, name: &str, score: &str) -> Result<Self> {
        Ok(Self {
            row: parse(row)?,
            rank: parse(rank)?,
            name: parse(name)?,
            score: parse(score)?,
        })
    }

    /// Body rows of any table, with `.rank`, `.univ-name` and `.score` cells.
    pub fn ranking_table() -> Result<Self> {
        Self::new("table tbody tr", ".rank", ".univ-name", ".score")
    }
}

fn parse(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| RankError::Selector(format!("{selector}: {e}")))
}

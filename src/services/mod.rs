pub(crate) mod ranking_service;
pub(crate) mod report;
pub(crate) mod scraping;

use concat_string::concat_string;
use scraper::Html;

use crate::{
    config::ClassificationLayout,
    crawler::{
        yahoo::{encode, Yahoo},
        ScrapeError,
    },
    util::http::element,
};

/// 個股首頁網址
fn url(base_url: &str, stock_symbol: &str) -> String {
    let symbol = encode(stock_symbol);
    concat_string!(base_url, "/quote/", symbol, "?p=", symbol)
}

/// 導覽列的指定項目是否為 `Holdings`
pub(super) async fn visit(yahoo: &Yahoo, stock_symbol: &str) -> Result<bool, ScrapeError> {
    let url = url(&yahoo.base_url, stock_symbol);
    let text = yahoo.fetch(&url).await?;

    parse(&text, &yahoo.layout.classification)
}

/// 找不到項目或文字不同都視為非 ETF
pub(super) fn parse(text: &str, layout: &ClassificationLayout) -> Result<bool, ScrapeError> {
    let document = Html::parse_document(text);
    let selector = format!(
        "{} {}",
        element::nth_child(&layout.nav, "li", layout.position),
        layout.label
    );
    let label = element::select_text(&document, &selector).map_err(ScrapeError::Selector)?;

    Ok(label == layout.expected)
}

use concat_string::concat_string;
use scraper::Html;

use crate::{
    config::HistoryLayout,
    crawler::{
        yahoo::{encode, Yahoo},
        ScrapeError,
    },
    util::http::element,
};

/// 歷史股價頁網址
fn url(base_url: &str, stock_symbol: &str) -> String {
    let symbol = encode(stock_symbol);
    concat_string!(base_url, "/quote/", symbol, "/history?p=", symbol)
}

/// 抓取個股歷史頁，回傳收盤價欄（新到舊）
pub(super) async fn visit(yahoo: &Yahoo, stock_symbol: &str) -> Result<Vec<String>, ScrapeError> {
    let url = url(&yahoo.base_url, stock_symbol);
    let text = yahoo.fetch(&url).await?;

    parse(&text, &yahoo.layout.history, &url)
}

/// 整份文件中每一列的第 N 格，不限定在哪個表格
pub(super) fn parse(text: &str, layout: &HistoryLayout, url: &str) -> Result<Vec<String>, ScrapeError> {
    let document = Html::parse_document(text);
    let selector = element::nth_child(&layout.rows, "td", layout.close);
    let closes = element::select_texts(&document, &selector).map_err(ScrapeError::Selector)?;

    if closes.is_empty() {
        return Err(ScrapeError::Empty {
            url: url.to_string(),
            selector,
        });
    }

    Ok(closes)
}

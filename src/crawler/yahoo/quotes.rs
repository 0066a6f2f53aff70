use concat_string::concat_string;
use scraper::Html;

use crate::{
    config::QuotesLayout,
    crawler::{
        ensure_aligned,
        yahoo::{encode, Yahoo},
        ScrapeError,
    },
    declare::{QuoteFigures, QuoteSummary},
    util::http::element,
};

/// 多檔報價頁網址，代碼之間保留逗號
fn url(base_url: &str, stock_symbols: &[String]) -> String {
    let symbols = stock_symbols
        .iter()
        .map(|s| encode(s))
        .collect::<Vec<_>>()
        .join(",");

    concat_string!(base_url, "/quotes/", symbols, "/view/v1")
}

/// 一次抓取多檔股票的最新價與漲跌幅
pub(super) async fn visit(
    yahoo: &Yahoo,
    stock_symbols: &[String],
) -> Result<Vec<QuoteSummary>, ScrapeError> {
    let url = url(&yahoo.base_url, stock_symbols);
    let text = yahoo.fetch(&url).await?;

    parse(&text, &yahoo.layout.quotes, stock_symbols, &url)
}

/// 第 N 個代碼對應兩個欄位的第 N 筆，三者筆數必須一致
pub(super) fn parse(
    text: &str,
    layout: &QuotesLayout,
    stock_symbols: &[String],
    url: &str,
) -> Result<Vec<QuoteSummary>, ScrapeError> {
    let document = Html::parse_document(text);
    let price_selector = element::nth_child(&layout.rows, "td", layout.last_price);
    let change_selector = element::nth_child(&layout.rows, "td", layout.percentage_change);
    let last_prices =
        element::select_texts(&document, &price_selector).map_err(ScrapeError::Selector)?;
    let percentage_changes =
        element::select_texts(&document, &change_selector).map_err(ScrapeError::Selector)?;

    // 漲跌幅欄是整頁資料是否存在的判斷依據
    if percentage_changes.is_empty() {
        return Err(ScrapeError::Empty {
            url: url.to_string(),
            selector: change_selector,
        });
    }

    ensure_aligned(
        url,
        stock_symbols.len(),
        &[
            ("last-price", last_prices.len()),
            ("percentage-change", percentage_changes.len()),
        ],
    )?;

    Ok(stock_symbols
        .iter()
        .zip(last_prices.into_iter().zip(percentage_changes))
        .map(|(symbol, (last_price, percentage_change))| {
            QuoteSummary::new(
                symbol.clone(),
                QuoteFigures {
                    last_price,
                    percentage_change,
                },
            )
        })
        .collect())
}

use concat_string::concat_string;
use scraper::Html;

use crate::{
    config::HoldingsLayout,
    crawler::{
        ensure_aligned,
        yahoo::{encode, Yahoo},
        ScrapeError,
    },
    declare::{Holding, HoldingDetail},
    util::http::element,
};

/// ETF 持股頁網址
fn url(base_url: &str, stock_symbol: &str) -> String {
    let symbol = encode(stock_symbol);
    concat_string!(base_url, "/quote/", symbol, "/holdings?p=", symbol)
}

/// 抓取 ETF 前十大持股
pub(super) async fn visit(yahoo: &Yahoo, stock_symbol: &str) -> Result<Vec<Holding>, ScrapeError> {
    let url = url(&yahoo.base_url, stock_symbol);
    let text = yahoo.fetch(&url).await?;

    parse(&text, &yahoo.layout.holdings, &url)
}

pub(super) fn parse(text: &str, layout: &HoldingsLayout, url: &str) -> Result<Vec<Holding>, ScrapeError> {
    let document = Html::parse_document(text);
    let name_selector = element::nth_child(&layout.rows, "td", layout.name);
    let names = element::select_texts(&document, &name_selector).map_err(ScrapeError::Selector)?;

    if names.is_empty() {
        return Err(ScrapeError::Empty {
            url: url.to_string(),
            selector: name_selector,
        });
    }

    let symbols = element::select_texts(
        &document,
        &element::nth_child(&layout.rows, "td", layout.symbol),
    )
    .map_err(ScrapeError::Selector)?;
    let percentage_assets = element::select_texts(
        &document,
        &element::nth_child(&layout.rows, "td", layout.percentage_assets),
    )
    .map_err(ScrapeError::Selector)?;

    ensure_aligned(
        url,
        names.len(),
        &[
            ("symbol", symbols.len()),
            ("percentage-assets", percentage_assets.len()),
        ],
    )?;

    Ok(names
        .into_iter()
        .zip(symbols.into_iter().zip(percentage_assets))
        .map(|(name, (symbol, percentage_assets))| {
            Holding::new(
                name,
                HoldingDetail {
                    symbol,
                    percentage_assets,
                },
            )
        })
        .collect())
}

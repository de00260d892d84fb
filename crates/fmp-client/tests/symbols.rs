mod common;

use common::{last_query, mount_json, setup};
use fmp_client::{QuoteExchange, SearchRequest, SymbolExchange, SymbolListEntry, SymbolMatch};

const SEARCH_BODY: &str = r#"[
  {"symbol":"AAPL","name":"Apple Inc.","currency":"USD","stockExchange":"NasdaqGS","exchangeShortName":"NASDAQ"}
]"#;

fn apple() -> SymbolMatch {
  SymbolMatch {
    symbol: "AAPL".to_string(),
    name: Some("Apple Inc.".to_string()),
    currency: Some("USD".to_string()),
    stock_exchange: Some("NasdaqGS".to_string()),
    exchange_short_name: Some("NASDAQ".to_string()),
  }
}

#[tokio::test]
async fn test_search_with_filters() {
  let (server, client) = setup().await;
  mount_json(&server, "/search", SEARCH_BODY).await;

  let request = SearchRequest::new("apple").limit(10).exchange(QuoteExchange::Nasdaq);
  let hits = client.symbols().search(&request).await.unwrap();

  assert_eq!(hits, vec![apple()]);

  let query = last_query(&server).await;
  assert_eq!(query["query"], "apple");
  assert_eq!(query["limit"], "10");
  assert_eq!(query["exchange"], "nasdaq");
}

#[tokio::test]
async fn test_search_ticker_omits_unset_filters() {
  let (server, client) = setup().await;
  mount_json(&server, "/search-ticker", SEARCH_BODY).await;

  let hits = client.symbols().search_ticker(&SearchRequest::new("AA")).await.unwrap();
  assert_eq!(hits, vec![apple()]);

  let query = last_query(&server).await;
  assert_eq!(query["query"], "AA");
  assert!(!query.contains_key("limit"));
  assert!(!query.contains_key("exchange"));
}

#[tokio::test]
async fn test_symbols_by_exchange() {
  let (server, client) = setup().await;
  mount_json(&server, "/symbol/NYSE", r#"[{"symbol":"IBM","name":"International Business Machines"}]"#)
    .await;

  let symbols = client.symbols().symbols_by_exchange(SymbolExchange::Nyse).await.unwrap();

  assert_eq!(symbols[0].symbol, "IBM");
  assert_eq!(symbols[0].currency, None);
}

#[tokio::test]
async fn test_symbol_list() {
  let (server, client) = setup().await;
  mount_json(
    &server,
    "/stock/list",
    r#"[{"symbol":"SPY","name":"SPDR S&P 500 ETF Trust","price":512.3,"exchange":"NYSE Arca","exchangeShortName":"AMEX","type":"etf"}]"#,
  )
  .await;

  let list = client.symbols().symbol_list().await.unwrap();

  assert_eq!(
    list,
    vec![SymbolListEntry {
      symbol: "SPY".to_string(),
      name: Some("SPDR S&P 500 ETF Trust".to_string()),
      price: Some(512.3),
      exchange: Some("NYSE Arca".to_string()),
      exchange_short_name: Some("AMEX".to_string()),
      security_type: Some("etf".to_string()),
    }]
  );
}

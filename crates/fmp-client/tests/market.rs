mod common;

use common::{mount_json, setup};
use fmp_client::Numeric;

#[tokio::test]
async fn test_trading_hours() {
  let (server, client) = setup().await;
  mount_json(
    &server,
    "/market-hours",
    r#"[{
      "stockExchangeName":"New York Stock Exchange",
      "stockMarketHours":{"openingHour":"09:30 a.m. ET","closingHour":"04:00 p.m. ET"},
      "stockMarketHolidays":[{"year":2024,"New Years Day":"2024-01-01","Christmas":"2024-12-25"}],
      "isTheStockMarketOpen":true,
      "isTheEuronextMarketOpen":false,
      "isTheForexMarketOpen":true,
      "isTheCryptoMarketOpen":true
    }]"#,
  )
  .await;

  let hours = client.market().trading_hours().await.unwrap();

  assert_eq!(hours.len(), 1);
  let nyse = &hours[0];
  assert_eq!(nyse.stock_exchange_name, "New York Stock Exchange");
  let session = nyse.stock_market_hours.as_ref().unwrap();
  assert_eq!(session.opening_hour, "09:30 a.m. ET");
  assert_eq!(nyse.stock_market_holidays[0].year, 2024);
  assert_eq!(nyse.stock_market_holidays[0].holidays["Christmas"], "2024-12-25");
  assert_eq!(nyse.is_the_euronext_market_open, Some(false));
}

#[tokio::test]
async fn test_movers_endpoints() {
  let body = r#"[{"ticker":"NVDA","changes":12.5,"price":"495.22","changesPercentage":"(+2.59%)","companyName":"NVIDIA Corporation"}]"#;

  for route in ["/actives", "/losers", "/gainers"] {
    let (server, client) = setup().await;
    mount_json(&server, route, body).await;

    let movers = match route {
      "/actives" => client.market().actives().await,
      "/losers" => client.market().losers().await,
      _ => client.market().gainers().await,
    }
    .unwrap();

    assert_eq!(movers[0].ticker, "NVDA");
    assert_eq!(movers[0].price, Some(Numeric::Text("495.22".to_string())));
    assert_eq!(movers[0].changes_percentage.as_ref().and_then(Numeric::as_f64), Some(2.59));
  }
}

#[tokio::test]
async fn test_sector_performance() {
  let (server, client) = setup().await;
  mount_json(
    &server,
    "/sectors-performance",
    r#"[{"sector":"Technology","changesPercentage":"1.2035%"},{"sector":"Energy","changesPercentage":-0.41}]"#,
  )
  .await;

  let sectors = client.market().sector_performance().await.unwrap();

  assert_eq!(sectors.len(), 2);
  assert_eq!(sectors[0].changes_percentage.as_ref().and_then(Numeric::as_f64), Some(1.2035));
  assert_eq!(sectors[1].changes_percentage, Some(Numeric::Number(-0.41)));
}

#[tokio::test]
async fn test_historical_sector_performance() {
  let (server, client) = setup().await;
  mount_json(
    &server,
    "/historical-sectors-performance",
    r#"[{"date":"2024-01-03","technologyChangesPercentage":-1.12,"conumerCyclicalChangesPercentage":0.35,"energyChangesPercentage":null}]"#,
  )
  .await;

  let history = client.market().historical_sector_performance().await.unwrap();

  assert_eq!(history[0].date, "2024-01-03");
  assert_eq!(history[0].technology_changes_percentage, Some(-1.12));
  assert_eq!(history[0].consumer_cyclical_changes_percentage, Some(0.35));
  assert_eq!(history[0].energy_changes_percentage, None);
}

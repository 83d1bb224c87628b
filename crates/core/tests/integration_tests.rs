// ═══════════════════════════════════════════════════════════════════
// Integration Tests — StockTracker facade end to end
// ═══════════════════════════════════════════════════════════════════

use rust_decimal::Decimal;
use std::str::FromStr;

use stock_tracker_core::errors::CoreError;
use stock_tracker_core::models::market::Market;
use stock_tracker_core::models::settings::Settings;
use stock_tracker_core::models::transaction::Side;
use stock_tracker_core::StockTracker;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn aapl_only() -> Market {
    Market::from_prices([("AAPL", dec("150.00"))]).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
// Trading scenario
// ═══════════════════════════════════════════════════════════════════

mod trading {
    use super::*;

    #[test]
    fn buy_oversell_sell_all_then_value() {
        let mut tracker = StockTracker::create_new("Alice", aapl_only());

        let bought = tracker.buy("AAPL", 10).unwrap();
        assert_eq!(bought.price, dec("150.00"));
        assert_eq!(tracker.quantity_of("AAPL"), 10);
        assert_eq!(tracker.transactions().len(), 1);
        assert_eq!(tracker.transactions()[0].to_string(), "BUY 10 of AAPL at $150.00");

        let err = tracker.sell("AAPL", 15).unwrap_err();
        assert!(matches!(err, CoreError::InsufficientShares { .. }));
        assert_eq!(tracker.quantity_of("AAPL"), 10);
        assert_eq!(tracker.transactions().len(), 1);

        tracker.sell("AAPL", 10).unwrap();
        assert_eq!(tracker.holdings().get("AAPL"), Some(&0));
        assert_eq!(tracker.transactions().len(), 2);
        assert_eq!(tracker.transactions()[1].side, Side::Sell);

        let valuation = tracker.valuation().unwrap();
        assert_eq!(valuation.total_value, Decimal::ZERO);
    }

    #[test]
    fn unknown_symbol_trade_is_not_found() {
        let mut tracker = StockTracker::create_new("Alice", aapl_only());
        assert!(matches!(tracker.buy("TSLA", 1), Err(CoreError::NotFound(_))));
        assert!(matches!(tracker.sell("TSLA", 1), Err(CoreError::NotFound(_))));
        assert!(tracker.transactions().is_empty());
        assert!(!tracker.has_unsaved_changes());
    }

    #[test]
    fn trades_use_updated_price() {
        let mut tracker = StockTracker::create_new("Alice", aapl_only());
        tracker.buy("AAPL", 2).unwrap();
        tracker.update_price("AAPL", dec("160")).unwrap();
        tracker.sell("AAPL", 1).unwrap();

        let prices: Vec<Decimal> = tracker.transactions().iter().map(|t| t.price).collect();
        assert_eq!(prices, vec![dec("150.00"), dec("160")]);
        assert_eq!(tracker.valuation().unwrap().total_value, dec("160"));
    }

    #[test]
    fn update_price_of_unlisted_symbol() {
        let mut tracker = StockTracker::create_new("Alice", aapl_only());
        assert!(matches!(
            tracker.update_price("GOOG", dec("1")),
            Err(CoreError::NotFound(_))
        ));
    }

    #[test]
    fn market_snapshot_and_lookup() {
        let tracker = StockTracker::create_new("Alice", Settings::default().build_market().unwrap());
        let symbols: Vec<&str> = tracker.market_snapshot().iter().map(|s| s.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["AAPL", "GOOG", "TSLA"]);
        assert_eq!(tracker.lookup("TSLA").unwrap().price, dec("700.00"));
        assert_eq!(tracker.market().len(), 3);
    }

    #[test]
    fn export_transactions_to_json() {
        let mut tracker = StockTracker::create_new("Alice", aapl_only());
        tracker.buy("AAPL", 3).unwrap();
        tracker.sell("AAPL", 1).unwrap();

        let json = tracker.export_transactions_to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let records = parsed.as_array().unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["side"], "Buy");
        assert_eq!(records[1]["side"], "Sell");
        assert_eq!(records[1]["quantity"], 1);
    }

    #[test]
    fn debug_summarises_session() {
        let tracker = StockTracker::create_new("Alice", aapl_only());
        let debug = format!("{tracker:?}");
        assert!(debug.contains("StockTracker"));
        assert!(debug.contains("Alice"));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Persistence scenario
// ═══════════════════════════════════════════════════════════════════

mod persistence {
    use super::*;

    fn two_stock_market() -> Market {
        Market::from_prices([("AAPL", dec("150")), ("TSLA", dec("700"))]).unwrap()
    }

    #[test]
    fn save_reload_and_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.txt");

        let mut first = StockTracker::create_new("Alice", two_stock_market());
        first.buy("AAPL", 10).unwrap();
        first.buy("TSLA", 3).unwrap();
        first.save_to_file(&path).unwrap();

        let second = StockTracker::load_from_file("Alice", two_stock_market(), &path).unwrap();

        assert_eq!(second.holdings(), first.holdings());
        assert!(second.transactions().is_empty());
        assert_eq!(second.valuation().unwrap().total_value, dec("3600.00"));
    }

    #[test]
    fn load_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let tracker =
            StockTracker::load_from_file("Alice", two_stock_market(), dir.path().join("none.txt"))
                .unwrap();
        assert!(tracker.holdings().is_empty());
        assert_eq!(tracker.owner(), "Alice");
    }

    #[test]
    fn load_corrupt_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.txt");
        std::fs::write(&path, "AAPL,notanumber\n").unwrap();

        let result = StockTracker::load_from_file("Alice", two_stock_market(), &path);

        assert!(matches!(result, Err(CoreError::CorruptData { .. })));
    }

    #[test]
    fn loaded_holding_missing_from_market_fails_valuation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.txt");
        std::fs::write(&path, "AAPL,1\nNFLX,2\n").unwrap();

        let tracker = StockTracker::load_from_file("Alice", two_stock_market(), &path).unwrap();

        assert!(matches!(tracker.valuation(), Err(CoreError::UnknownSymbol(s)) if s == "NFLX"));
        assert_eq!(tracker.quantity_of("NFLX"), 2);
    }

    #[test]
    fn reload_replaces_holdings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.txt");
        std::fs::write(&path, "TSLA,4\n").unwrap();

        let mut tracker = StockTracker::create_new("Alice", two_stock_market());
        tracker.buy("AAPL", 5).unwrap();
        let count = tracker.reload_from_file(&path).unwrap();

        assert_eq!(count, 1);
        assert_eq!(tracker.quantity_of("AAPL"), 0);
        assert_eq!(tracker.quantity_of("TSLA"), 4);
        assert_eq!(tracker.transactions().len(), 1);
    }

    #[test]
    fn failed_reload_keeps_holdings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.txt");
        std::fs::write(&path, "TSLA;4\n").unwrap();

        let mut tracker = StockTracker::create_new("Alice", two_stock_market());
        tracker.buy("AAPL", 5).unwrap();

        assert!(tracker.reload_from_file(&path).is_err());
        assert_eq!(tracker.quantity_of("AAPL"), 5);
        assert!(tracker.has_unsaved_changes());
    }

    #[test]
    fn dirty_flag_tracks_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.txt");
        let mut tracker = StockTracker::create_new("Alice", two_stock_market());
        assert!(!tracker.has_unsaved_changes());

        tracker.buy("AAPL", 1).unwrap();
        assert!(tracker.has_unsaved_changes());

        tracker.save_to_file(&path).unwrap();
        assert!(!tracker.has_unsaved_changes());

        let _ = tracker.sell("AAPL", 2);
        assert!(!tracker.has_unsaved_changes());
    }

    #[test]
    fn round_trip_keeps_zero_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.txt");

        let mut tracker = StockTracker::create_new("Alice", two_stock_market());
        tracker.buy("TSLA", 2).unwrap();
        tracker.sell("TSLA", 2).unwrap();
        tracker.save_to_file(&path).unwrap();

        let reloaded = StockTracker::load_from_file("Alice", two_stock_market(), &path).unwrap();
        assert_eq!(reloaded.holdings().get("TSLA"), Some(&0));
    }
}

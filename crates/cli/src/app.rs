use std::io::{BufRead, Write};
use std::path::PathBuf;

use stock_tracker_core::errors::CoreError;
use stock_tracker_core::models::market::Market;
use stock_tracker_core::StockTracker;

use crate::render;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    ViewMarket,
    Buy,
    Sell,
    ViewPortfolio,
    ViewTransactions,
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::ViewMarket),
            "2" => Some(Self::Buy),
            "3" => Some(Self::Sell),
            "4" => Some(Self::ViewPortfolio),
            "5" => Some(Self::ViewTransactions),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// An interactive session: the tracker plus where its holdings live.
pub struct Session {
    tracker: StockTracker,
    portfolio_path: PathBuf,
    /// False when the holdings file could not be read, so exiting
    /// does not overwrite it with an empty portfolio.
    save_on_exit: bool,
}

impl Session {
    /// Load holdings from `portfolio_path` and report how it went.
    /// Load failures are reported and the session starts empty.
    pub fn start(
        owner: String,
        market: Market,
        portfolio_path: PathBuf,
        out: &mut impl Write,
    ) -> Result<Self, CoreError> {
        if !portfolio_path.exists() {
            writeln!(out, "No previous portfolio found.")?;
        }

        let (tracker, save_on_exit) =
            match StockTracker::load_from_file(owner.clone(), market.clone(), &portfolio_path) {
                Ok(tracker) => (tracker, true),
                Err(e) => {
                    log::warn!("Failed to load {}: {e}", portfolio_path.display());
                    writeln!(out, "Could not load portfolio: {e}")?;
                    writeln!(
                        out,
                        "Starting with an empty portfolio; {} will not be overwritten.",
                        portfolio_path.display()
                    )?;
                    (StockTracker::create_new(owner, market), false)
                }
            };

        Ok(Self {
            tracker,
            portfolio_path,
            save_on_exit,
        })
    }

    /// Run the menu loop until the user exits or input ends.
    pub fn run(&mut self, input: &mut impl BufRead, out: &mut impl Write) -> Result<(), CoreError> {
        loop {
            render::menu(out)?;
            let Some(line) = read_line(input)? else {
                return self.exit(out);
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::ViewMarket) => {
                    render::market(out, self.tracker.market_snapshot())?;
                }
                Some(MenuChoice::Buy) => self.trade(input, out, MenuChoice::Buy)?,
                Some(MenuChoice::Sell) => self.trade(input, out, MenuChoice::Sell)?,
                Some(MenuChoice::ViewPortfolio) => match self.tracker.valuation() {
                    Ok(valuation) => render::valuation(out, self.tracker.owner(), &valuation)?,
                    Err(e) => writeln!(out, "Cannot value portfolio: {e}")?,
                },
                Some(MenuChoice::ViewTransactions) => {
                    render::transactions(out, self.tracker.ledger())?;
                }
                Some(MenuChoice::Exit) => return self.exit(out),
                None => writeln!(out, "Invalid option.")?,
            }
        }
    }

    fn trade(
        &mut self,
        input: &mut impl BufRead,
        out: &mut impl Write,
        choice: MenuChoice,
    ) -> Result<(), CoreError> {
        let action = if choice == MenuChoice::Buy { "buy" } else { "sell" };
        write!(out, "Enter stock symbol to {action}: ")?;
        out.flush()?;
        let Some(symbol) = read_line(input)? else {
            return Ok(());
        };
        let symbol = symbol.trim().to_uppercase();
        if self.tracker.lookup(&symbol).is_err() {
            writeln!(out, "Invalid symbol.")?;
            return Ok(());
        }

        write!(out, "Enter quantity: ")?;
        out.flush()?;
        let Some(quantity) = read_line(input)? else {
            return Ok(());
        };
        let Ok(quantity) = quantity.trim().parse::<u64>() else {
            writeln!(out, "Invalid quantity.")?;
            return Ok(());
        };

        let result = if choice == MenuChoice::Buy {
            self.tracker.buy(&symbol, quantity)
        } else {
            self.tracker.sell(&symbol, quantity)
        };

        match result {
            Ok(transaction) => render::confirmation(out, &transaction)?,
            Err(CoreError::InsufficientShares { .. }) => writeln!(out, "Not enough shares to sell.")?,
            Err(CoreError::NotFound(_)) => writeln!(out, "Invalid symbol.")?,
            Err(e) => writeln!(out, "{e}")?,
        }
        Ok(())
    }

    fn exit(&mut self, out: &mut impl Write) -> Result<(), CoreError> {
        if !self.save_on_exit {
            writeln!(out, "Portfolio not saved. Goodbye!")?;
            return Ok(());
        }
        match self.tracker.save_to_file(&self.portfolio_path) {
            Ok(()) => writeln!(out, "Portfolio saved. Goodbye!")?,
            Err(e) => {
                log::error!("Saving {} failed: {e}", self.portfolio_path.display());
                writeln!(out, "Error saving portfolio.")?;
            }
        }
        Ok(())
    }
}

/// Read one line; `None` at end of input.
fn read_line(input: &mut impl BufRead) -> Result<Option<String>, CoreError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

use std::io::{self, Write};

use stock_tracker_core::models::ledger::Ledger;
use stock_tracker_core::models::stock::Stock;
use stock_tracker_core::models::transaction::{Side, Transaction};
use stock_tracker_core::models::valuation::Valuation;

pub fn menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "1. View Market")?;
    writeln!(out, "2. Buy Stock")?;
    writeln!(out, "3. Sell Stock")?;
    writeln!(out, "4. View Portfolio")?;
    writeln!(out, "5. View Transactions")?;
    writeln!(out, "6. Exit")?;
    write!(out, "Choose option: ")?;
    out.flush()
}

pub fn market<'a>(out: &mut impl Write, stocks: impl IntoIterator<Item = &'a Stock>) -> io::Result<()> {
    writeln!(out, "\n--- Market Data ---")?;
    for stock in stocks {
        writeln!(out, "{stock}")?;
    }
    Ok(())
}

/// "Bought 10 of AAPL at $150.00"
pub fn confirmation(out: &mut impl Write, transaction: &Transaction) -> io::Result<()> {
    let verb = match transaction.side {
        Side::Buy => "Bought",
        Side::Sell => "Sold",
    };
    writeln!(
        out,
        "{verb} {} of {} at ${:.2}",
        transaction.quantity, transaction.symbol, transaction.price
    )
}

pub fn valuation(out: &mut impl Write, owner: &str, valuation: &Valuation) -> io::Result<()> {
    writeln!(out, "\n--- Portfolio for {owner} ---")?;
    if valuation.is_empty() {
        writeln!(out, "No holdings.")?;
    }
    for line in &valuation.lines {
        writeln!(
            out,
            "{}: {} shares @ ${:.2} = ${:.2}",
            line.symbol, line.quantity, line.unit_price, line.line_value
        )?;
    }
    writeln!(out, "Total Portfolio Value: ${:.2}", valuation.total_value)
}

pub fn transactions(out: &mut impl Write, ledger: &Ledger) -> io::Result<()> {
    writeln!(out, "\n--- Transaction History ---")?;
    if ledger.is_empty() {
        writeln!(out, "No transactions yet.")?;
    }
    for transaction in ledger {
        writeln!(out, "{transaction}")?;
    }
    Ok(())
}

//! Trader Ledger
//!
//! Cumulative per-trader totals, touched only by executed trades.

use crate::engine::entry::Trade;
use crate::engine::error::EngineError;
use serde_derive::Serialize;

/// Totals are kept in `i128`, wide enough for any single trade's cash.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TraderAccount {
    pub trader: u32,
    pub bought: i128,
    pub sold: i128,
    /// Sales minus purchases, in dollars.
    pub net_transfer: i128,
}

impl TraderAccount {
    fn buy(&mut self, shares: i128, amount: i128) -> Result<(), EngineError> {
        let overflow = EngineError::LedgerOverflow {
            trader: self.trader,
        };
        self.bought = self.bought.checked_add(shares).ok_or(overflow.clone())?;
        self.net_transfer = self.net_transfer.checked_sub(amount).ok_or(overflow)?;
        Ok(())
    }

    fn sell(&mut self, shares: i128, amount: i128) -> Result<(), EngineError> {
        let overflow = EngineError::LedgerOverflow {
            trader: self.trader,
        };
        self.sold = self.sold.checked_add(shares).ok_or(overflow.clone())?;
        self.net_transfer = self.net_transfer.checked_add(amount).ok_or(overflow)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct TraderLedger {
    accounts: Vec<TraderAccount>,
}

impl TraderLedger {
    pub fn new(num_traders: u32) -> Self {
        Self {
            accounts: (0..num_traders)
                .map(|trader| TraderAccount {
                    trader,
                    ..TraderAccount::default()
                })
                .collect(),
        }
    }

    /// Debits the buyer and credits the seller.
    ///
    /// Either both sides are updated or neither is: a total that would leave
    /// `i128` fails the whole trade with `LedgerOverflow`.
    pub fn record(&mut self, trade: &Trade) -> Result<(), EngineError> {
        let amount = trade.total_amount();
        let shares = i128::from(trade.quantity);

        let mut buyer = self.snapshot(trade.buyer)?;
        buyer.buy(shares, amount)?;
        let mut seller = if trade.seller == trade.buyer {
            buyer
        } else {
            self.snapshot(trade.seller)?
        };
        seller.sell(shares, amount)?;

        self.accounts[buyer.trader as usize] = buyer;
        self.accounts[seller.trader as usize] = seller;
        Ok(())
    }

    fn snapshot(&self, trader: u32) -> Result<TraderAccount, EngineError> {
        self.accounts
            .get(trader as usize)
            .copied()
            .ok_or(EngineError::UnknownTrader {
                trader,
                num_traders: self.accounts.len() as u32,
            })
    }

    pub fn account(&self, trader: u32) -> Option<&TraderAccount> {
        self.accounts.get(trader as usize)
    }

    pub fn accounts(&self) -> &[TraderAccount] {
        &self.accounts
    }

    /// Sum of every net transfer; zero whenever the ledger is consistent.
    /// Wrapping addition is exact here whenever the true total fits.
    pub fn net_balance(&self) -> i128 {
        self.accounts
            .iter()
            .fold(0i128, |total, a| total.wrapping_add(a.net_transfer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trade(buyer: u32, seller: u32, price: i64, quantity: i64) -> Trade {
        Trade {
            id: 1,
            equity: 0,
            timestamp: 0,
            buyer,
            seller,
            price,
            quantity,
            buy_sequence: 1,
            sell_sequence: 0,
        }
    }

    #[test]
    fn test_record_moves_cash_and_shares() {
        let mut ledger = TraderLedger::new(3);
        ledger.record(&trade(1, 0, 10, 5)).unwrap();
        ledger.record(&trade(1, 2, 4, 2)).unwrap();

        let buyer = ledger.account(1).copied().unwrap_or_default();
        assert_eq!(buyer.bought, 7);
        assert_eq!(buyer.sold, 0);
        assert_eq!(buyer.net_transfer, -58);
        assert_eq!(ledger.account(0).map(|a| a.net_transfer), Some(50));
        assert_eq!(ledger.account(2).map(|a| a.sold), Some(2));
        assert_eq!(ledger.net_balance(), 0);
    }

    #[test]
    fn test_self_trade_nets_to_zero() {
        let mut ledger = TraderLedger::new(1);
        ledger.record(&trade(0, 0, 9, 3)).unwrap();
        let account = ledger.accounts()[0];
        assert_eq!((account.bought, account.sold, account.net_transfer), (3, 3, 0));
    }

    #[test]
    fn test_large_trades_stay_exact() {
        let mut ledger = TraderLedger::new(2);
        let price = 10_000_000_000;
        ledger.record(&trade(1, 0, price, price)).unwrap();
        ledger.record(&trade(1, 0, i64::MAX / 2 + 10, 3)).unwrap();

        let expected = 100_000_000_000_000_000_000i128 + 3 * i128::from(i64::MAX / 2 + 10);
        assert_eq!(ledger.account(0).map(|a| a.net_transfer), Some(expected));
        assert_eq!(ledger.account(1).map(|a| a.net_transfer), Some(-expected));
        assert_eq!(ledger.account(1).map(|a| a.bought), Some(i128::from(price) + 3));
        assert_eq!(ledger.net_balance(), 0);
    }

    #[test]
    fn test_overflow_rejects_whole_trade() {
        let mut ledger = TraderLedger::new(2);
        let largest = trade(1, 0, i64::MAX, i64::MAX);
        ledger.record(&largest).unwrap();
        ledger.record(&largest).unwrap();
        let before = ledger.accounts().to_vec();

        assert_eq!(
            ledger.record(&largest),
            Err(EngineError::LedgerOverflow { trader: 1 })
        );
        assert_eq!(ledger.accounts(), &before[..]);
        assert_eq!(ledger.net_balance(), 0);
    }

    #[test]
    fn test_unknown_trader_leaves_ledger_untouched() {
        let mut ledger = TraderLedger::new(1);
        assert_eq!(
            ledger.record(&trade(0, 4, 10, 1)),
            Err(EngineError::UnknownTrader {
                trader: 4,
                num_traders: 1
            })
        );
        assert_eq!(ledger.account(0).map(|a| a.net_transfer), Some(0));
    }
}

// Strategy: the shopping cart delegates payment to whichever strategy is
// currently plugged in.

use crate::error::{PatternError, Result};

/// Outcome of a single payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub method: String,
    pub amount: u32,
}

impl Receipt {
    pub fn new(method: impl Into<String>, amount: u32) -> Self {
        Self {
            method: method.into(),
            amount,
        }
    }
}

pub trait PaymentStrategy {
    fn pay(&self, amount: u32) -> Receipt;
}

/// Closures work as strategies too.
impl<F> PaymentStrategy for F
where
    F: Fn(u32) -> Receipt,
{
    fn pay(&self, amount: u32) -> Receipt {
        self(amount)
    }
}

// ============================================================================
// Concrete strategies
// ============================================================================

pub struct CreditCardPayment {
    card_number: String,
}

impl CreditCardPayment {
    pub fn new(card_number: impl Into<String>) -> Self {
        Self {
            card_number: card_number.into(),
        }
    }

    /// The last four digits, the only part of the number a receipt shows.
    fn last_four(&self) -> String {
        let digits: Vec<char> = self
            .card_number
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        digits[digits.len().saturating_sub(4)..].iter().collect()
    }
}

impl PaymentStrategy for CreditCardPayment {
    fn pay(&self, amount: u32) -> Receipt {
        Receipt::new(format!("Credit Card ending {}", self.last_four()), amount)
    }
}

pub struct DebitCardPayment;

impl PaymentStrategy for DebitCardPayment {
    fn pay(&self, amount: u32) -> Receipt {
        Receipt::new("Debit Card", amount)
    }
}

pub struct PayPalPayment {
    email: String,
}

impl PayPalPayment {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

impl PaymentStrategy for PayPalPayment {
    fn pay(&self, amount: u32) -> Receipt {
        Receipt::new(format!("PayPal ({})", self.email), amount)
    }
}

pub struct UpiPayment;

impl PaymentStrategy for UpiPayment {
    fn pay(&self, amount: u32) -> Receipt {
        Receipt::new("UPI", amount)
    }
}

// ============================================================================
// Context
// ============================================================================

#[derive(Default)]
pub struct ShoppingCart {
    strategy: Option<Box<dyn PaymentStrategy>>,
}

impl ShoppingCart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_payment_strategy(&mut self, strategy: Box<dyn PaymentStrategy>) {
        self.strategy = Some(strategy);
    }

    pub fn has_strategy(&self) -> bool {
        self.strategy.is_some()
    }

    pub fn checkout(&self, amount: u32) -> Result<Receipt> {
        let strategy = self
            .strategy
            .as_ref()
            .ok_or(PatternError::not_configured("payment strategy"))?;
        Ok(strategy.pay(amount))
    }
}

// Facade: one entry point that sequences the order subsystems.
//
// The subsystems are plain public types. They know nothing about the facade
// and can still be driven directly.

use tracing::debug;

#[derive(Debug, Default)]
pub struct Inventory {
    reserved: Vec<String>,
}

impl Inventory {
    pub fn reserve(&mut self, item: &str) -> String {
        self.reserved.push(item.to_string());
        format!("Reserved {item}")
    }

    pub fn reserved(&self) -> &[String] {
        &self.reserved
    }
}

#[derive(Debug, Default)]
pub struct Payments {
    charges: usize,
}

impl Payments {
    pub fn charge(&mut self, item: &str) -> String {
        self.charges += 1;
        format!("Charged for {item}")
    }

    pub fn charges(&self) -> usize {
        self.charges
    }
}

#[derive(Debug, Default)]
pub struct Shipping {
    shipments: usize,
}

impl Shipping {
    pub fn dispatch(&mut self, item: &str) -> String {
        self.shipments += 1;
        format!("Shipped {item}")
    }

    pub fn shipments(&self) -> usize {
        self.shipments
    }
}

#[derive(Debug, Default)]
pub struct OrderFacade {
    inventory: Inventory,
    payments: Payments,
    shipping: Shipping,
}

impl OrderFacade {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves, charges, then ships `item`. Returns one log line per step.
    pub fn place_order(&mut self, item: &str) -> Vec<String> {
        debug!(item, "placing order");
        vec![
            self.inventory.reserve(item),
            self.payments.charge(item),
            self.shipping.dispatch(item),
        ]
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn payments(&self) -> &Payments {
        &self.payments
    }

    pub fn shipping(&self) -> &Shipping {
        &self.shipping
    }

    pub fn shipping_mut(&mut self) -> &mut Shipping {
        &mut self.shipping
    }
}

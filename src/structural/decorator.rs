// Decorator: wrap a cake in toppings, each adding to the description and
// the price of whatever it wraps.

pub trait Cake {
    fn description(&self) -> String;
    fn cost(&self) -> f64;
}

impl<C: Cake + ?Sized> Cake for Box<C> {
    fn description(&self) -> String {
        (**self).description()
    }

    fn cost(&self) -> f64 {
        (**self).cost()
    }
}

pub struct SimpleCake;

impl Cake for SimpleCake {
    fn description(&self) -> String {
        "Simple Cake".to_string()
    }

    fn cost(&self) -> f64 {
        10.0
    }
}

pub struct Chocolate<C> {
    inner: C,
}

impl<C: Cake> Chocolate<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<C: Cake> Cake for Chocolate<C> {
    fn description(&self) -> String {
        format!("{}, Chocolate", self.inner.description())
    }

    fn cost(&self) -> f64 {
        self.inner.cost() + 5.0
    }
}

pub struct Sprinkles<C> {
    inner: C,
}

impl<C: Cake> Sprinkles<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<C: Cake> Cake for Sprinkles<C> {
    fn description(&self) -> String {
        format!("{}, Sprinkles", self.inner.description())
    }

    fn cost(&self) -> f64 {
        self.inner.cost() + 3.0
    }
}

/// Fluent wrapping: `SimpleCake.with_chocolate().with_sprinkles()`.
pub trait CakeExt: Cake + Sized {
    fn with_chocolate(self) -> Chocolate<Self> {
        Chocolate::new(self)
    }

    fn with_sprinkles(self) -> Sprinkles<Self> {
        Sprinkles::new(self)
    }

    fn boxed(self) -> Box<dyn Cake>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<C: Cake> CakeExt for C {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_plain_cake() {
        assert_eq!(SimpleCake.description(), "Simple Cake");
        assert_eq!(SimpleCake.cost(), 10.0);
    }

    #[test]
    fn test_cost_ignores_wrap_order() {
        let chocolate_first = Sprinkles::new(Chocolate::new(SimpleCake));
        let sprinkles_first = SimpleCake.with_sprinkles().with_chocolate();

        assert_eq!(chocolate_first.cost(), 18.0);
        assert_eq!(sprinkles_first.cost(), 18.0);
        assert_eq!(
            chocolate_first.description(),
            "Simple Cake, Chocolate, Sprinkles"
        );
        assert_eq!(
            sprinkles_first.description(),
            "Simple Cake, Sprinkles, Chocolate"
        );
    }

    #[test]
    fn test_runtime_stacking() {
        let mut cake: Box<dyn Cake> = SimpleCake.boxed();
        for _ in 0..2 {
            cake = Box::new(Chocolate::new(cake));
        }

        assert_eq!(cake.cost(), 20.0);
        assert_eq!(cake.description(), "Simple Cake, Chocolate, Chocolate");
    }

    proptest! {
        #[test]
        fn test_any_stack_costs_base_plus_toppings(
            layers in prop::collection::vec(any::<bool>(), 0..8)
        ) {
            let mut cake: Box<dyn Cake> = SimpleCake.boxed();
            let mut expected = 10.0;
            for chocolate in &layers {
                if *chocolate {
                    cake = cake.with_chocolate().boxed();
                    expected += 5.0;
                } else {
                    cake = cake.with_sprinkles().boxed();
                    expected += 3.0;
                }
            }

            prop_assert_eq!(cake.cost(), expected);
            prop_assert_eq!(cake.description().matches(", ").count(), layers.len());
        }
    }
}

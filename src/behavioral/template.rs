// Template Method: a fixed algorithm whose individual steps are supplied by
// the implementor.
//
// The step traits (`PizzaRecipe`, `DataParser`) are open for implementation.
// The skeleton traits (`MakePizza`, `Parse`) are sealed and have exactly one
// blanket implementation, so no type can reorder or skip steps.

use tracing::trace;

mod sealed {
    pub trait Pizza {}
    pub trait Parser {}

    impl<T: super::PizzaRecipe> Pizza for T {}
    impl<T: super::DataParser> Parser for T {}
}

// ============================================================================
// Pizza
// ============================================================================

pub trait PizzaRecipe {
    fn prepare_dough(&self) -> String;
    fn add_sauce(&self) -> String;
    fn add_toppings(&self) -> String;
    fn bake(&self) -> String;

    /// Hook: extra cheese is off unless a recipe asks for it.
    fn wants_extra_cheese(&self) -> bool {
        false
    }
}

pub trait MakePizza: sealed::Pizza {
    /// Runs every step in order and returns what each one did.
    fn make_pizza(&self) -> Vec<String>;
}

impl<T: PizzaRecipe> MakePizza for T {
    fn make_pizza(&self) -> Vec<String> {
        let mut steps = vec![
            self.prepare_dough(),
            self.add_sauce(),
            self.add_toppings(),
            self.bake(),
        ];
        if self.wants_extra_cheese() {
            steps.push(add_extra_cheese());
        }
        trace!(steps = steps.len(), "pizza made");
        steps
    }
}

fn add_extra_cheese() -> String {
    "Adding extra cheese...".to_string()
}

pub struct VegPizza;

impl PizzaRecipe for VegPizza {
    fn prepare_dough(&self) -> String {
        "Preparing veggie dough...".to_string()
    }

    fn add_sauce(&self) -> String {
        "Adding tomato sauce...".to_string()
    }

    fn add_toppings(&self) -> String {
        "Adding vegetables...".to_string()
    }

    fn bake(&self) -> String {
        "Baking at 200°C for 15 minutes...".to_string()
    }

    fn wants_extra_cheese(&self) -> bool {
        true
    }
}

pub struct NonVegPizza;

impl PizzaRecipe for NonVegPizza {
    fn prepare_dough(&self) -> String {
        "Preparing non-veg dough...".to_string()
    }

    fn add_sauce(&self) -> String {
        "Adding BBQ sauce...".to_string()
    }

    fn add_toppings(&self) -> String {
        "Adding meat toppings...".to_string()
    }

    fn bake(&self) -> String {
        "Baking at 220°C for 20 minutes...".to_string()
    }
}

// ============================================================================
// Data parser
// ============================================================================

pub trait DataParser {
    fn open_file(&self) -> String {
        "Open file".to_string()
    }

    fn parse_data(&self) -> String;

    fn close_file(&self) -> String {
        "Close file".to_string()
    }
}

pub trait Parse: sealed::Parser {
    fn parse(&self) -> Vec<String>;
}

impl<T: DataParser> Parse for T {
    fn parse(&self) -> Vec<String> {
        vec![self.open_file(), self.parse_data(), self.close_file()]
    }
}

pub struct JsonParser;

impl DataParser for JsonParser {
    fn parse_data(&self) -> String {
        "Parsing JSON file".to_string()
    }
}

pub struct CsvParser;

impl DataParser for CsvParser {
    fn parse_data(&self) -> String {
        "Parsing CSV file".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_veg_pizza_runs_hook() {
        let steps = VegPizza.make_pizza();
        assert_eq!(steps.len(), 5);
        assert_eq!(steps[0], "Preparing veggie dough...");
        assert_eq!(steps[4], "Adding extra cheese...");
    }

    #[test]
    fn test_non_veg_pizza_skips_hook() {
        let steps = NonVegPizza.make_pizza();
        assert_eq!(
            steps,
            vec![
                "Preparing non-veg dough...",
                "Adding BBQ sauce...",
                "Adding meat toppings...",
                "Baking at 220°C for 20 minutes...",
            ]
        );
    }

    #[test]
    fn test_custom_recipe_keeps_order() {
        struct Margherita;
        impl PizzaRecipe for Margherita {
            fn prepare_dough(&self) -> String {
                "1".into()
            }
            fn add_sauce(&self) -> String {
                "2".into()
            }
            fn add_toppings(&self) -> String {
                "3".into()
            }
            fn bake(&self) -> String {
                "4".into()
            }
        }

        assert_eq!(Margherita.make_pizza(), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_parsers_share_open_and_close() {
        assert_eq!(
            JsonParser.parse(),
            vec!["Open file", "Parsing JSON file", "Close file"]
        );
        assert_eq!(
            CsvParser.parse(),
            vec!["Open file", "Parsing CSV file", "Close file"]
        );
    }

    #[test]
    fn test_parser_can_override_defaults() {
        struct Stdin;
        impl DataParser for Stdin {
            fn open_file(&self) -> String {
                "Attach stdin".into()
            }
            fn parse_data(&self) -> String {
                "Parsing lines".into()
            }
        }

        assert_eq!(
            Stdin.parse(),
            vec!["Attach stdin", "Parsing lines", "Close file"]
        );
    }
}

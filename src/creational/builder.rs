// Builder: assemble a `House` field by field, then produce it in one step.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct House {
    floors: u32,
    bedrooms: u32,
    bathrooms: u32,
    has_garage: bool,
    has_swimming_pool: bool,
}

impl House {
    pub fn builder() -> HouseBuilder {
        HouseBuilder::new()
    }

    pub fn floors(&self) -> u32 {
        self.floors
    }

    pub fn bedrooms(&self) -> u32 {
        self.bedrooms
    }

    pub fn bathrooms(&self) -> u32 {
        self.bathrooms
    }

    pub fn has_garage(&self) -> bool {
        self.has_garage
    }

    pub fn has_swimming_pool(&self) -> bool {
        self.has_swimming_pool
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "House{{floors={}, bedrooms={}, bathrooms={}, hasGarage={}, hasSwimmingPool={}}}",
            self.floors, self.bedrooms, self.bathrooms, self.has_garage, self.has_swimming_pool
        )
    }
}

/// Non-consuming builder: setters take `&mut self`, `build` only borrows.
///
/// Unset fields default to one floor, one bedroom, one bathroom, no garage
/// and no swimming pool.
#[derive(Debug, Clone, Default)]
pub struct HouseBuilder {
    floors: Option<u32>,
    bedrooms: Option<u32>,
    bathrooms: Option<u32>,
    has_garage: bool,
    has_swimming_pool: bool,
}

impl HouseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn floors(&mut self, floors: u32) -> &mut Self {
        self.floors = Some(floors);
        self
    }

    pub fn bedrooms(&mut self, bedrooms: u32) -> &mut Self {
        self.bedrooms = Some(bedrooms);
        self
    }

    pub fn bathrooms(&mut self, bathrooms: u32) -> &mut Self {
        self.bathrooms = Some(bathrooms);
        self
    }

    pub fn garage(&mut self, has_garage: bool) -> &mut Self {
        self.has_garage = has_garage;
        self
    }

    pub fn swimming_pool(&mut self, has_swimming_pool: bool) -> &mut Self {
        self.has_swimming_pool = has_swimming_pool;
        self
    }

    pub fn build(&self) -> House {
        House {
            floors: self.floors.unwrap_or(1),
            bedrooms: self.bedrooms.unwrap_or(1),
            bathrooms: self.bathrooms.unwrap_or(1),
            has_garage: self.has_garage,
            has_swimming_pool: self.has_swimming_pool,
        }
    }

    /// Forgets every value set so far.
    pub fn reset(&mut self) -> &mut Self {
        *self = Self::default();
        self
    }
}

/// Encodes the canonical family-home recipe.
pub struct HouseDirector;

impl HouseDirector {
    pub fn construct(builder: &mut HouseBuilder) -> House {
        builder
            .floors(2)
            .bedrooms(3)
            .bathrooms(2)
            .garage(true)
            .swimming_pool(false)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_defaults() {
        let house = House::builder().build();
        assert_eq!(house.floors(), 1);
        assert_eq!(house.bedrooms(), 1);
        assert_eq!(house.bathrooms(), 1);
        assert!(!house.has_garage());
        assert!(!house.has_swimming_pool());
    }

    #[test]
    fn test_chained_setters() {
        let house = House::builder()
            .floors(2)
            .bedrooms(4)
            .bathrooms(3)
            .garage(true)
            .swimming_pool(true)
            .build();

        assert_eq!(
            house.to_string(),
            "House{floors=2, bedrooms=4, bathrooms=3, hasGarage=true, hasSwimmingPool=true}"
        );
    }

    #[test]
    fn test_director_recipe() {
        let house = HouseDirector::construct(&mut HouseBuilder::new());
        assert_eq!(house.floors(), 2);
        assert_eq!(house.bedrooms(), 3);
        assert_eq!(house.bathrooms(), 2);
        assert!(house.has_garage());
        assert!(!house.has_swimming_pool());
    }

    #[test]
    fn test_reset() {
        let mut builder = HouseBuilder::new();
        builder.floors(5).garage(true);
        builder.reset();
        assert_eq!(builder.build(), House::builder().build());
    }

    #[test]
    fn test_builder_can_be_reused() {
        let mut builder = HouseBuilder::new();
        builder.bedrooms(2);
        let small = builder.build();
        builder.bedrooms(6);
        let large = builder.build();

        assert_eq!(small.bedrooms(), 2);
        assert_eq!(large.bedrooms(), 6);
    }

    proptest! {
        #[test]
        fn test_build_twice_is_equivalent(
            floors in 0u32..10,
            bedrooms in 0u32..10,
            garage in any::<bool>(),
            pool in any::<bool>()
        ) {
            let mut builder = HouseBuilder::new();
            builder.floors(floors).bedrooms(bedrooms).garage(garage).swimming_pool(pool);

            let first = builder.build();
            let second = builder.build();
            prop_assert_eq!(first, second);
        }
    }
}

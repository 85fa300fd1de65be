// Factory Method: creators that each produce one kind of vehicle.

use std::str::FromStr;

use crate::error::PatternError;

pub trait Vehicle {
    fn drive(&self) -> String;
    fn wheels(&self) -> u32;
}

pub struct Car;

impl Vehicle for Car {
    fn drive(&self) -> String {
        "Driving a car".to_string()
    }

    fn wheels(&self) -> u32 {
        4
    }
}

pub struct Truck;

impl Vehicle for Truck {
    fn drive(&self) -> String {
        "Driving a truck".to_string()
    }

    fn wheels(&self) -> u32 {
        6
    }
}

pub trait VehicleFactory {
    fn create_vehicle(&self) -> Box<dyn Vehicle>;
}

pub struct CarFactory;

impl VehicleFactory for CarFactory {
    fn create_vehicle(&self) -> Box<dyn Vehicle> {
        Box::new(Car)
    }
}

pub struct TruckFactory;

impl VehicleFactory for TruckFactory {
    fn create_vehicle(&self) -> Box<dyn Vehicle> {
        Box::new(Truck)
    }
}

/// Variant selection by value instead of by factory type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleKind {
    Car,
    Truck,
}

impl VehicleKind {
    pub fn factory(self) -> Box<dyn VehicleFactory> {
        match self {
            VehicleKind::Car => Box::new(CarFactory),
            VehicleKind::Truck => Box::new(TruckFactory),
        }
    }

    pub fn create(self) -> Box<dyn Vehicle> {
        self.factory().create_vehicle()
    }
}

impl FromStr for VehicleKind {
    type Err = PatternError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "car" => Ok(VehicleKind::Car),
            "truck" => Ok(VehicleKind::Truck),
            _ => Err(PatternError::unknown_variant("vehicle", name)),
        }
    }
}

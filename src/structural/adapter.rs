// Adapter: present a Celsius source through the Fahrenheit interface a
// client expects.

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Celsius(pub f64);

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Fahrenheit(pub f64);

impl From<Celsius> for Fahrenheit {
    fn from(celsius: Celsius) -> Self {
        Fahrenheit(celsius.0 * 9.0 / 5.0 + 32.0)
    }
}

impl From<Fahrenheit> for Celsius {
    fn from(fahrenheit: Fahrenheit) -> Self {
        Celsius((fahrenheit.0 - 32.0) * 5.0 / 9.0)
    }
}

/// Interface of the existing component.
pub trait TemperatureProvider {
    fn celsius(&self) -> Celsius;
}

/// Interface the client was written against.
pub trait FahrenheitProvider {
    fn fahrenheit(&self) -> Fahrenheit;
}

/// Sensor that reports a fixed Celsius reading.
#[derive(Debug, Clone, Copy)]
pub struct CelsiusSensor {
    reading: Celsius,
}

impl CelsiusSensor {
    pub fn new(reading: f64) -> Self {
        Self {
            reading: Celsius(reading),
        }
    }
}

impl TemperatureProvider for CelsiusSensor {
    fn celsius(&self) -> Celsius {
        self.reading
    }
}

impl<P: TemperatureProvider + ?Sized> TemperatureProvider for Box<P> {
    fn celsius(&self) -> Celsius {
        (**self).celsius()
    }
}

/// Converts at the boundary call; the wrapped source is untouched.
pub struct TemperatureAdapter<P> {
    source: P,
}

impl<P: TemperatureProvider> TemperatureAdapter<P> {
    pub fn new(source: P) -> Self {
        Self { source }
    }

    pub fn into_inner(self) -> P {
        self.source
    }
}

impl<P: TemperatureProvider> FahrenheitProvider for TemperatureAdapter<P> {
    fn fahrenheit(&self) -> Fahrenheit {
        self.source.celsius().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_adapter_converts() {
        let adapter = TemperatureAdapter::new(CelsiusSensor::new(25.0));
        assert!(approx(adapter.fahrenheit().0, 77.0));
    }

    #[test]
    fn test_known_points() {
        assert_eq!(Fahrenheit::from(Celsius(0.0)), Fahrenheit(32.0));
        assert_eq!(Fahrenheit::from(Celsius(100.0)), Fahrenheit(212.0));
        assert!(approx(Fahrenheit::from(Celsius(-40.0)).0, -40.0));
    }

    #[test]
    fn test_round_trip_through_newtypes() {
        let back = Celsius::from(Fahrenheit::from(Celsius(37.5)));
        assert!(approx(back.0, 37.5));
    }

    #[test]
    fn test_adapts_boxed_provider() {
        let boxed: Box<dyn TemperatureProvider> = Box::new(CelsiusSensor::new(-10.0));
        let adapter = TemperatureAdapter::new(boxed);
        assert!(approx(adapter.fahrenheit().0, 14.0));
        assert_eq!(adapter.into_inner().celsius(), Celsius(-10.0));
    }
}

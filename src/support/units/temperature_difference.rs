use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Subtracts two absolute temperatures to get an interval.
///
/// [`uom`] keeps absolute temperatures and temperature intervals apart, and
/// does not offer this subtraction directly. See
/// [#380](https://github.com/iliekturtles/uom/issues/380).
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

/// Offsets an absolute temperature by an interval.
pub trait TemperatureShift {
    /// Returns the temperature `self + delta`.
    fn plus(self, delta: TemperatureInterval) -> ThermodynamicTemperature;
}

impl TemperatureShift for ThermodynamicTemperature {
    fn plus(self, delta: TemperatureInterval) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<abs_kelvin>(
            self.get::<abs_kelvin>() + delta.get::<delta_kelvin>(),
        )
    }
}

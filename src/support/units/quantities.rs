use uom::{
    si::{
        ISQ, Quantity, SI,
        area::square_meter,
        f64::{Area, Length, TemperatureInterval, Time},
        length::kilometer,
        temperature_interval::degree_celsius as delta_celsius,
        time::second,
    },
    typenum::{N1, P1, P2, Z0},
};

/// Thermal diffusivity, m²/s in SI.
pub type ThermalDiffusivity = Quantity<ISQ<P2, Z0, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Temperature change per unit depth, K/m in SI.
pub type GeothermalGradient = Quantity<ISQ<N1, Z0, Z0, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Builds a diffusivity from a value in mm²/s, the unit rock tables use.
#[must_use]
pub(crate) fn diffusivity_from_mm2_per_s(value: f64) -> ThermalDiffusivity {
    Area::new::<square_meter>(value * 1e-6) / Time::new::<second>(1.0)
}

/// Builds a gradient from a value in °C/km.
#[must_use]
pub(crate) fn gradient_from_celsius_per_km(value: f64) -> GeothermalGradient {
    TemperatureInterval::new::<delta_celsius>(value) / Length::new::<kilometer>(1.0)
}

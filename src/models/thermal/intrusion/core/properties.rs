//! Physical quantities resolved from a parameter set.

use uom::si::{
    area::square_meter,
    f64::{
        Area, Length, TemperatureInterval, ThermalConductivity, ThermodynamicTemperature, Time,
    },
    length::{kilometer, meter},
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
    time::second,
};

use crate::{
    registry::ParameterSet,
    support::units::{
        TemperatureDifference, TemperatureShift, ThermalDiffusivity, diffusivity_from_mm2_per_s,
        gradient_from_celsius_per_km,
    },
};

/// Thermal state and transport of one intrusion.
#[derive(Debug, Clone, Copy)]
pub(super) struct Properties {
    /// Host-rock temperature at emplacement depth.
    pub(super) ambient: ThermodynamicTemperature,
    /// Initial excess of the magma over the host rock.
    pub(super) excess: TemperatureInterval,
    /// Diffusivity that governs the spread of heat across the contact.
    pub(super) diffusivity: ThermalDiffusivity,
}

impl Properties {
    pub(super) fn of(set: &ParameterSet) -> Self {
        let rise: TemperatureInterval = gradient_from_celsius_per_km(set.gradient)
            * Length::new::<kilometer>(set.depth);
        let ambient = ThermodynamicTemperature::new::<degree_celsius>(0.0).plus(rise);
        let initial = ThermodynamicTemperature::new::<degree_celsius>(set.initial_temperature);

        Self {
            ambient,
            excess: initial.minus(ambient),
            diffusivity: effective_diffusivity(
                Medium {
                    conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(
                        set.magma_conductivity,
                    ),
                    diffusivity: diffusivity_from_mm2_per_s(set.magma_diffusivity),
                },
                Medium {
                    conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(
                        set.rock_conductivity,
                    ),
                    diffusivity: diffusivity_from_mm2_per_s(set.rock_diffusivity),
                },
            ),
        }
    }

    /// Temperature after the excess has been scaled by `factor`.
    pub(super) fn temperature(&self, factor: f64) -> ThermodynamicTemperature {
        self.ambient.plus(self.excess * factor)
    }
}

#[derive(Debug, Clone, Copy)]
pub(super) struct Medium {
    pub(super) conductivity: ThermalConductivity,
    pub(super) diffusivity: ThermalDiffusivity,
}

/// Effusivity-weighted diffusivity of two media in contact:
/// `√κ = (K₁ + K₂) / (K₁/√κ₁ + K₂/√κ₂)`.
///
/// Square roots of diffusivity have no [`uom`] dimension, so the weighting
/// runs on SI values. Only the ratio of the conductivities matters; both
/// are scaled by the larger one so that no finite pair overflows.
pub(super) fn effective_diffusivity(magma: Medium, rock: Medium) -> ThermalDiffusivity {
    let k_magma = magma.conductivity.get::<watt_per_meter_kelvin>();
    let k_rock = rock.conductivity.get::<watt_per_meter_kelvin>();
    let largest = k_magma.max(k_rock);
    let (k_magma, k_rock) = (k_magma / largest, k_rock / largest);
    let root = (k_magma + k_rock)
        / (k_magma / magma.diffusivity.value.sqrt() + k_rock / rock.diffusivity.value.sqrt());

    Area::new::<square_meter>(root * root) / Time::new::<second>(1.0)
}

/// Characteristic size in metres as a [`Length`].
pub(super) fn size(set: &ParameterSet) -> Length {
    Length::new::<meter>(set.size)
}

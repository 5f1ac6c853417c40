use serde::{Deserialize, Serialize};

/// One sample of a cooling curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Sample time, in the evaluator's time unit.
    pub time: f64,
    /// Temperature, °C.
    pub temperature: f64,
}

/// Temperature against time at a fixed distance from the contact.
///
/// Points follow the order of the time grid they were evaluated on. At the
/// contact the temperatures never increase. Away from it the rock starts at
/// ambient, so the curve first warms as heat arrives and then cools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureCurve {
    points: Vec<CurvePoint>,
    distance: f64,
    ambient: f64,
}

impl TemperatureCurve {
    pub(crate) fn new(points: Vec<CurvePoint>, distance: f64, ambient: f64) -> Self {
        Self {
            points,
            distance,
            ambient,
        }
    }

    #[must_use]
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Sample times, in grid order.
    #[must_use]
    pub fn times(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.time).collect()
    }

    /// Temperatures in °C, in grid order.
    #[must_use]
    pub fn temperatures(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.temperature).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&CurvePoint> {
        self.points.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&CurvePoint> {
        self.points.last()
    }

    /// Host-rock temperature the curve decays towards, °C.
    #[must_use]
    pub fn ambient(&self) -> f64 {
        self.ambient
    }

    /// Distance from the contact, m.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn iter(&self) -> impl Iterator<Item = &CurvePoint> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a TemperatureCurve {
    type Item = &'a CurvePoint;
    type IntoIter = std::slice::Iter<'a, CurvePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// One sample of a spatial profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfilePoint {
    /// Distance from the contact, m.
    pub distance: f64,
    /// Temperature, °C.
    pub temperature: f64,
}

/// Temperature against distance from the contact at a fixed time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureProfile {
    points: Vec<ProfilePoint>,
    time: f64,
    ambient: f64,
}

impl TemperatureProfile {
    pub(crate) fn new(points: Vec<ProfilePoint>, time: f64, ambient: f64) -> Self {
        Self {
            points,
            time,
            ambient,
        }
    }

    #[must_use]
    pub fn points(&self) -> &[ProfilePoint] {
        &self.points
    }

    /// Distances in m, in caller order.
    #[must_use]
    pub fn distances(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.distance).collect()
    }

    /// Temperatures in °C, in caller order.
    #[must_use]
    pub fn temperatures(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.temperature).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Evaluation time, in the evaluator's time unit.
    #[must_use]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Host-rock temperature far from the body, °C.
    #[must_use]
    pub fn ambient(&self) -> f64 {
        self.ambient
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProfilePoint> {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve() -> TemperatureCurve {
        TemperatureCurve::new(
            vec![
                CurvePoint {
                    time: 1.0,
                    temperature: 715.5,
                },
                CurvePoint {
                    time: 10.0,
                    temperature: 714.4,
                },
            ],
            0.0,
            594.0,
        )
    }

    #[test]
    fn accessors_follow_point_order() {
        let curve = curve();
        assert_eq!(curve.len(), 2);
        assert!(!curve.is_empty());
        assert_eq!(curve.times(), [1.0, 10.0]);
        assert_eq!(curve.temperatures(), [715.5, 714.4]);
        assert_eq!(curve.first().map(|p| p.time), Some(1.0));
        assert_eq!(curve.last().map(|p| p.temperature), Some(714.4));
        assert_eq!((&curve).into_iter().count(), 2);
    }

    #[test]
    fn serializes_as_plain_data() {
        let json = serde_json::to_value(curve()).unwrap();
        assert_eq!(json["ambient"], 594.0);
        assert_eq!(json["points"][1]["temperature"], 714.4);

        let back: TemperatureCurve = serde_json::from_value(json).unwrap();
        assert_eq!(back, curve());
    }
}

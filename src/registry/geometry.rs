use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Idealized shape of an intrusive body.
///
/// Each shape has its own closed-form conduction solution. The size `d` of
/// a parameter set is the half-thickness of a [`Plane`](Self::Plane) and
/// the radius of a [`Cylinder`](Self::Cylinder) or [`Sphere`](Self::Sphere).
///
/// Datasets may use either the short names or the descriptive labels
/// (`"Tabular-like body"`, `"Plug-like body"`, `"Spheric-like body"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Geometry {
    /// Tabular body (dyke or sill) of infinite lateral extent.
    #[serde(alias = "Tabular-like body")]
    Plane,
    /// Plug or stock: an infinitely long circular cylinder.
    #[serde(alias = "Plug-like body")]
    Cylinder,
    /// Spheric body.
    #[serde(alias = "Spheric-like body")]
    Sphere,
}

impl Geometry {
    /// Every geometry, in presentation order.
    pub const ALL: [Geometry; 3] = [Geometry::Plane, Geometry::Cylinder, Geometry::Sphere];

    /// Descriptive label used by input forms.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Geometry::Plane => "Tabular-like body",
            Geometry::Cylinder => "Plug-like body",
            Geometry::Sphere => "Spheric-like body",
        }
    }

    /// What the characteristic size `d` measures for this geometry.
    #[must_use]
    pub fn size_description(self) -> &'static str {
        match self {
            Geometry::Plane => "half the width of the heated area (-d < x < d)",
            Geometry::Cylinder => "radius of the cylindrical plug",
            Geometry::Sphere => "radius of the sphere",
        }
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Geometry::Plane => "Plane",
            Geometry::Cylinder => "Cylinder",
            Geometry::Sphere => "Sphere",
        };
        f.write_str(name)
    }
}

/// The text names no known geometry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown geometry `{0}`")]
pub struct UnknownGeometry(pub String);

impl FromStr for Geometry {
    type Err = UnknownGeometry;

    /// Parses a short name or descriptive label, ignoring case and
    /// surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Geometry::ALL
            .into_iter()
            .find(|geometry| {
                wanted.eq_ignore_ascii_case(&geometry.to_string())
                    || wanted.eq_ignore_ascii_case(geometry.label())
            })
            .ok_or_else(|| UnknownGeometry(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_labels() {
        assert_eq!("Sphere".parse(), Ok(Geometry::Sphere));
        assert_eq!(" plane ".parse(), Ok(Geometry::Plane));
        assert_eq!("Plug-like body".parse(), Ok(Geometry::Cylinder));
        assert_eq!(
            "laccolith".parse::<Geometry>(),
            Err(UnknownGeometry("laccolith".into()))
        );
    }

    #[test]
    fn deserializes_original_labels() {
        let geometry: Geometry = serde_json::from_str("\"Tabular-like body\"").unwrap();
        assert_eq!(geometry, Geometry::Plane);

        let geometry: Geometry = serde_json::from_str("\"Cylinder\"").unwrap();
        assert_eq!(geometry, Geometry::Cylinder);

        assert!(serde_json::from_str::<Geometry>("\"Cube\"").is_err());
    }

    #[test]
    fn serializes_short_names() {
        assert_eq!(
            serde_json::to_string(&Geometry::Sphere).unwrap(),
            "\"Sphere\""
        );
    }
}

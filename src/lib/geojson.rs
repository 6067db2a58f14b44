use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// A single `[lon, lat, ...]` position of a polygon ring.
pub type Position = Vec<Number>;

/// A property value or point coordinate. Numbers are written in serde_json's
/// shortest form, so `1.0e2` becomes `100.0`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(from = "Value", into = "Value")]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(Number),
    Text(String),
    /// Arrays and objects, which map servers occasionally put into properties.
    Nested(Value),
}

impl From<Value> for Scalar {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Scalar::Null,
            Value::Bool(b) => Scalar::Bool(b),
            Value::Number(n) => Scalar::Number(n),
            Value::String(s) => Scalar::Text(s),
            nested => Scalar::Nested(nested),
        }
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Null => Value::Null,
            Scalar::Bool(b) => Value::Bool(b),
            Scalar::Number(n) => Value::Number(n),
            Scalar::Text(s) => Value::String(s),
            Scalar::Nested(v) => v,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => Ok(()),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Text(s) => f.write_str(s),
            Scalar::Nested(v) => write!(f, "{}", v),
        }
    }
}

#[derive(Deserialize)]
struct RawGeometry {
    #[serde(rename = "type", default)]
    kind: Value,
    #[serde(default)]
    coordinates: Value,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(from = "RawGeometry")]
pub enum Geometry {
    /// Each element degrades on its own, `[null, 35.2]` keeps its latitude.
    Point {
        coordinates: Vec<Scalar>,
    },
    Polygon {
        coordinates: Vec<Vec<Position>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Position>>>,
    },
    /// Any other type, or a known type whose coordinates don't have the expected shape.
    Other {
        kind: String,
        coordinates: Value,
    },
}

impl From<RawGeometry> for Geometry {
    fn from(raw: RawGeometry) -> Self {
        let RawGeometry { kind, coordinates } = raw;
        let kind = match kind {
            Value::Null => String::new(),
            Value::String(s) => s,
            other => other.to_string(),
        };
        let typed = match kind.as_str() {
            // coordinates that aren't an array give a point without a position
            "Point" => Some(Geometry::Point {
                coordinates: Vec::<Scalar>::deserialize(&coordinates).unwrap_or_default(),
            }),
            "Polygon" => Vec::<Vec<Position>>::deserialize(&coordinates)
                .ok()
                .map(|coordinates| Geometry::Polygon { coordinates }),
            "MultiPolygon" => Vec::<Vec<Vec<Position>>>::deserialize(&coordinates)
                .ok()
                .map(|coordinates| Geometry::MultiPolygon { coordinates }),
            _ => None,
        };
        typed.unwrap_or(Geometry::Other { kind, coordinates })
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

impl Geometry {
    /// The GeoJSON `type` tag.
    pub fn kind(&self) -> &str {
        match self {
            Geometry::Point { .. } => "Point",
            Geometry::Polygon { .. } => "Polygon",
            Geometry::MultiPolygon { .. } => "MultiPolygon",
            Geometry::Other { kind, .. } => kind,
        }
    }

    pub fn has_coordinates(&self) -> bool {
        match self {
            Geometry::Point { coordinates } => !coordinates.is_empty(),
            Geometry::Polygon { coordinates } => !coordinates.is_empty(),
            Geometry::MultiPolygon { coordinates } => !coordinates.is_empty(),
            Geometry::Other { coordinates, .. } => !is_blank(coordinates),
        }
    }

    /// Compact JSON of the coordinates, `None` when there are none.
    pub fn coordinates_json(&self) -> Option<String> {
        if !self.has_coordinates() {
            return None;
        }
        let json = match self {
            Geometry::Point { coordinates } => serde_json::to_string(coordinates),
            Geometry::Polygon { coordinates } => serde_json::to_string(coordinates),
            Geometry::MultiPolygon { coordinates } => serde_json::to_string(coordinates),
            Geometry::Other { coordinates, .. } => serde_json::to_string(coordinates),
        };
        json.ok()
    }
}

/// Deserialize an optional object member. Anything that isn't an object counts as absent.
fn object_or_absent<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => Ok(T::deserialize(value).ok()),
        _ => Ok(None),
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Feature {
    #[serde(default, deserialize_with = "object_or_absent")]
    pub properties: Option<HashMap<String, Scalar>>,
    #[serde(default, deserialize_with = "object_or_absent")]
    pub geometry: Option<Geometry>,
}

#[derive(Deserialize)]
struct RawCollection {
    #[serde(default)]
    features: Option<Vec<Feature>>,
}

/// The features of a GeoJSON document, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl FromStr for FeatureCollection {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: Value = serde_json::from_str(s)?;
        if !value.is_object() {
            return Err(serde_json::Error::custom("expected a GeoJSON object"));
        }
        let raw: RawCollection = serde_json::from_value(value)?;
        let features = raw.features.unwrap_or_default();
        Ok(FeatureCollection { features })
    }
}

use super::geojson::{Feature, FeatureCollection, Geometry};
use itertools::Itertools;
use std::collections::{BTreeSet, HashMap};

pub const GEOMETRY_TYPE: &str = "geometry_type";
pub const COORDINATES_LON: &str = "coordinates_lon";
pub const COORDINATES_LAT: &str = "coordinates_lat";
pub const COORDINATES_JSON: &str = "coordinates_json";

/// Trailing columns appended after the property columns, in this order.
pub const GEOMETRY_COLUMNS: [&str; 4] = [
    GEOMETRY_TYPE,
    COORDINATES_LON,
    COORDINATES_LAT,
    COORDINATES_JSON,
];

/// A rectangular view of a feature collection: every row has one cell per column.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Sorted union of all property keys, followed by the geometry columns.
///
/// A property that shares its name with a geometry column is folded into that
/// column instead of producing a duplicate header.
pub fn columns(collection: &FeatureCollection) -> Vec<String> {
    let keys: BTreeSet<&str> = collection
        .features
        .iter()
        .filter_map(|feature| feature.properties.as_ref())
        .flat_map(|properties| properties.keys())
        .map(String::as_str)
        .filter(|key| !GEOMETRY_COLUMNS.contains(key))
        .collect();
    keys.into_iter()
        .chain(GEOMETRY_COLUMNS.iter().copied())
        .map(String::from)
        .collect()
}

fn geometry_cells<'a>(geometry: &Geometry, cells: &mut HashMap<&'a str, String>) {
    cells.insert(GEOMETRY_TYPE, geometry.kind().to_string());
    match geometry {
        Geometry::Point { coordinates } => {
            // a one-element position leaves the latitude blank
            if let Some(lon) = coordinates.get(0) {
                cells.insert(COORDINATES_LON, lon.to_string());
            }
            if let Some(lat) = coordinates.get(1) {
                cells.insert(COORDINATES_LAT, lat.to_string());
            }
        }
        _ => {
            if let Some(json) = geometry.coordinates_json() {
                cells.insert(COORDINATES_JSON, json);
            }
        }
    }
}

/// Cells of a single feature, keyed by column. Absent data has no entry.
pub fn cells(feature: &Feature) -> HashMap<&str, String> {
    let mut cells = HashMap::new();
    if let Some(properties) = &feature.properties {
        for (key, value) in properties {
            cells.insert(key.as_str(), value.to_string());
        }
    }
    if let Some(geometry) = &feature.geometry {
        geometry_cells(geometry, &mut cells);
    }
    cells
}

/// Flatten a collection in two passes: discover the columns, then lay out one
/// row per feature in collection order.
pub fn flatten(collection: &FeatureCollection) -> Table {
    let columns = columns(collection);
    let rows = collection
        .features
        .iter()
        .map(|feature| {
            let mut row = cells(feature);
            columns
                .iter()
                .map(|column| row.remove(column.as_str()).unwrap_or_default())
                .collect_vec()
        })
        .collect();
    Table { columns, rows }
}

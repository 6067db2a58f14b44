use super::geojson::FeatureCollection;
use serde_json::{json, Map, Value};

/// A GeoJSON feature. A `null` geometry leaves out the key entirely.
pub fn feature(properties: Value, geometry: Value) -> Value {
    let mut obj = Map::new();
    obj.insert("type".into(), json!("Feature"));
    obj.insert("properties".into(), properties);
    if !geometry.is_null() {
        obj.insert("geometry".into(), geometry);
    }
    Value::Object(obj)
}

pub fn collection_json(features: Vec<Value>) -> String {
    json!({"type": "FeatureCollection", "features": features}).to_string()
}

pub fn collection(features: Vec<Value>) -> FeatureCollection {
    collection_json(features).parse().unwrap()
}

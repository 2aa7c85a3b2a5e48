use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub const BLOOD_TYPE: &str = "blood_type";
pub const LATITUDE: &str = "latitude";
pub const LONGITUDE: &str = "longitude";
pub const AGE: &str = "age";

/// Fixed-shape profile: every field is known at compile time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub blood_type: String,
    pub latitude: f64,
    pub longitude: f64,
    pub age: u32,
}

impl ProfileRecord {
    pub fn new(blood_type: impl Into<String>, latitude: f64, longitude: f64, age: u32) -> Self {
        Self {
            blood_type: blood_type.into(),
            latitude,
            longitude,
            age,
        }
    }

    /// Copy this record into the string-keyed representation.
    pub fn to_map(&self) -> ProfileMap {
        profile_map(self.blood_type.clone(), self.latitude, self.longitude, self.age)
    }
}

/// A single dynamically-typed profile field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Int(u32),
    Float(f64),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<u32> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }
}

/// Free-form profile: fields are looked up by key at run time.
pub type ProfileMap = HashMap<String, FieldValue>;

/// Assemble a string-keyed profile from its four logical fields.
pub fn profile_map(blood_type: String, latitude: f64, longitude: f64, age: u32) -> ProfileMap {
    let mut map = ProfileMap::with_capacity(4);
    map.insert(BLOOD_TYPE.to_owned(), FieldValue::Text(blood_type));
    map.insert(LATITUDE.to_owned(), FieldValue::Float(latitude));
    map.insert(LONGITUDE.to_owned(), FieldValue::Float(longitude));
    map.insert(AGE.to_owned(), FieldValue::Int(age));
    map
}

/// Ages of a record batch, in batch order.
pub fn ages(profiles: &[ProfileRecord]) -> Vec<u32> {
    profiles.iter().map(|profile| profile.age).collect()
}

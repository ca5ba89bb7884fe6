use std::{collections::HashMap, fs, io::Result as IoResult, path::Path};

use serde::{Deserialize, Serialize};

use crate::sdk::planner::Coord;

use super::service::Place;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CachedPlace {
    pub label: String,
    pub coord: Coord,
}

/// JSON-file cache of geocoding results, keyed by the query string.
/// Routes and links are never cached; they are recomputed per trip.
#[derive(Serialize, Deserialize, Default)]
pub struct GeoCache {
    geocodes: HashMap<String, CachedPlace>,
}

impl GeoCache {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        if path.as_ref().exists() {
            let data = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> IoResult<()> {
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)
    }

    pub fn get(&self, query: &str) -> Option<Place> {
        self.geocodes.get(query).map(|hit| Place {
            query: query.to_string(),
            label: hit.label.clone(),
            coord: hit.coord,
        })
    }

    pub fn insert(&mut self, place: &Place) {
        self.geocodes.insert(
            place.query.clone(),
            CachedPlace {
                label: place.label.clone(),
                coord: place.coord,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.geocodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.geocodes.is_empty()
    }
}

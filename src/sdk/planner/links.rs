use super::batch::split_into_batches;
use super::error::PlannerError;
use super::route::{concat_coords, Coord};

pub const GOOGLE_MAPS_DIR_URL: &str = "https://www.google.com/maps/dir";

/// How to render a run of coordinates into a navigation URL: a base joined
/// to the `lat,lon` pairs with a separator. Services differ only in those
/// two pieces, so the template is plain data.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkTemplate {
    base: String,
    separator: char,
}

impl LinkTemplate {
    pub fn new(base: &str, separator: char) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
            separator,
        }
    }

    /// Google Maps directions, waypoints joined by `/`.
    pub fn google_maps() -> Self {
        Self::new(GOOGLE_MAPS_DIR_URL, '/')
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// One URL for one run of coordinates.
    pub fn link_for(&self, coords: &[Coord]) -> Result<String, PlannerError> {
        let joined = concat_coords(coords, self.separator)?;
        Ok(format!("{}/{}", self.base, joined))
    }

    /// One URL per batch, batches overlapping on their boundary coordinate
    /// so the links chain into a complete drive.
    pub fn batch_links(
        &self,
        coords: &[Coord],
        batch_size: usize,
    ) -> Result<Vec<String>, PlannerError> {
        split_into_batches(coords, batch_size)?
            .into_iter()
            .map(|batch| self.link_for(batch))
            .collect()
    }
}

impl Default for LinkTemplate {
    fn default() -> Self {
        Self::google_maps()
    }
}

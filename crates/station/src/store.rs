//! Shared read-only gauge tables.

use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::error::StationError;

/// One gauge metadata record: identity and planar coordinates in projected
/// CRS metres.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeMetadata {
    /// Integer gauge ID.
    pub id: u32,
    /// Easting in metres.
    pub easting: f64,
    /// Northing in metres.
    pub northing: f64,
    /// Optional descriptive name.
    pub name: Option<String>,
}

/// One gauge observation row.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeObservation {
    /// Gauge ID the observation belongs to.
    pub id: u32,
    /// Observation timestamp.
    pub time: NaiveDateTime,
    /// Precipitation depth in millimetres.
    pub rain_mm: f64,
}

/// The gauge metadata and observation tables, loaded once and shared
/// read-only across all [`Station`](crate::Station) constructions.
///
/// The store enforces the one-record-per-ID invariant on metadata at
/// construction, so lookups later cannot return ambiguous results.
#[derive(Debug, Clone)]
pub struct GaugeStore {
    metadata: Vec<GaugeMetadata>,
    observations: Vec<GaugeObservation>,
    /// Maps gauge ID to its index in `metadata`.
    by_id: HashMap<u32, usize>,
}

impl GaugeStore {
    /// Creates a store from raw table rows.
    ///
    /// # Errors
    ///
    /// Returns [`StationError::DuplicateMetadata`] if two metadata records
    /// share a gauge ID.
    pub fn new(
        metadata: Vec<GaugeMetadata>,
        observations: Vec<GaugeObservation>,
    ) -> Result<Self, StationError> {
        let mut by_id = HashMap::with_capacity(metadata.len());
        for (i, m) in metadata.iter().enumerate() {
            if by_id.insert(m.id, i).is_some() {
                return Err(StationError::DuplicateMetadata { id: m.id });
            }
        }
        Ok(Self {
            metadata,
            observations,
            by_id,
        })
    }

    /// Returns the metadata record for a gauge ID.
    ///
    /// # Errors
    ///
    /// Returns [`StationError::MetadataNotFound`] if the ID is absent.
    pub fn metadata(&self, id: u32) -> Result<&GaugeMetadata, StationError> {
        self.by_id
            .get(&id)
            .map(|&i| &self.metadata[i])
            .ok_or(StationError::MetadataNotFound { id })
    }

    /// Returns all observation rows for a gauge ID, in table order.
    pub fn observations_for(&self, id: u32) -> Vec<&GaugeObservation> {
        self.observations.iter().filter(|o| o.id == id).collect()
    }

    /// Returns the IDs of all gauges whose easting and northing both fall
    /// within `threshold_m` of `(easting, northing)`.
    ///
    /// This is an inclusive bounding-box filter, not a circular radius: a
    /// gauge offset by exactly `threshold_m` along one axis is included.
    pub fn ids_within_box(&self, easting: f64, northing: f64, threshold_m: f64) -> Vec<u32> {
        self.metadata
            .iter()
            .filter(|m| {
                (m.easting - easting).abs() <= threshold_m
                    && (m.northing - northing).abs() <= threshold_m
            })
            .map(|m| m.id)
            .collect()
    }

    /// Returns all metadata records.
    pub fn all_metadata(&self) -> &[GaugeMetadata] {
        &self.metadata
    }

    /// Returns the number of gauges in the metadata table.
    pub fn n_gauges(&self) -> usize {
        self.metadata.len()
    }

    /// Returns the number of observation rows across all gauges.
    pub fn n_observations(&self) -> usize {
        self.observations.len()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn meta(id: u32, easting: f64, northing: f64) -> GaugeMetadata {
        GaugeMetadata {
            id,
            easting,
            northing,
            name: None,
        }
    }

    fn obs(id: u32, day: u32, rain_mm: f64) -> GaugeObservation {
        GaugeObservation {
            id,
            time: NaiveDate::from_ymd_opt(2020, 1, day)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            rain_mm,
        }
    }

    #[test]
    fn new_valid() {
        let store = GaugeStore::new(
            vec![meta(1, 0.0, 0.0), meta(2, 100.0, 100.0)],
            vec![obs(1, 1, 0.5), obs(2, 1, 1.0)],
        )
        .unwrap();
        assert_eq!(store.n_gauges(), 2);
        assert_eq!(store.n_observations(), 2);
    }

    #[test]
    fn new_duplicate_id_rejected() {
        let err = GaugeStore::new(vec![meta(1, 0.0, 0.0), meta(1, 5.0, 5.0)], vec![]).unwrap_err();
        assert_eq!(err, StationError::DuplicateMetadata { id: 1 });
    }

    #[test]
    fn metadata_lookup() {
        let store = GaugeStore::new(vec![meta(42, 10.0, 20.0)], vec![]).unwrap();
        let m = store.metadata(42).unwrap();
        assert_eq!(m.easting, 10.0);
        assert_eq!(m.northing, 20.0);

        let err = store.metadata(43).unwrap_err();
        assert_eq!(err, StationError::MetadataNotFound { id: 43 });
    }

    #[test]
    fn observations_filtered_by_id() {
        let store = GaugeStore::new(
            vec![meta(1, 0.0, 0.0)],
            vec![obs(1, 2, 0.5), obs(2, 1, 9.0), obs(1, 1, 1.5)],
        )
        .unwrap();
        let rows = store.observations_for(1);
        assert_eq!(rows.len(), 2);
        // Table order preserved, no implicit sort here.
        assert_eq!(rows[0].rain_mm, 0.5);
        assert_eq!(rows[1].rain_mm, 1.5);
        assert!(store.observations_for(3).is_empty());
    }

    #[test]
    fn box_filter_is_inclusive() {
        let store = GaugeStore::new(
            vec![
                meta(1, 0.0, 0.0),
                meta(2, 1000.0, 0.0),    // exactly threshold away in x
                meta(3, 1000.0, 1000.0), // corner of the box
                meta(4, 1001.0, 0.0),    // just outside
            ],
            vec![],
        )
        .unwrap();
        let ids = store.ids_within_box(0.0, 0.0, 1000.0);
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn box_filter_includes_self() {
        let store = GaugeStore::new(vec![meta(1, 50.0, 50.0)], vec![]).unwrap();
        assert_eq!(store.ids_within_box(50.0, 50.0, 1.0), vec![1]);
    }

    #[test]
    fn box_filter_is_rectangular_not_circular() {
        // Diagonal distance sqrt(2)*1000 > 1000, but each axis offset is
        // exactly 1000, so the gauge is inside the box.
        let store = GaugeStore::new(vec![meta(1, 1000.0, 1000.0)], vec![]).unwrap();
        assert_eq!(store.ids_within_box(0.0, 0.0, 1000.0), vec![1]);
    }
}

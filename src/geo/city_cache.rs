// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use super::haversine::{haversine_km, Coordinates};
use crate::errors::{GeoError, StoreError};
use crate::observability::messages::store::StoreOpened;
use crate::observability::messages::StructuredLog;
use crate::store::schema::{CREATE_CITIES_TABLE, UPSERT_CITY};
use crate::store::statistics::open_connection;

/// City coordinates cached in SQLite.
///
/// Unlike the statistics tables, a city's coordinates are replaced when
/// stored again.
pub struct CityCoordinateCache {
    conn: Connection,
}

impl CityCoordinateCache {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let conn = open_connection(path)?;
        conn.execute_batch(CREATE_CITIES_TABLE)?;
        StoreOpened {
            path: &path.display().to_string(),
        }
        .log();
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(CREATE_CITIES_TABLE)?;
        Ok(Self { conn })
    }

    pub fn lookup(&self, city: &str) -> Result<Option<Coordinates>, StoreError> {
        let found = self
            .conn
            .query_row(
                "SELECT latitude, longitude FROM cities WHERE city_name = ?1",
                params![city],
                |row| Ok(Coordinates::new(row.get(0)?, row.get(1)?)),
            )
            .optional()?;
        Ok(found)
    }

    pub fn upsert(&self, city: &str, coordinates: Coordinates) -> Result<(), StoreError> {
        self.conn.execute(
            UPSERT_CITY,
            params![city, coordinates.latitude, coordinates.longitude],
        )?;
        Ok(())
    }

    fn require(&self, city: &str) -> Result<Coordinates, GeoError> {
        self.lookup(city)?
            .ok_or_else(|| GeoError::UnknownCity(city.to_string()))
    }

    /// Straight-line distance between two cached cities, in kilometres.
    pub fn distance_km(&self, from: &str, to: &str) -> Result<f64, GeoError> {
        let a = self.require(from)?;
        let b = self.require(to)?;
        Ok(haversine_km(a, b))
    }
}

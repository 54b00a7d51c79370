// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod city_cache;
pub mod haversine;

pub use city_cache::CityCoordinateCache;
pub use haversine::{haversine_km, Coordinates, EARTH_RADIUS_KM};

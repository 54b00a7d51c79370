// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeoError {
    /// No coordinates are cached for the city
    #[error("Coordinates for '{0}' not found in database")]
    UnknownCity(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

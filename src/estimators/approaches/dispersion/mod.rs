// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Dispersion estimators module
// This module contains the (fuzzy) dispersion entropy estimator and its utilities.

pub mod dispersion_utils;
pub mod fuzzy_dispersion;

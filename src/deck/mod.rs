// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The slide deck: a static catalog of demos and their speaker notes.

pub mod catalog;
pub mod notes;

pub use catalog::{CONST_MODE_LABEL, DemoEntry, catalog, default_entry, find, position};
pub use notes::split_points;

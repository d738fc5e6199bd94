// SPDX-License-Identifier: MIT

//! In-memory record store queried with a small `WHERE` clause language.
//!
//! ```rust,no_run
//! use wheredb::store::Store;
//!
//! let store = Store::from_json_file("Dataset/vessels.json")?;
//! let tankers = store.query("WHERE P36_VESSEL_TYPE = 'Tanker' AND Z13_STATUS_CODE = 4")?;
//! println!("{} matches", tankers.len());
//! # Ok::<(), wheredb::error::StoreError>(())
//! ```

pub mod config;
pub mod error;
pub mod output;
pub mod query;
pub mod store;

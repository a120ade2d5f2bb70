// SPDX-License-Identifier: MIT

//! Services module - business logic layer.

pub mod accounts;
pub mod catalog;
pub mod google;
pub mod photos;

pub use accounts::AccountDirectory;
pub use catalog::CoffeeDirectory;
pub use google::GoogleAuthClient;
pub use photos::PhotoStore;

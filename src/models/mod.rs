// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod account;
pub mod activity;
pub mod roaster;

pub use account::{Account, GoogleIdentity, UserView};
pub use activity::{
    Activity, ActivityView, CaffeineUnit, DrinkAmount, PhotoUpload, PostActivityRequest,
    PostActivityResponse, RoasterRef,
};
pub use roaster::{CreateRoasterRequest, Roaster};

// Library for tests to access modules

pub mod collector;
pub mod config;
pub mod error;
pub mod inventory;
pub mod models;
pub mod report;
pub mod snapshot_repo;
pub mod version;
pub mod vsphere_repo;

pub mod a001_journal;
pub mod a002_module;
pub mod a003_partner;
pub mod a004_permission;
pub mod a005_country;
pub mod a006_subdivision;

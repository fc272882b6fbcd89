pub mod cors;
pub mod not_found;
pub mod scenarios;

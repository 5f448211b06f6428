pub mod client;
pub mod config;
pub mod consts;
pub mod distribution;
pub mod error;
pub mod form;
pub mod gradient;
pub mod label;
pub mod outcome;
pub mod prediction;

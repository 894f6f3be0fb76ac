pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod output;
pub mod params;
pub mod rate_limit;
pub mod results;
pub mod transformation;

#[cfg(test)]
pub mod test_support;

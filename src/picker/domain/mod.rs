pub mod filter;
pub mod models;
pub mod sections;

#[cfg(test)]
mod filter_test;
#[cfg(test)]
mod models_test;

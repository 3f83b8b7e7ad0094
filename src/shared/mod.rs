pub mod constants;
pub mod lenient;
pub mod types;

#[cfg(test)]
pub mod test_helpers;

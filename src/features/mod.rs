pub mod iss;

/// Order related enums shared by requests and query builders
pub mod order;

pub use order::*;

#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod error;
pub mod options;
pub mod reply;
pub mod schema;
pub mod traits;

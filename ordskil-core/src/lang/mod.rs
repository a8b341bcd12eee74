//! Static language knowledge: punctuation classes, month names, units,
//! currencies, web patterns and the other lookup tables the pipeline
//! stages consult. Everything here is immutable data or pure functions.

pub mod clock;
pub mod currency;
pub mod elements;
pub mod escapes;
pub mod months;
pub mod numbers;
pub mod punct;
pub mod ssn;
pub mod units;
pub mod unicode;
pub mod web;

//! Region candidates and their value objects.

pub mod breakdown;
pub mod candidate;
pub mod city_type;
pub mod country_code;

//! Sample sea-orm entities used as row types by the fake table test suites.

pub mod authors;
pub mod books;

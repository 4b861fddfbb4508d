//! Parsers generated from `grammars/` at build time.
//!
//! Each module holds the parser type named by its grammar's `class` meta.

pub mod calc {
    include!(concat!(env!("OUT_DIR"), "/calc.rs"));
}

pub mod choice {
    include!(concat!(env!("OUT_DIR"), "/choice.rs"));
}

pub mod cycle {
    include!(concat!(env!("OUT_DIR"), "/cycle.rs"));
}

pub mod lists {
    include!(concat!(env!("OUT_DIR"), "/lists.rs"));
}

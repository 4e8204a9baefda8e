//! # hash-collision-report
//!
//! Turns the JSON collision reports written by the C++ hash test harness into charts
//! and a docx summary.
//!
//! - Fixed bucket tests become one bar chart per bit width.
//! - Generated block tests become one log-log plot per hash function, plus a table per
//!   input file appended to a single `report.docx`.
//!
//! The entry points live in [`processing`]; [`prelude`] re-exports the commonly used items.

pub mod constants;
pub mod prelude;

/// In-memory records parsed from the harness' JSON output.
pub mod statistics {
    pub mod collisions_statistics;
    pub mod data_collisions;
    pub mod generated_blocks;
    pub mod ordered_map;
}

/// Chart descriptions and the backends that draw them.
pub mod charts {
    /// The [`Chart`](chart::Chart) capability and the chart descriptions it consumes.
    pub mod chart;
    pub mod plotters_chart;
}

/// Report documents assembled from collision tables.
pub mod report {
    pub mod console;
    pub mod document;
    pub mod docx;
}

/// Directory driven processing of whole report sets.
pub mod processing {
    pub mod batch;
    pub mod data_collisions;
    pub mod errors;
    pub mod generated_blocks;
}

pub mod utilities {
    pub mod paths;

    pub mod io {
        /// Lists the immediate entries of an input directory.
        pub mod entry_finder;
    }

    #[cfg(test)]
    pub mod tests {
        pub mod fixtures;
        pub mod recording_chart;
    }
}

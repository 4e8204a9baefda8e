//! Fixed names and layout values shared by the renderers and the processing entry points.

/// Directory (relative to the working directory) holding every report set.
pub const REPORTS_ROOT_DIR: &str = "reports";

/// Subdirectory of a report set holding the harness' JSON output.
pub const CPP_REPORT_DIR: &str = "cpp";

/// Subdirectory of a report set receiving rendered charts and documents.
pub const PYTHON_REPORT_DIR: &str = "python";

/// Name of the generated blocks test, both as input and output directory.
pub const GENERATED_BLOCKS_TEST_NAME: &str = "Generated blocks tests";

/// File name of the docx report saved at the end of a batch.
pub const REPORT_FILE_NAME: &str = "report.docx";

/// Title of the generated blocks report.
pub const COLLISION_TABLES_HEADING: &str = "Collision tables";

/// Header of the first column of a collision table.
pub const FUNCTION_NAME_HEADER: &str = "Function name";

/// Output resolution of every chart, in pixels.
pub const CHART_SIZE: (u32, u32) = (1200, 800);

/// Bit width at which histogram bar labels get crowded enough to be rotated.
pub const CROWDED_LABELS_BITS: u32 = 16;

/// Rotation applied to crowded histogram bar labels, in degrees.
pub const CROWDED_LABEL_ROTATION: f64 = 15.0;

/// Bar labels sit this factor above the bar height.
pub const BAR_LABEL_OFFSET: f64 = 1.05;

/// Width of a bar as a fraction of its category slot.
pub const BAR_WIDTH: f64 = 0.8;

/// Headroom above the tallest bar, as a factor of its height.
pub const BAR_HEADROOM: f64 = 1.2;

/// Number of major y-axis steps between zero and the tallest bar.
pub const MAJOR_TICK_DIVISIONS: f64 = 5.0;

/// Number of minor y-axis steps between zero and the tallest bar.
pub const MINOR_TICK_DIVISIONS: f64 = 25.0;

/// Base of both axes of the generated blocks plots.
pub const LOG_PLOT_BASE: f64 = 2.0;

/// Upper bound on tick locations per log axis.
pub const LOG_PLOT_MAX_TICKS: usize = 50;

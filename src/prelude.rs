pub use crate::charts::chart::{Bar, BarChart, Chart, LineChart, PlotError, YAxisLayout};
pub use crate::charts::plotters_chart::PlottersChart;

pub use crate::report::console::format_collision_table;
pub use crate::report::document::{ReportDocument, ReportError};
pub use crate::report::docx::{DocxReport, ReportTable};

pub use crate::statistics::collisions_statistics::{read_record, CollisionsStatistics, RecordError};
pub use crate::statistics::data_collisions::DataCollisionsStatistics;
pub use crate::statistics::generated_blocks::{
    CollisionTable, GeneratedBlocksRecord, GeneratedBlocksStatistics,
};
pub use crate::statistics::ordered_map::OrderedMap;

pub use crate::processing::batch::{BatchSummary, EntryFailure};
pub use crate::processing::errors::ProcessingError;
pub use crate::processing::generated_blocks::GeneratedBlocksReport;

pub use crate::utilities::io::entry_finder::EntryKind;
pub use crate::utilities::paths::{make_dir, ReportPaths};

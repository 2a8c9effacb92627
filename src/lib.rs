pub mod io;
pub mod scf;
pub mod pixel;
pub mod exporter;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::ScfKit;

pub use scf::{Container, ScfError, ScfReader, ScfResult, TagTable};
pub use exporter::{ExportOptions, ExportReport, ExportedImage, RegionExporter};
pub use pixel::{PixelFormatDecoder, PixelFormatFactory};

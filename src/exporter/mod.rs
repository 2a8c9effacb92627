//! Image export from decoded containers
//!
//! This module crops draw-command regions out of texture atlases, masks
//! polygon regions, and suppresses repeated crops.

mod region;
mod mask;
mod region_exporter;

pub use region::{RegionKey, UvBounds};
pub use mask::{apply_polygon_mask, point_in_polygon};
pub use region_exporter::{
    ExportDiagnostic, ExportOptions, ExportReport, ExportSource, ExportedImage, RegionExporter,
};

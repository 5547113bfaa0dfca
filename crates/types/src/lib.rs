pub mod codes;
pub mod color;
pub mod geometry;
pub mod ids;
pub mod record;
pub mod stamp;

pub use codes::{ContainerType, PackageType};
pub use color::Color;
pub use geometry::{Rect, Size};
pub use ids::ItemId;
pub use record::{
    BillOfLading, CargoLine, ContainerUnit, DocumentKind, DocumentRecord, Party,
    RoadConsignmentNote,
};
pub use stamp::ExportStamp;

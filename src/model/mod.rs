pub mod annotations;
pub mod payload;
pub mod setup;

pub use annotations::{Direction, FairValueGap, StructureKind, StructureSignal, SwingKind, SwingPoint};
pub use payload::{StockData, StockEntry, StockIndex, StockStatus};
pub use setup::{TradeDirection, TradeSetup};

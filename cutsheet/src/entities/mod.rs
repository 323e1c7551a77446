mod diagnostic;
mod packing_result;
mod piece;
mod placed_piece;
mod sheet;
mod stock_sheet;

#[doc(inline)]
pub use piece::PieceRequest;

#[doc(inline)]
pub use piece::Orientation;

#[doc(inline)]
pub use placed_piece::PlacedPiece;

#[doc(inline)]
pub use sheet::Sheet;

#[doc(inline)]
pub use stock_sheet::StockSheet;

#[doc(inline)]
pub use stock_sheet::SheetCatalog;

#[doc(inline)]
pub use stock_sheet::ConfigError;

#[doc(inline)]
pub use packing_result::MaterialLayout;

#[doc(inline)]
pub use packing_result::PackingResult;

#[doc(inline)]
pub use diagnostic::Diagnostic;

#[doc(inline)]
pub use diagnostic::DiagnosticKind;

//! Platform-neutral building blocks: currency selection, report table, pagination.

pub mod currency;
pub mod pagination;
pub mod platform;
pub mod reports;

pub use currency::CurrencySelection;
pub use pagination::PageLinks;
pub use reports::Report;

//! Service layer behind the HTTP handlers.

pub mod receipt_service;

pub use receipt_service::ReceiptService;

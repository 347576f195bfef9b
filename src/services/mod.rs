// Service exports
pub mod catalog;
pub mod tax_calculator;

pub use catalog::{decode_rows, CatalogClient, CatalogError, CatalogSource, InMemoryCatalog};
pub use tax_calculator::{TaxCalculatorClient, TaxServiceError};

pub mod assembler;
pub mod catalog_service;
pub mod load_portfolio_service;

pub use catalog_service::PortfolioCatalogService;
pub use load_portfolio_service::{fetch_batch, resolve_portfolio, LoadPortfolioService, SheetNames};

pub mod portfolio;
pub mod view;

pub mod app_state_builder;
pub mod sheet_fixtures;
pub mod stubs;

pub mod dispatch_view;

pub use dispatch_view::dispatch_view_handler;

pub mod batch;
pub mod check;
pub mod dispatch;
pub mod predict;
pub mod schema;

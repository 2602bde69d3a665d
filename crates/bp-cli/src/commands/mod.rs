pub mod analytics;
pub mod dispatch;
pub mod entity;
pub mod graph;
pub mod link;
pub mod schema;
pub mod shared;

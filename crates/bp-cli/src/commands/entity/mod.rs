//! Per-entity commands: `create`, `update`, `delete`, `get`, `list`.

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

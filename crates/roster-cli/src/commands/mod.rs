pub mod add;
pub mod delete;
pub mod dispatch;
pub mod list;
pub mod schema;
pub mod shared;
pub mod show;
pub mod update;

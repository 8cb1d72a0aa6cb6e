mod get;
mod reset;
mod schema;
mod set;
mod show;

pub use get::GetCommand;
pub use reset::ResetCommand;
pub use schema::SchemaCommand;
pub use set::SetCommand;
pub use show::ShowCommand;

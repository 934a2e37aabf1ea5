//! Host-side contract a credential plugin is wired into: field names, the
//! credential schema, the provisioner and the importer.

mod error;
mod import;
mod path;
mod provision;
mod schema;

pub use error::*;
pub use import::*;
pub use path::*;
pub use provision::*;
pub use schema::*;

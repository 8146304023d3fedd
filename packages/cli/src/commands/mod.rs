pub mod generate;
pub mod init;
pub mod list;

pub use generate::{generate, GenerateArgs};
pub use init::{init, InitArgs};
pub use list::{list, ListArgs};

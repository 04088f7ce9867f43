pub mod check;
pub mod clean;
pub mod common;
pub mod doctor;
pub mod init;
pub mod sync;

pub use check::Check;
pub use clean::Clean;
pub use common::CommandOptions;
pub use doctor::Doctor;
pub use init::Init;
pub use sync::Sync;

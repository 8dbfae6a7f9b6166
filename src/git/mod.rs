//! Git operations by shelling out to the git binary.

pub mod executor;

pub use executor::{GitCli, SystemGit, check_git_installed};

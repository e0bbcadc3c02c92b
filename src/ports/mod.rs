mod git;

pub use git::GitPort;

pub mod cat;
pub mod cd;
pub mod code;
pub mod echo;
pub mod exit;
pub mod git;
pub mod help;
pub mod history;
pub mod ls;
pub mod mkdir;
pub mod node;
pub mod npm;
pub mod pwd;
pub mod sysinfo;
pub mod touch;

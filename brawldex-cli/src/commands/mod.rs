pub(crate) mod check;
pub(crate) mod config;
pub(crate) mod refresh;
pub(crate) mod serve;
pub(crate) mod slug;

pub(crate) mod logs;
pub(crate) mod system;
pub(crate) mod users;

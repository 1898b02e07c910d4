pub mod lostark;
pub mod sqlite;

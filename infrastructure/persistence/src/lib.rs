pub mod db;
pub mod catalog {
    pub mod entity;
    pub mod repository;
}

//! Vitrine database layer: repositories over the Postgres pool.

pub mod db;

pub use db::items::ItemRepository;

//! Database repositories for the data access layer.
//!
//! Each collection (products, articles, qna) is one JSONB-document table; the
//! `services` and `users` tables are provisioned by migration but have no
//! repository methods because no endpoint reaches them.

pub mod items;

pub mod health;
pub mod item_delete;
pub mod products_list;
pub mod upload_multiple;
pub mod upload_single;

pub use health::health;
pub use item_delete::delete_item;
pub use products_list::get_products;
pub use upload_multiple::upload_multiple;
pub use upload_single::upload_single;

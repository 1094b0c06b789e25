mod category;
mod transaction;

pub use category::Category;
pub use transaction::Transaction;

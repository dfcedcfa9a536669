//! Plain data carried between the inventory, the order system and the courier.

pub mod order;
pub mod product;

pub use order::*;
pub use product::*;

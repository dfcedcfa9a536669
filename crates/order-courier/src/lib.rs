//! # Order Courier
//!
//! Concurrent customers buy from a shared inventory and queue orders; a
//! single courier delivers them.
//!
//! ## 🗺️ Module Tour
//!
//! - **[model]**: plain data ([`Order`](model::Order), [`Product`](model::Product)).
//! - **[inventory]**: stock counts with an atomic check-and-decrement.
//! - **[order_system]**: inventory + order queue; "place order" and "take
//!   next order".
//! - **[customer]** / **[courier]**: the producer and consumer tasks. The
//!   courier is a [`courier_framework::Worker`].
//! - **[lifecycle]**: configuration and the coordinator that sequences a run.

pub mod courier;
pub mod customer;
pub mod inventory;
pub mod lifecycle;
pub mod model;
pub mod order_system;

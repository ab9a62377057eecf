//! Terminal packing list.
//!
//! [`store::ItemListStore`] holds the items and answers the sorted view and
//! completion stats; [`ui`] is the ratatui front end around it.

pub mod config;
pub mod logging;
pub mod store;
pub mod ui;

pub mod controller;
pub mod events;
pub mod observable;
pub mod state;

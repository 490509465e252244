pub mod config;
pub mod gui;
pub mod interval;
pub mod layout;
pub mod pitch;
pub mod task;
pub mod timer;

//! Viewer for Cobaya MCMC chain files: load one parameter from every chain
//! of a run and plot the traces side by side.

pub mod app;
pub mod color;
pub mod data;
pub mod state;
pub mod ui;

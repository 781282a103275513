//! I/O utilities for exporting a planned trip.

pub mod export;

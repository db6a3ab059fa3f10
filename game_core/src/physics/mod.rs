//! Path: game_core/src/physics/mod.rs
//! Summary: 物理プリミティブ（決定論的乱数）

pub mod rng;

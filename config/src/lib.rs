//! # Config Crate
//!
//! Numeric configuration shared by the vector3d workspace. Comparison
//! tolerances live here so the vector crate and its tests agree on what
//! "equal" means for floating-point components.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{GlobalConfig, EPSILON_TOLERANCE};
//!
//! let cfg = GlobalConfig::default();
//! assert_eq!(cfg.tolerance, EPSILON_TOLERANCE);
//! assert!(GlobalConfig::new(0.0).is_err());
//! ```

pub mod constants;

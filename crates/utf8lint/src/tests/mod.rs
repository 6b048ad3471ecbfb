#[cfg(feature = "serde")]
mod serde_shape;

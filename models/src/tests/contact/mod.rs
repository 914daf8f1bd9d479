mod builder;
mod serde_shape;
mod validation;

mod json;
mod other;
mod primitives;
mod ptrs;
mod strings;

#[cfg(feature = "num_bigint")]
mod bigint;

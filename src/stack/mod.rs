pub(crate) mod complete;
pub(crate) mod compute;
pub(crate) mod detect;
pub(crate) mod engine;
pub(crate) mod transform;

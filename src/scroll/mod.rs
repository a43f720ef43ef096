pub(crate) mod ease;
pub(crate) mod scripted;
pub(crate) mod smooth;
pub(crate) mod source;

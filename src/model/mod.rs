pub(crate) mod request;
pub(crate) mod slide;

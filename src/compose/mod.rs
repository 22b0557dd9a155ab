pub(crate) mod blend;
pub(crate) mod decode;
pub(crate) mod encode;
pub(crate) mod pipeline;

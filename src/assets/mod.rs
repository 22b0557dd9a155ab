pub(crate) mod font_cache;

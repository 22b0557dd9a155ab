pub mod backend;
pub mod resvg_cpu;
pub mod svg;

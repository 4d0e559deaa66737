pub mod geom;
pub mod record;
pub mod util;

mod streetview;
mod zillow;

pub use streetview::*;
pub use zillow::*;

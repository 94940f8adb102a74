// Landing page sections, top to bottom

mod cta;
mod features;
mod footer;
mod hero;

pub use cta::CallToAction;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;

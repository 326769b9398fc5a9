mod health;
mod intent;

pub use health::healthz;
pub use intent::get_intent;

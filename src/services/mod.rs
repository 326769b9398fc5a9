mod intent;

pub use intent::IntentService;

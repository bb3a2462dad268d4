pub mod stepper;
pub mod time;

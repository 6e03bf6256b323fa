pub mod require_capabilities;

//! officeos 固有のドメイン型（型と不変条件）

pub mod agent_profile;
pub mod app_config;
pub mod command;
pub mod prompts;
pub mod request;
pub mod variant;

pub use agent_profile::{profile_for, AgentProfile, StatusText};
pub use app_config::AppConfig;
pub use command::OfficeCommand;
pub use request::Request;
pub use variant::Variant;

mod base_agent;
mod guard;
mod random_agent;
mod rule_based_agent;

pub use base_agent::{Policy, PolicyType};
pub use random_agent::RandomRollout;
pub use rule_based_agent::RuleBasedRollout;

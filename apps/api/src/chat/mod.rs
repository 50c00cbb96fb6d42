// Chat proxy: relays one visitor message to the completion provider,
// or answers with a canned reply when no API key is configured.
// All provider calls go through llm_client.

pub mod handlers;
pub mod prompts;
pub mod proxy;

/// Returned instead of a model reply when no API key is configured.
pub const OFFLINE_REPLY: &str = "[AI disabled] This demo reply simulates the assistant. \
    Set OPENAI_API_KEY to enable real AI replies.";

/// System instruction that pins the assistant persona to the site owner.
pub fn build_system_prompt(owner_name: &str) -> String {
    format!("You are {owner_name}'s portfolio assistant. Be concise and professional.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_names_owner() {
        let prompt = build_system_prompt("Ada");
        assert_eq!(
            prompt,
            "You are Ada's portfolio assistant. Be concise and professional."
        );
    }

    #[test]
    fn test_offline_reply_mentions_key_variable() {
        assert!(OFFLINE_REPLY.starts_with("[AI disabled]"));
        assert!(OFFLINE_REPLY.contains("OPENAI_API_KEY"));
    }
}

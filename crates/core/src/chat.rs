//! Keyword chat auto-responder.
//!
//! Answers common questions locally when the backend chatbot cannot be
//! reached.

/// Greeting shown when the chat panel opens.
pub const GREETING: &str = "Hello! I'm ReCircle Assistant. How can I help you today?";

/// Reply used when no rule matches.
pub const DEFAULT_REPLY: &str = "I'm here to help with ReCircle questions! Try asking about donations, claims, badges, or environmental impact.";

struct ChatRule {
    keywords: &'static [&'static str],
    reply: &'static str,
}

const RULES: &[ChatRule] = &[
    ChatRule {
        keywords: &["donate", "donation"],
        reply: "To donate items, go to the Donation page and fill out the form with your item details. We'll help you categorize and schedule pickup.",
    },
    ChatRule {
        keywords: &["claim"],
        reply: "Partners can claim items from the item listing on their dashboard. Items are recommended based on your location and needs.",
    },
    ChatRule {
        keywords: &["badge", "challenge", "achievement"],
        reply: "Complete challenges to earn badges! Try claiming 10 items this month for the \"Community Star\" badge.",
    },
    ChatRule {
        keywords: &["impact", "environmental", "sustainability"],
        reply: "Every item donated helps reduce waste and CO2 emissions. Check your Impact Calculator to see your environmental contribution.",
    },
    ChatRule {
        keywords: &["help", "support", "assistance"],
        reply: "I can help you with donations, claims, badges, and impact tracking. Just ask me anything about ReCircle!",
    },
];

/// Pick a canned reply for a message.
#[must_use]
pub fn respond(message: &str) -> &'static str {
    let message = message.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| message.contains(kw)))
        .map_or(DEFAULT_REPLY, |rule| rule.reply)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_respond_donation_question() {
        assert!(respond("How do I DONATE a sofa?").starts_with("To donate items"));
    }

    #[test]
    fn test_respond_claim_question() {
        assert!(respond("how to claim").starts_with("Partners can claim"));
    }

    #[test]
    fn test_respond_rule_order() {
        // "donate" is checked before "help"
        assert!(respond("help me donate").starts_with("To donate items"));
    }

    #[test]
    fn test_respond_default() {
        assert_eq!(respond("what's the weather"), DEFAULT_REPLY);
        assert_eq!(respond(""), DEFAULT_REPLY);
    }
}

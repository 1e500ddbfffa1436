// Paragraph skeletons for the outreach composer.
// Every placeholder is filled by `fill_template`; unknown placeholders are left verbatim.

/// Initial cold email.
/// Replace: {company}, {focus_area}, {first_name}, {opening_line}, {value_proposition}
pub const EMAIL_TEMPLATE: &str = r#"Subject: Quick question about {company}'s {focus_area} initiatives

Hi {first_name},

{opening_line}

{value_proposition}

Would you be open to a brief 15-minute call this week to discuss how we might be able to help?

Best regards,
[Your Name]"#;

/// Follow-up after a positive reply.
/// Replace: {first_name}, {value_prop}
pub const POSITIVE_FOLLOW_UP_TEMPLATE: &str = r#"Subject: Excited to Connect – Next Steps

Hi {first_name},

Thanks for your response! I'm glad to hear you're open to discussing how we can {value_prop}.

Let's schedule a time that works best for you. Are you available [provide two or three time slots], or would you prefer to suggest a time? I'll send over a calendar invite once we confirm.

In the meantime, if there are any specific challenges or goals you'd like me to focus on during our call, feel free to share. I want to make the most of our time.

Looking forward to our conversation!

Best regards,
[Your Name]"#;

/// Follow-up after a negative reply.
/// Replace: {first_name}, {resource}, {company}
pub const NEGATIVE_FOLLOW_UP_TEMPLATE: &str = r#"Subject: Appreciate Your Time – Happy to Stay in Touch

Hi {first_name},

I appreciate you getting back to me. I completely understand that now might not be the right time.

If things change or if you'd like to revisit this conversation down the road, I'd be happy to connect when it makes sense for you. In the meantime, I'll stay in touch and share {resource}.

Wishing you and the team at {company} continued success, and feel free to reach out anytime!

Best regards,
[Your Name]"#;

/// Follow-up when the initial email got no reply.
/// Replace: {first_name}, {focus_area}, {value_prop}
pub const NO_RESPONSE_FOLLOW_UP_TEMPLATE: &str = r#"Subject: Following Up on {focus_area} Discussion

Hi {first_name},

I hope you're doing well! I wanted to follow up on my previous email to see if you had a chance to review it. I understand things get busy, and I completely respect your time.

I'd still love the opportunity to connect and share some ideas on how we can {value_prop}. Would you be open to a quick 15-minute chat this week? Let me know if there's a time that works for you.

Best regards,
[Your Name]"#;

/// Value proposition sentence, one per (focus, role) combination.
/// Replace: {focus}, {role_phrase}, {industry}, {company}
pub const VALUE_PROPOSITION_FOCUS_AND_ROLE: &str = "I've helped {role_phrase} at {focus} companies in the {industry} space streamline their operations and drive growth, and I'd love to share some specific ideas I have for {company}.";
pub const VALUE_PROPOSITION_FOCUS_ONLY: &str = "I've helped {focus} companies in the {industry} space streamline their operations and drive growth, and I'd love to share some specific ideas I have for {company}.";
pub const VALUE_PROPOSITION_ROLE_ONLY: &str = "I've helped {role_phrase} across the {industry} sector streamline their operations and drive growth, and I'd love to share some specific ideas I have for {company}.";
pub const VALUE_PROPOSITION_GENERAL: &str = "I'm reaching out because I've helped similar {industry} companies streamline their operations and drive growth. I'd love to share some specific ideas I have for {company}.";

/// Follow-up `value_prop` phrase; completes "how we can ...".
/// Replace: {focus}, {role_phrase}, {company}
pub const SUPPORT_FOCUS_AND_ROLE: &str =
    "support {company}'s {focus} initiatives and help its {role_phrase} hit their goals";
pub const SUPPORT_FOCUS_ONLY: &str = "support {company}'s {focus} initiatives";
pub const SUPPORT_ROLE_ONLY: &str = "support {company} and help {role_phrase} like you hit their goals";
pub const SUPPORT_GENERAL: &str = "support {company} as it streamlines operations and drives growth";

/// Used when the industry profile carries no resource description.
/// Replace: {company}
pub const GENERIC_RESOURCE: &str = "some insights valuable for {company}";

/// Stand-in for `{role_phrase}` when no target role was given.
pub const DEFAULT_ROLE_PHRASE: &str = "teams like yours";

/// Greeting name used when the identity name is blank.
pub const DEFAULT_FIRST_NAME: &str = "there";

/// Fills `{key}` placeholders in a single left-to-right pass.
///
/// Substituted values are never re-scanned, so user-supplied text containing
/// braces cannot expand into other placeholders.
pub fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 64);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replacement = after.find('}').and_then(|close| {
            let key = &after[..close];
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, close))
        });
        match replacement {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

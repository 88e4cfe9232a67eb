//! User-facing reply text
//!
//! Replies are Markdown-formatted for Telegram. The code value appears
//! only here, in the reply to the requester's own chat.

use cg_core::services::issuer::IssuedCode;

/// Reply carrying a freshly issued code
pub fn code_issued(issued: &IssuedCode, requester_id: i64) -> String {
    format!(
        "🔐 *Verification code*\n\n\
         Your code: `{}`\n\n\
         ⏱ The code is valid for {} seconds.\n\
         📱 Telegram ID: `{}`\n\n\
         Enter this code on the website to sign in.",
        issued.code, issued.ttl_seconds, requester_id
    )
}

/// Reply when issuance failed; deliberately vague about the cause
pub fn issuance_failed() -> String {
    "Something went wrong while generating your code. Please try again in a moment.".to_string()
}

/// Reply to `/help`
pub fn help() -> String {
    "🤖 *Bot commands:*\n\n\
     /start - Get a new verification code\n\
     /verify - Get a new verification code\n\
     /help - Show this help\n\n\
     📝 *How it works:*\n\
     1. Send /start\n\
     2. You receive a 4-digit code\n\
     3. Enter the code on the website\n\
     4. The code is valid for one minute"
        .to_string()
}

/// Reply to anything that is not a known command
pub fn fallback() -> String {
    "Send /start or /verify to get a new verification code.\n\nSend /help for usage."
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_code_reply_contains_code_ttl_and_id() {
        let issued = IssuedCode {
            code: "0427".to_string(),
            expires_at: Utc::now(),
            ttl_seconds: 60,
        };

        let reply = code_issued(&issued, 99);
        assert!(reply.contains("`0427`"));
        assert!(reply.contains("60 seconds"));
        assert!(reply.contains("`99`"));
    }

    #[test]
    fn test_failure_reply_does_not_leak_details() {
        let reply = issuance_failed();
        assert!(!reply.contains("redis"));
        assert!(!reply.contains("store"));
    }
}

//! HTML email bodies for submission notifications.

use crate::models::ContactPayload;

/// Subject line and HTML body of one outgoing email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailContent {
    pub subject: String,
    pub html: String,
}

const FONT: &str = "font-family: 'Segoe UI', system-ui, sans-serif;";

/// Escape text for safe inclusion in HTML element content and attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Operator copy: who wrote in and what they asked for.
pub fn admin_notification(payload: &ContactPayload) -> EmailContent {
    let name = escape_html(payload.name());
    let email = escape_html(payload.email().as_str());

    let rows = [
        field_row(
            "Submitted by",
            &format!(
                "{name} &lt;<a href=\"mailto:{email}\" style=\"color: #e94560; text-decoration: none;\">{email}</a>&gt;"
            ),
        ),
        field_row("Phone", &escape_html(payload.phone().as_str())),
        field_row("Service", &escape_html(payload.service())),
    ]
    .concat();

    let body = format!(
        r#"<table role="presentation" width="100%" cellpadding="0" cellspacing="0">{rows}
<tr><td style="padding-bottom: 5px; {FONT} font-size: 12px; text-transform: uppercase; color: #666666;">Message</td></tr>
<tr><td style="background-color: #f9f9f9; border-left: 4px solid #e94560; padding: 16px 20px; {FONT} font-size: 16px; line-height: 1.6; color: #333333; white-space: pre-wrap;">{message}</td></tr>
</table>"#,
        message = escape_html(payload.message()),
    );

    EmailContent {
        subject: format!(
            "New contact from {} ({})",
            payload.name(),
            payload.email()
        ),
        html: layout(
            "New Contact Submission",
            "#e94560",
            "Someone reached out from your website",
            &body,
            &format!(
                "This email was sent from your contact form. Reply to <a href=\"mailto:{email}\" style=\"color: #e94560;\">{email}</a> to respond."
            ),
        ),
    }
}

/// Submitter copy: confirmation with the details they sent.
pub fn submitter_confirmation(payload: &ContactPayload) -> EmailContent {
    let rows = [
        summary_row("Name", &escape_html(payload.name())),
        summary_row("Email", &escape_html(payload.email().as_str())),
        summary_row("Phone", &escape_html(payload.phone().as_str())),
        summary_row("Service", &escape_html(payload.service())),
    ]
    .concat();

    let body = format!(
        r#"<p style="margin: 0 0 24px 0; {FONT} font-size: 16px; line-height: 1.6; color: #444444;">Hi {name}, thank you for reaching out. Here is a copy of what you sent:</p>
<table role="presentation" width="100%" cellpadding="0" cellspacing="0" style="background-color: #f9f9f9; border: 1px solid #eeeeee; margin-bottom: 16px;">{rows}</table>
<div style="{FONT} font-size: 12px; text-transform: uppercase; color: #888888; margin-bottom: 6px;">Your message</div>
<div style="background-color: #f0f7f0; border-left: 4px solid #238636; padding: 16px; {FONT} font-size: 15px; line-height: 1.6; color: #333333; white-space: pre-wrap;">{message}</div>"#,
        name = escape_html(payload.name()),
        message = escape_html(payload.message()),
    );

    EmailContent {
        subject: "We received your message - Request submitted".to_string(),
        html: layout(
            "Request Received",
            "#238636",
            "We got your message and will get back to you soon.",
            &body,
            "You are receiving this because you submitted the contact form. We will reply to this thread if needed.",
        ),
    }
}

fn field_row(label: &str, value_html: &str) -> String {
    format!(
        r#"
<tr><td style="padding-bottom: 5px; {FONT} font-size: 12px; text-transform: uppercase; color: #666666;">{label}</td></tr>
<tr><td style="padding-bottom: 20px; border-bottom: 1px solid #eeeeee; {FONT} font-size: 16px; color: #333333;">{value_html}</td></tr>
<tr><td height="20">&nbsp;</td></tr>"#
    )
}

fn summary_row(label: &str, value_html: &str) -> String {
    format!(
        r#"
<tr><td style="padding: 8px 20px; {FONT} font-size: 15px; color: #666666;">{label}</td><td align="right" style="padding: 8px 20px; {FONT} font-size: 15px; color: #222222;">{value_html}</td></tr>"#
    )
}

fn layout(title: &str, accent: &str, tagline: &str, body: &str, footer: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head><meta charset="UTF-8"><meta name="viewport" content="width=device-width, initial-scale=1.0"><title>{title}</title></head>
<body style="margin: 0; padding: 0; background-color: #f6f6f6;">
<table role="presentation" width="100%" cellpadding="0" cellspacing="0" bgcolor="#f6f6f6">
<tr><td align="center" style="padding: 40px 20px;">
<table role="presentation" width="560" cellpadding="0" cellspacing="0" style="max-width: 560px; width: 100%; background-color: #ffffff; border: 1px solid #e0e0e0; border-radius: 12px;">
<tr><td bgcolor="{accent}" align="center" style="padding: 30px 40px;">
<h1 style="margin: 0; {FONT} font-size: 24px; color: #ffffff;">{title}</h1>
<p style="margin: 5px 0 0 0; {FONT} font-size: 14px; color: #ffffff;">{tagline}</p>
</td></tr>
<tr><td style="padding: 40px;">{body}</td></tr>
<tr><td align="center" style="padding: 20px 40px; background-color: #f9f9f9; border-top: 1px solid #eeeeee;">
<p style="margin: 0; {FONT} font-size: 12px; color: #888888;">{footer}</p>
</td></tr>
</table>
</td></tr>
</table>
</body>
</html>"##
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::ContactIntake;
    use crate::models::RawContactFields;

    fn payload(name: &str, message: &str) -> ContactPayload {
        ContactIntake::default()
            .validate(&RawContactFields {
                name: name.to_string(),
                email: "jane@example.com".to_string(),
                phone: "5551234567".to_string(),
                service: "Basements".to_string(),
                message: message.to_string(),
            })
            .unwrap()
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#039;Jerry&#039;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn test_admin_notification() {
        let email = admin_notification(&payload("Jane Doe", "Call me"));
        assert_eq!(email.subject, "New contact from Jane Doe (jane@example.com)");
        assert!(email.html.starts_with("<!DOCTYPE html>"));
        assert!(email.html.contains("mailto:jane@example.com"));
        assert!(email.html.contains("(555) 123-4567"));
        assert!(email.html.contains("Basements"));
        assert!(email.html.contains("Call me"));
    }

    #[test]
    fn test_submitter_confirmation() {
        let email = submitter_confirmation(&payload("Jane Doe", "Call me"));
        assert_eq!(
            email.subject,
            "We received your message - Request submitted"
        );
        assert!(email.html.contains("Hi Jane Doe, thank you for reaching out."));
        assert!(email.html.contains("Call me"));
    }

    #[test]
    fn test_user_content_is_escaped() {
        let email = admin_notification(&payload("<script>x</script>", "a & b"));
        assert!(!email.html.contains("<script>"));
        assert!(email.html.contains("&lt;script&gt;x&lt;/script&gt;"));
        assert!(email.html.contains("a &amp; b"));
    }
}

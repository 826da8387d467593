use crate::config;

/// Query flag the relay appends to the redirect so the page can thank the sender.
pub const SENT_FLAG: &str = "sent";

/// Routing for a form posted to the third-party mail relay.
#[derive(Clone, Debug, PartialEq)]
pub struct RelayForm {
    pub recipient: &'static str,
    pub subject: &'static str,
    /// Path (plus optional fragment) the relay sends the visitor back to.
    pub redirect_path: &'static str,
    pub captcha: bool,
}

impl RelayForm {
    pub fn action_url(&self) -> String {
        format!(
            "{}/{}",
            config::FORM_RELAY_URL.trim_end_matches('/'),
            self.recipient
        )
    }

    /// Absolute thank-you URL: the redirect path with `?sent=1` inserted
    /// before any fragment.
    pub fn redirect_url(&self, origin: &str) -> String {
        let (path, fragment) = match self.redirect_path.split_once('#') {
            Some((path, fragment)) => (path, Some(fragment)),
            None => (self.redirect_path, None),
        };
        let separator = if path.contains('?') { '&' } else { '?' };
        let mut url = format!(
            "{}{}{}{}=1",
            origin.trim_end_matches('/'),
            path,
            separator,
            SENT_FLAG
        );
        if let Some(fragment) = fragment {
            url.push('#');
            url.push_str(fragment);
        }
        url
    }

    /// Hidden inputs the relay reads to route the submission.
    pub fn hidden_fields(&self, origin: &str) -> Vec<(&'static str, String)> {
        vec![
            ("_subject", self.subject.to_string()),
            ("_next", self.redirect_url(origin)),
            ("_captcha", self.captcha.to_string()),
        ]
    }
}

/// Whether the current URL carries the relay's thank-you flag.
pub fn was_sent() -> bool {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .and_then(|search| web_sys::UrlSearchParams::new_with_str(&search).ok())
        .and_then(|params| params.get(SENT_FLAG))
        .map_or(false, |v| v == "1")
}

pub fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Visible fields of a contact form while the visitor is typing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn is_ready(&self) -> bool {
        !self.name.trim().is_empty()
            && looks_like_email(&self.email)
            && !self.message.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> RelayForm {
        RelayForm {
            recipient: "lava@immortalflame.com",
            subject: "New Lava application",
            redirect_path: "/lava#apply",
            captcha: false,
        }
    }

    #[test]
    fn recipient_is_the_last_path_segment() {
        assert_eq!(
            form().action_url(),
            "https://formsubmit.co/lava@immortalflame.com"
        );
    }

    #[test]
    fn redirect_keeps_the_fragment_after_the_flag() {
        assert_eq!(
            form().redirect_url("https://immortalflame.com/"),
            "https://immortalflame.com/lava?sent=1#apply"
        );
        let plain = RelayForm {
            redirect_path: "/immortal-room?ref=ig",
            ..form()
        };
        assert_eq!(
            plain.redirect_url("http://localhost:8080"),
            "http://localhost:8080/immortal-room?ref=ig&sent=1"
        );
    }

    #[test]
    fn hidden_fields_carry_subject_redirect_and_captcha() {
        let fields = form().hidden_fields("https://immortalflame.com");
        assert_eq!(
            fields,
            vec![
                ("_subject", "New Lava application".to_string()),
                ("_next", "https://immortalflame.com/lava?sent=1#apply".to_string()),
                ("_captcha", "false".to_string()),
            ]
        );
    }

    #[test]
    fn email_check_rejects_obvious_typos() {
        assert!(looks_like_email("ana@flame.io"));
        assert!(looks_like_email("  ana.b@mail.flame.io "));
        assert!(!looks_like_email("ana"));
        assert!(!looks_like_email("ana@flame"));
        assert!(!looks_like_email("@flame.io"));
        assert!(!looks_like_email("ana@.io"));
        assert!(!looks_like_email("ana@flame."));
        assert!(!looks_like_email("a na@flame.io"));
        assert!(!looks_like_email("ana@fl@me.io"));
    }

    #[test]
    fn draft_needs_every_field() {
        let mut draft = ContactDraft::default();
        assert!(!draft.is_ready());
        draft.name = "Ana".into();
        draft.email = "ana@flame.io".into();
        assert!(!draft.is_ready());
        draft.message = "   ".into();
        assert!(!draft.is_ready());
        draft.message = "I am ready.".into();
        assert!(draft.is_ready());
    }
}
